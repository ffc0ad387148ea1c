use clap::Parser;
use st_components::PanelSpec;
use st_core::units::{celsius, liters, lps, m};
use st_sim::{ControllerConfig, SimError, SimResult, SimulationController};

#[derive(Parser)]
#[command(name = "st-cli")]
#[command(about = "SolarTherm CLI - closed-loop solar water heater simulation", long_about = None)]
struct Cli {
    /// Number of collector panels
    #[arg(long, default_value_t = 1)]
    panels: usize,

    /// Panel height in meters (give all three panel flags or none)
    #[arg(long)]
    panel_height: Option<f64>,

    /// Panel width in meters
    #[arg(long)]
    panel_width: Option<f64>,

    /// Panel efficiency in [0, 1]
    #[arg(long)]
    panel_efficiency: Option<f64>,

    /// Incident solar energy (kJ/h/m²)
    #[arg(long, default_value_t = 1224.0)]
    incident_energy: f64,

    /// Tank capacity (L)
    #[arg(long, default_value_t = 500.0)]
    tank_capacity: f64,

    /// Water volume in the tank at the start (L)
    #[arg(long, default_value_t = 60.0)]
    tank_volume: f64,

    /// Water temperature at the start (°C)
    #[arg(long, default_value_t = 15.0)]
    tank_temperature: f64,

    /// Pump transfer rate (L/s)
    #[arg(long, default_value_t = 1.0)]
    pump_rate: f64,

    /// Stop once the tank reaches this temperature (°C); defaults to the
    /// array's 95 °C ceiling
    #[arg(long)]
    target: Option<f64>,

    /// Simulate this many whole hours (default: 1)
    #[arg(long, conflicts_with = "seconds")]
    hours: Option<u64>,

    /// Simulate this many seconds
    #[arg(long)]
    seconds: Option<u64>,
}

fn panel_spec_from_flags(cli: &Cli) -> SimResult<Option<PanelSpec>> {
    match (cli.panel_height, cli.panel_width, cli.panel_efficiency) {
        (None, None, None) => Ok(None),
        (Some(h), Some(w), Some(e)) => Ok(Some(PanelSpec::new(m(h), m(w), e)?)),
        _ => Err(SimError::InvalidArg {
            what: "panel flags are all-or-nothing: give height, width and efficiency together",
        }),
    }
}

fn main() -> SimResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = ControllerConfig {
        panel_count: cli.panels,
        panel_spec: panel_spec_from_flags(&cli)?,
        incident_energy_kj_per_h_m2: cli.incident_energy,
        tank_capacity: liters(cli.tank_capacity),
        initial_volume: liters(cli.tank_volume),
        initial_temperature: celsius(cli.tank_temperature),
        pump_rate: lps(cli.pump_rate),
        target_temperature: cli.target.map(celsius),
        ..Default::default()
    };

    let mut controller = SimulationController::new(config)?;
    let report = match (cli.seconds, cli.hours) {
        (Some(seconds), _) => controller.run_for_seconds(seconds)?,
        (None, hours) => controller.run_for_hours(hours.unwrap_or(1))?,
    };

    println!("{report}");
    Ok(())
}
