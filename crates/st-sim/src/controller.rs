//! Simulation controller and the per-second cycle loop.

use crate::config::ControllerConfig;
use crate::error::{SimError, SimResult};
use crate::report::{SimOutcome, SimReport};
use st_components::{CirculationPump, ComponentError, PanelArray, Tank};
use st_core::numeric::ensure_finite;
use st_core::units::FlowRate;
use tracing::{trace, warn};
use uom::si::thermodynamic_temperature::degree_celsius;

/// Seconds in one simulated hour; one cycle advances one second.
const SECONDS_PER_HOUR: u64 = 3600;

enum CycleOutcome {
    Completed,
    /// The tank held less than one pump stroke; nothing moved this cycle.
    Stalled,
}

/// Owns one panel array, one tank and one pump, and cycles water between
/// them until the tank reaches the target temperature or the time budget
/// runs out.
///
/// A controller is built once per run; the report it returns is the only
/// thing that outlives it. Execution is strictly sequential: draw, heat,
/// return, in that order, one cycle per simulated second.
#[derive(Debug)]
pub struct SimulationController {
    array: PanelArray,
    tank: Tank,
    pump: CirculationPump,
    target_temp_c: f64,
}

impl SimulationController {
    /// Build and wire the components from `config`.
    ///
    /// All configuration errors (bad panel specs, negative incident
    /// energy, an overfull tank, a non-positive pump rate) surface here.
    /// Once construction succeeds, runs only report physical conditions;
    /// they do not fail.
    pub fn new(config: ControllerConfig) -> SimResult<Self> {
        let max_temp_c = config.max_temperature.get::<degree_celsius>();
        ensure_finite(max_temp_c, "max temperature").map_err(|_| SimError::InvalidArg {
            what: "max temperature must be finite",
        })?;

        let mut array = PanelArray::new(config.panel_count, config.panel_spec)?
            .with_max_temperature(max_temp_c);
        array.set_incident_energy(config.incident_energy_kj_per_h_m2);
        // Incident energy is validated on read; read it now so a bad
        // value aborts construction instead of the first cycle.
        array.incident_energy()?;

        let tank = Tank::new(
            config.tank_capacity,
            config.initial_volume,
            config.initial_temperature,
        )?;
        let pump = CirculationPump::new(config.pump_rate)?;

        let target_temp_c = match config.target_temperature {
            Some(t) => t.get::<degree_celsius>(),
            None => array.max_temperature_c(),
        };
        ensure_finite(target_temp_c, "target temperature").map_err(|_| SimError::InvalidArg {
            what: "target temperature must be finite",
        })?;

        Ok(Self {
            array,
            tank,
            pump,
            target_temp_c,
        })
    }

    pub fn tank(&self) -> &Tank {
        &self.tank
    }

    pub fn array(&self) -> &PanelArray {
        &self.array
    }

    pub fn target_temperature_c(&self) -> f64 {
        self.target_temp_c
    }

    /// Change the pump rate mid-run. Validated like at construction.
    pub fn set_pump_rate(&mut self, rate: FlowRate) -> SimResult<()> {
        self.pump.set_rate(rate)?;
        Ok(())
    }

    /// Run for up to `seconds` one-second cycles.
    ///
    /// Ends in [`SimOutcome::Converged`] as soon as the tank temperature
    /// meets the target (checked after every cycle, and once up front for
    /// a tank that already starts there), otherwise in
    /// [`SimOutcome::TimeExhausted`] when the budget is spent.
    pub fn run_for_seconds(&mut self, seconds: u64) -> SimResult<SimReport> {
        if self.tank.temperature_c() >= self.target_temp_c {
            return Ok(self.report(SimOutcome::Converged, 0, 0));
        }

        let mut stalled_cycles = 0u64;
        for elapsed in 1..=seconds {
            match self.run_cycle()? {
                CycleOutcome::Completed => {}
                CycleOutcome::Stalled => stalled_cycles += 1,
            }
            trace!(
                cycle = elapsed,
                temp_c = self.tank.temperature_c(),
                "cycle complete"
            );
            if self.tank.temperature_c() >= self.target_temp_c {
                return Ok(self.report(SimOutcome::Converged, elapsed, stalled_cycles));
            }
        }

        Ok(self.report(SimOutcome::TimeExhausted, seconds, stalled_cycles))
    }

    /// Run for `hours` whole hours; the loop itself always steps seconds.
    pub fn run_for_hours(&mut self, hours: u64) -> SimResult<SimReport> {
        self.run_for_seconds(hours * SECONDS_PER_HOUR)
    }

    // One pump stroke. The order is load-bearing: draw before heat before
    // return, since each step consumes the previous one's effect.
    fn run_cycle(&mut self) -> SimResult<CycleOutcome> {
        match self.pump.draw_from_tank(&mut self.tank) {
            Ok(()) => {}
            Err(ComponentError::InsufficientVolume {
                requested_l,
                available_l,
            }) => {
                warn!(
                    requested_l,
                    available_l, "tank below one pump stroke; stalling this cycle"
                );
                return Ok(CycleOutcome::Stalled);
            }
            Err(e) => return Err(e.into()),
        }

        let outlet_c = self.pump.feed_to_array(&self.array, &self.tank)?;
        self.pump.feed_to_tank(&mut self.tank, outlet_c)?;
        Ok(CycleOutcome::Completed)
    }

    fn report(&self, outcome: SimOutcome, elapsed_s: u64, stalled_cycles: u64) -> SimReport {
        SimReport {
            outcome,
            elapsed_s,
            final_temp_c: self.tank.temperature_c(),
            stalled_cycles,
        }
    }
}
