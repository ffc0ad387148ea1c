//! Run configuration with the documented defaults.

use st_components::{DEFAULT_MAX_TEMP_C, PanelSpec};
use st_core::units::{FlowRate, Temperature, Volume, celsius, liters, lps};

/// Everything needed to build a [`SimulationController`].
///
/// Configuration is entirely in-process; there are no files or wire
/// formats behind this struct.
///
/// [`SimulationController`]: crate::SimulationController
#[derive(Clone, Copy, Debug)]
pub struct ControllerConfig {
    /// Number of collector panels (>= 1)
    pub panel_count: usize,
    /// Uniform spec for every panel; `None` uses the default spec
    pub panel_spec: Option<PanelSpec>,
    /// Incident solar energy (kJ/h/m²)
    pub incident_energy_kj_per_h_m2: f64,
    /// Ceiling temperature enforced by the array
    pub max_temperature: Temperature,
    /// Tank capacity
    pub tank_capacity: Volume,
    /// Water volume in the tank at the start of the run
    pub initial_volume: Volume,
    /// Water temperature at the start of the run
    pub initial_temperature: Temperature,
    /// Pump transfer rate
    pub pump_rate: FlowRate,
    /// Stop once the tank reaches this temperature; `None` targets the
    /// array's ceiling
    pub target_temperature: Option<Temperature>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            panel_count: 1,
            panel_spec: None,
            incident_energy_kj_per_h_m2: 1224.0,
            max_temperature: celsius(DEFAULT_MAX_TEMP_C),
            tank_capacity: liters(500.0),
            initial_volume: liters(60.0),
            initial_temperature: celsius(15.0),
            pump_rate: lps(1.0),
            target_temperature: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.panel_count, 1);
        assert!(config.panel_spec.is_none());
        assert_eq!(config.incident_energy_kj_per_h_m2, 1224.0);
        assert_eq!(config.tank_capacity, liters(500.0));
        assert_eq!(config.initial_volume, liters(60.0));
        assert_eq!(config.initial_temperature, celsius(15.0));
        assert_eq!(config.pump_rate, lps(1.0));
        assert!(config.target_temperature.is_none());
    }
}
