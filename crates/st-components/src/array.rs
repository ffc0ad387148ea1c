//! Collector array: distributes flow across panels and caps the outlet.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use crate::panel::{Panel, PanelSpec, PanelUpdate};
use st_core::fluid::{FluidProperties, WATER};

/// Ceiling temperature (°C) above which the array stops adding heat.
pub const DEFAULT_MAX_TEMP_C: f64 = 95.0;

/// An ordered bank of collector panels fed in parallel.
///
/// The array splits an incoming water volume evenly across its panels,
/// heats each sub-parcel at the common inlet temperature, and blends the
/// results into a total-mass-weighted outlet temperature. Parallel flow
/// paths and a uniform inlet are idealizations, not derived from any
/// transport model.
///
/// Every array owns its own panels; panels are never shared between
/// arrays.
#[derive(Clone, Debug)]
pub struct PanelArray {
    panels: Vec<Panel>,
    fluid: FluidProperties,
    /// Incident solar energy (kJ/h/m²). `None` until configured; a stored
    /// zero is a legitimate value, distinct from unset.
    incident_kj_per_h_m2: Option<f64>,
    max_temp_c: f64,
}

impl PanelArray {
    /// Create an array of `panel_count` panels.
    ///
    /// With `custom` given, every panel is built from that spec; otherwise
    /// the default spec applies. A custom spec is all-or-nothing; there
    /// is no way to supply only some of its fields.
    ///
    /// # Errors
    /// `InvalidArg` if `panel_count` is zero or the spec fails validation.
    pub fn new(panel_count: usize, custom: Option<PanelSpec>) -> ComponentResult<Self> {
        if panel_count == 0 {
            return Err(ComponentError::InvalidArg {
                what: "panel count must be at least 1",
            });
        }
        let spec = custom.unwrap_or_default();
        let panels = (0..panel_count)
            .map(|_| Panel::new(spec))
            .collect::<ComponentResult<Vec<_>>>()?;
        Ok(Self {
            panels,
            fluid: WATER,
            incident_kj_per_h_m2: None,
            max_temp_c: DEFAULT_MAX_TEMP_C,
        })
    }

    /// Use a different working fluid.
    pub fn with_fluid(mut self, fluid: FluidProperties) -> Self {
        self.fluid = fluid;
        self
    }

    /// Override the ceiling temperature (°C).
    pub fn with_max_temperature(mut self, max_temp_c: f64) -> Self {
        self.max_temp_c = max_temp_c;
        self
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn max_temperature_c(&self) -> f64 {
        self.max_temp_c
    }

    /// Store the incident solar energy (kJ/h/m²).
    ///
    /// Any magnitude is accepted here; validation happens when the value
    /// is read.
    pub fn set_incident_energy(&mut self, kj_per_h_m2: f64) {
        self.incident_kj_per_h_m2 = Some(kj_per_h_m2);
    }

    /// Read the configured incident energy.
    ///
    /// # Errors
    /// `InvalidState` if it was never set, `InvalidArg` if the stored
    /// value is negative, `NonPhysical` if it is not finite.
    pub fn incident_energy(&self) -> ComponentResult<f64> {
        let value = self
            .incident_kj_per_h_m2
            .ok_or(ComponentError::InvalidState {
                what: "incident energy has not been set",
            })?;
        check_finite(value, "incident energy")?;
        if value < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "incident energy must be non-negative",
            });
        }
        Ok(value)
    }

    /// Update one panel's spec in place.
    ///
    /// # Errors
    /// `IndexOob` if `index` is past the last panel; a failed update never
    /// silently no-ops.
    pub fn set_spec_at(&mut self, index: usize, update: &PanelUpdate) -> ComponentResult<()> {
        let len = self.panels.len();
        let panel = self
            .panels
            .get_mut(index)
            .ok_or(ComponentError::IndexOob {
                what: "panel index",
                index,
                len,
            })?;
        panel.update_spec(update)
    }

    /// Heat `volume_l` liters entering at `inlet_c` and return the blended
    /// outlet temperature (°C).
    ///
    /// An inlet at or above the ceiling short-circuits to the ceiling
    /// itself: an idealized thermostatic cutoff that truncates rather than
    /// plateaus.
    ///
    /// # Errors
    /// `InvalidArg` for non-positive volume, plus whatever
    /// [`incident_energy`](Self::incident_energy) reports.
    pub fn heat_water(&self, volume_l: f64, inlet_c: f64) -> ComponentResult<f64> {
        check_finite(volume_l, "heated volume")?;
        check_finite(inlet_c, "inlet temperature")?;
        if volume_l <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "heated volume must be positive",
            });
        }
        if inlet_c >= self.max_temp_c {
            return Ok(self.max_temp_c);
        }

        let incident = self.incident_energy()?;
        let volume_per_panel_l = volume_l / self.panels.len() as f64;
        let mass_per_panel_kg = volume_per_panel_l * self.fluid.density_kg_per_m3;
        let total_mass_kg = volume_l * self.fluid.density_kg_per_m3;

        let mut weighted_temp_sum = 0.0;
        for panel in &self.panels {
            let outlet_c =
                panel.outlet_temperature(incident, mass_per_panel_kg, inlet_c, &self.fluid)?;
            weighted_temp_sum += outlet_c * mass_per_panel_kg;
        }

        Ok(weighted_temp_sum / total_mass_kg)
    }
}
