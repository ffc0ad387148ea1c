//! Flat-plate collector panel model.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use st_core::fluid::FluidProperties;
use st_core::units::{Area, Length, m};

/// Geometry and conversion efficiency of a single collector panel.
///
/// A spec is all-or-nothing: there is no partially-specified panel. Use
/// [`PanelUpdate`] to change individual fields of an existing panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSpec {
    /// Panel height
    pub height: Length,
    /// Panel width
    pub width: Length,
    /// Solar-to-thermal conversion efficiency (0 <= eta <= 1)
    pub efficiency: f64,
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self {
            height: m(1.0),
            width: m(1.0),
            efficiency: 0.18,
        }
    }
}

impl PanelSpec {
    /// Create a validated spec.
    ///
    /// # Errors
    /// Returns `InvalidArg` if either dimension is non-positive or the
    /// efficiency falls outside [0, 1].
    pub fn new(height: Length, width: Length, efficiency: f64) -> ComponentResult<Self> {
        let spec = Self {
            height,
            width,
            efficiency,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub(crate) fn validate(&self) -> ComponentResult<()> {
        check_finite(self.height.value, "panel height")?;
        check_finite(self.width.value, "panel width")?;
        check_finite(self.efficiency, "panel efficiency")?;
        if self.height.value <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "panel height must be positive",
            });
        }
        if self.width.value <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "panel width must be positive",
            });
        }
        if !(0.0..=1.0).contains(&self.efficiency) {
            return Err(ComponentError::InvalidArg {
                what: "panel efficiency must be in [0, 1]",
            });
        }
        Ok(())
    }
}

/// Partial update for a panel's spec. Unset fields keep their prior value.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelUpdate {
    pub height: Option<Length>,
    pub width: Option<Length>,
    pub efficiency: Option<f64>,
}

impl PanelUpdate {
    pub fn with_height(mut self, height: Length) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = Some(efficiency);
        self
    }

    /// Merge this update onto `spec` and validate the result.
    fn applied_to(&self, spec: &PanelSpec) -> ComponentResult<PanelSpec> {
        PanelSpec::new(
            self.height.unwrap_or(spec.height),
            self.width.unwrap_or(spec.width),
            self.efficiency.unwrap_or(spec.efficiency),
        )
    }
}

/// One panel of the collector array.
///
/// Converts incident solar energy into a temperature rise for the parcel
/// of fluid passing through it: absorbed energy `Q = E * A * eta`, then
/// `T2 = Q / (m * c) + T1`.
#[derive(Clone, Debug)]
pub struct Panel {
    spec: PanelSpec,
}

impl Panel {
    /// Create a panel from a validated spec.
    pub fn new(spec: PanelSpec) -> ComponentResult<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    /// Absorber area.
    pub fn area(&self) -> Area {
        self.spec.height * self.spec.width
    }

    /// Outlet temperature (°C) of a fluid parcel heated by this panel.
    ///
    /// `incident_kj_per_h_m2` is the incident solar energy per unit area,
    /// `mass_kg` the parcel mass, `inlet_c` its temperature entering the
    /// panel. Pure computation, no side effects.
    ///
    /// # Errors
    /// `InvalidArg` for negative incident energy or non-positive mass.
    pub fn outlet_temperature(
        &self,
        incident_kj_per_h_m2: f64,
        mass_kg: f64,
        inlet_c: f64,
        fluid: &FluidProperties,
    ) -> ComponentResult<f64> {
        check_finite(incident_kj_per_h_m2, "incident energy")?;
        check_finite(mass_kg, "parcel mass")?;
        check_finite(inlet_c, "inlet temperature")?;
        if incident_kj_per_h_m2 < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "incident energy must be non-negative",
            });
        }
        if mass_kg <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "parcel mass must be positive",
            });
        }

        let q_kj = incident_kj_per_h_m2 * self.area().value * self.spec.efficiency;
        Ok(q_kj / (mass_kg * fluid.specific_heat_kj_per_kg_c) + inlet_c)
    }

    /// Apply a partial spec update.
    ///
    /// The merged spec is validated before anything is assigned, so a
    /// failed update leaves the panel unchanged.
    pub fn update_spec(&mut self, update: &PanelUpdate) -> ComponentResult<()> {
        self.spec = update.applied_to(&self.spec)?;
        Ok(())
    }
}
