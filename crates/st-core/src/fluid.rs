//! Constant working-fluid properties.
//!
//! The loop only ever carries water, so properties are a single read-only
//! value rather than a fluid backend. Density changes with temperature are
//! ignored.

/// Physical properties of the working fluid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidProperties {
    /// Specific heat capacity (kJ/(kg·°C))
    pub specific_heat_kj_per_kg_c: f64,
    /// Density (kg/m³)
    pub density_kg_per_m3: f64,
}

/// Hot water at loop conditions.
pub const WATER: FluidProperties = FluidProperties {
    specific_heat_kj_per_kg_c: 4.2,
    density_kg_per_m3: 980.0,
};
