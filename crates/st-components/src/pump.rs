//! Circulation pump: moves fixed-rate strokes between tank and array.

use crate::array::PanelArray;
use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use crate::tank::{AddOutcome, Tank};
use st_core::units::FlowRate;
use uom::si::volume_rate::liter_per_second;

/// Moves one stroke of water per cycle: draw from the tank, heat it in
/// the array, return it to the tank. The pump owns neither the tank nor
/// the array; each operation borrows the component it acts on, and the
/// draw → heat → return order is up to the caller.
#[derive(Clone, Debug)]
pub struct CirculationPump {
    rate_l_per_s: f64,
}

impl CirculationPump {
    /// Create a pump with a fixed transfer rate.
    ///
    /// # Errors
    /// `InvalidArg` unless the rate is positive and finite.
    pub fn new(rate: FlowRate) -> ComponentResult<Self> {
        let rate_l_per_s = Self::validated_rate(rate)?;
        Ok(Self { rate_l_per_s })
    }

    fn validated_rate(rate: FlowRate) -> ComponentResult<f64> {
        let rate_l_per_s = rate.get::<liter_per_second>();
        check_finite(rate_l_per_s, "pump rate")?;
        if rate_l_per_s <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "pump rate must be positive",
            });
        }
        Ok(rate_l_per_s)
    }

    pub fn rate_l_per_s(&self) -> f64 {
        self.rate_l_per_s
    }

    /// Change the transfer rate. Permitted mid-run, validated the same as
    /// at construction.
    pub fn set_rate(&mut self, rate: FlowRate) -> ComponentResult<()> {
        self.rate_l_per_s = Self::validated_rate(rate)?;
        Ok(())
    }

    /// Draw one stroke from the tank; the tank's volume decreases.
    ///
    /// # Errors
    /// Propagates `InsufficientVolume` when the tank holds less than one
    /// stroke.
    pub fn draw_from_tank(&self, tank: &mut Tank) -> ComponentResult<()> {
        tank.release_water(self.rate_l_per_s)
    }

    /// Outlet temperature (°C) of one stroke heated by the array at the
    /// tank's current temperature. No tank mutation.
    pub fn feed_to_array(&self, array: &PanelArray, tank: &Tank) -> ComponentResult<f64> {
        array.heat_water(self.rate_l_per_s, tank.temperature_c())
    }

    /// Return one stroke to the tank at `temp_c`.
    pub fn feed_to_tank(&self, tank: &mut Tank, temp_c: f64) -> ComponentResult<AddOutcome> {
        tank.add_water(self.rate_l_per_s, temp_c)
    }
}
