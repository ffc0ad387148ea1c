//! Storage tank with energy-conserving mixing.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use st_core::units::{Temperature, Volume};
use tracing::warn;
use uom::si::thermodynamic_temperature::degree_celsius;
use uom::si::volume::liter;

/// Outcome of adding water to the tank.
///
/// `overflow_l > 0` means the add hit the capacity ceiling: the overflow
/// was turned away and only `accepted_l` liters were mixed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AddOutcome {
    pub accepted_l: f64,
    pub overflow_l: f64,
}

impl AddOutcome {
    pub fn capacity_exceeded(&self) -> bool {
        self.overflow_l > 0.0
    }
}

/// Stores a volume of water at a uniform temperature.
///
/// Mixing assumes both parcels are the same fluid, so the blended
/// temperature is the volume-weighted average and total thermal energy is
/// conserved. Heat loss through the tank walls is ignored.
#[derive(Clone, Debug)]
pub struct Tank {
    capacity_l: f64,
    volume_l: f64,
    temp_c: f64,
}

impl Tank {
    /// Create a tank.
    ///
    /// # Errors
    /// `InvalidArg` unless capacity > 0 and 0 <= initial volume <= capacity.
    pub fn new(
        capacity: Volume,
        initial_volume: Volume,
        initial_temperature: Temperature,
    ) -> ComponentResult<Self> {
        let capacity_l = capacity.get::<liter>();
        let volume_l = initial_volume.get::<liter>();
        let temp_c = initial_temperature.get::<degree_celsius>();

        check_finite(capacity_l, "tank capacity")?;
        check_finite(volume_l, "tank volume")?;
        check_finite(temp_c, "tank temperature")?;
        if capacity_l <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "tank capacity must be positive",
            });
        }
        if volume_l < 0.0 || volume_l > capacity_l {
            return Err(ComponentError::InvalidArg {
                what: "initial volume must be within [0, capacity]",
            });
        }

        Ok(Self {
            capacity_l,
            volume_l,
            temp_c,
        })
    }

    pub fn capacity_l(&self) -> f64 {
        self.capacity_l
    }

    pub fn volume_l(&self) -> f64 {
        self.volume_l
    }

    pub fn temperature_c(&self) -> f64 {
        self.temp_c
    }

    /// Mix `volume_l` liters at `temp_c` into the tank.
    ///
    /// If the add would exceed capacity, the accepted volume is clamped to
    /// the remaining headroom; the overflow is reported in the outcome and
    /// logged, never silently dropped. The operation itself always
    /// proceeds with whatever fits.
    ///
    /// # Errors
    /// `InvalidArg` for non-positive volume.
    pub fn add_water(&mut self, volume_l: f64, temp_c: f64) -> ComponentResult<AddOutcome> {
        check_finite(volume_l, "added volume")?;
        check_finite(temp_c, "added temperature")?;
        if volume_l <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "added volume must be positive",
            });
        }

        let available_l = self.capacity_l - self.volume_l;
        let accepted_l = volume_l.min(available_l);
        let overflow_l = volume_l - accepted_l;

        if overflow_l > 0.0 {
            warn!(
                volume_l,
                accepted_l,
                capacity_l = self.capacity_l,
                "tank capacity exceeded; clamping added volume"
            );
        }

        if accepted_l > 0.0 {
            self.mix(accepted_l, temp_c);
        }
        if overflow_l > 0.0 {
            // A clamped fill lands exactly at capacity
            self.volume_l = self.capacity_l;
        }
        debug_assert!(self.invariant_holds());

        Ok(AddOutcome {
            accepted_l,
            overflow_l,
        })
    }

    // Volume-weighted blend: t = (v*t_in + V*T) / (v + V)
    fn mix(&mut self, volume_l: f64, temp_c: f64) {
        self.temp_c =
            (volume_l * temp_c + self.volume_l * self.temp_c) / (volume_l + self.volume_l);
        self.volume_l += volume_l;
    }

    /// Release `volume_l` liters from the tank.
    ///
    /// # Errors
    /// `InsufficientVolume` if more than the stored volume is requested;
    /// the tank is left unchanged. `InvalidArg` for non-positive volume.
    pub fn release_water(&mut self, volume_l: f64) -> ComponentResult<()> {
        check_finite(volume_l, "released volume")?;
        if volume_l <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "released volume must be positive",
            });
        }
        if volume_l > self.volume_l {
            return Err(ComponentError::InsufficientVolume {
                requested_l: volume_l,
                available_l: self.volume_l,
            });
        }
        self.volume_l -= volume_l;
        debug_assert!(self.invariant_holds());
        Ok(())
    }

    fn invariant_holds(&self) -> bool {
        self.volume_l >= 0.0 && self.volume_l <= self.capacity_l
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_core::units::{celsius, liters};

    fn tank(capacity: f64, volume: f64, temp: f64) -> Tank {
        Tank::new(liters(capacity), liters(volume), celsius(temp)).unwrap()
    }

    #[test]
    fn construction_validation() {
        assert!(Tank::new(liters(500.0), liters(60.0), celsius(15.0)).is_ok());
        assert!(Tank::new(liters(0.0), liters(0.0), celsius(15.0)).is_err());
        assert!(Tank::new(liters(100.0), liters(150.0), celsius(15.0)).is_err());
        assert!(Tank::new(liters(100.0), liters(-1.0), celsius(15.0)).is_err());
        assert!(Tank::new(liters(100.0), liters(50.0), celsius(f64::NAN)).is_err());
    }

    #[test]
    fn mixing_is_volume_weighted() {
        let mut t = tank(500.0, 60.0, 15.0);
        let outcome = t.add_water(20.0, 95.0).unwrap();
        assert_eq!(outcome.accepted_l, 20.0);
        assert_eq!(outcome.overflow_l, 0.0);
        let expected = (20.0 * 95.0 + 60.0 * 15.0) / 80.0;
        assert!((t.temperature_c() - expected).abs() < 1e-9);
        assert!((t.volume_l() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn mixing_into_empty_tank_takes_incoming_temperature() {
        let mut t = tank(100.0, 0.0, 30.0);
        t.add_water(10.0, 55.0).unwrap();
        assert_eq!(t.temperature_c(), 55.0);
        assert_eq!(t.volume_l(), 10.0);
    }

    #[test]
    fn overfill_clamps_and_reports() {
        let mut t = tank(100.0, 90.0, 15.0);
        let outcome = t.add_water(25.0, 95.0).unwrap();
        assert!(outcome.capacity_exceeded());
        assert!((outcome.accepted_l - 10.0).abs() < 1e-9);
        assert!((outcome.overflow_l - 15.0).abs() < 1e-9);
        assert_eq!(t.volume_l(), t.capacity_l());
        // Only the accepted 10 L participated in the mix
        let expected = (10.0 * 95.0 + 90.0 * 15.0) / 100.0;
        assert!((t.temperature_c() - expected).abs() < 1e-9);
    }

    #[test]
    fn add_into_full_tank_accepts_nothing() {
        let mut t = tank(100.0, 100.0, 15.0);
        let before_c = t.temperature_c();
        let outcome = t.add_water(5.0, 95.0).unwrap();
        assert_eq!(outcome.accepted_l, 0.0);
        assert_eq!(outcome.overflow_l, 5.0);
        assert_eq!(t.temperature_c(), before_c);
        assert_eq!(t.volume_l(), t.capacity_l());
    }

    #[test]
    fn add_rejects_non_positive_volume() {
        let mut t = tank(100.0, 50.0, 15.0);
        assert!(t.add_water(0.0, 20.0).is_err());
        assert!(t.add_water(-1.0, 20.0).is_err());
    }

    #[test]
    fn release_refuses_more_than_stored() {
        let mut t = tank(100.0, 10.0, 15.0);
        let before_l = t.volume_l();
        let before_c = t.temperature_c();
        let err = t.release_water(10.5).unwrap_err();
        assert!(matches!(err, ComponentError::InsufficientVolume { .. }));
        // State unchanged after refusal
        assert_eq!(t.volume_l(), before_l);
        assert_eq!(t.temperature_c(), before_c);
    }

    #[test]
    fn release_decreases_volume_only() {
        let mut t = tank(100.0, 60.0, 15.0);
        let before_c = t.temperature_c();
        t.release_water(1.0).unwrap();
        assert!((t.volume_l() - 59.0).abs() < 1e-9);
        assert_eq!(t.temperature_c(), before_c);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn mixed_temperature_is_bounded(
                v1 in 1.0_f64..400.0,
                v2 in 1.0_f64..100.0,
                t1 in -20.0_f64..120.0,
                t2 in -20.0_f64..120.0,
            ) {
                let mut t = tank(1000.0, v1, t1);
                t.add_water(v2, t2).unwrap();
                let lo = t1.min(t2);
                let hi = t1.max(t2);
                prop_assert!(t.temperature_c() >= lo - 1e-9);
                prop_assert!(t.temperature_c() <= hi + 1e-9);
                let expected = (v2 * t2 + v1 * t1) / (v1 + v2);
                prop_assert!((t.temperature_c() - expected).abs() < 1e-9);
            }

            #[test]
            fn capacity_invariant_over_call_sequences(
                ops in prop::collection::vec((0.1_f64..80.0, -10.0_f64..110.0, prop::bool::ANY), 1..40),
            ) {
                let mut t = tank(200.0, 50.0, 15.0);
                for (volume, temp, is_add) in ops {
                    if is_add {
                        let _ = t.add_water(volume, temp);
                    } else {
                        let _ = t.release_water(volume);
                    }
                    prop_assert!(t.volume_l() >= 0.0);
                    prop_assert!(t.volume_l() <= t.capacity_l());
                }
            }
        }
    }
}
