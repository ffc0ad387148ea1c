use crate::StError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, StError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(StError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(15.0, 15.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(15.0, 15.01, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_passes_values_through() {
        assert_eq!(ensure_finite(18.21, "temp").unwrap(), 18.21);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn nearly_equal_is_reflexive(x in -1e6_f64..1e6) {
                prop_assert!(nearly_equal(x, x, Tolerances::default()));
            }

            #[test]
            fn nearly_equal_is_symmetric(a in -1e3_f64..1e3, b in -1e3_f64..1e3) {
                let tol = Tolerances::default();
                prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
            }
        }
    }
}
