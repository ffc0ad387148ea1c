//! Common utilities for component calculations.

use crate::error::{ComponentError, ComponentResult};
use st_core::numeric::ensure_finite;

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<()> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })?;
    Ok(())
}
