//! st-core: stable foundation for solartherm.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - fluid (constant working-fluid properties)
//! - error (shared error types)

pub mod error;
pub mod fluid;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{StError, StResult};
pub use fluid::{FluidProperties, WATER};
pub use numeric::*;
pub use units::*;
