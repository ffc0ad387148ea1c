//! st-components: component library for the solar heating loop.
//!
//! Provides the physical pieces of a closed-loop solar water heater:
//! - Collector panels converting incident solar energy into a temperature rise
//! - A panel array distributing flow and capping the outlet temperature
//! - A storage tank with energy-conserving mixing
//! - A circulation pump sequencing transfers between tank and array
//!
//! All components are deterministic functions of state and parameters; the
//! only mutable state lives in the tank and in panel specs.
//!
//! # Example
//!
//! ```
//! use st_components::{CirculationPump, PanelArray, Tank};
//! use st_core::units::{celsius, liters, lps};
//!
//! let mut array = PanelArray::new(1, None).unwrap();
//! array.set_incident_energy(1224.0);
//!
//! let mut tank = Tank::new(liters(500.0), liters(60.0), celsius(15.0)).unwrap();
//! let pump = CirculationPump::new(lps(1.0)).unwrap();
//!
//! // One circulation stroke: draw, heat, return.
//! pump.draw_from_tank(&mut tank).unwrap();
//! let outlet_c = pump.feed_to_array(&array, &tank).unwrap();
//! pump.feed_to_tank(&mut tank, outlet_c).unwrap();
//!
//! assert!(tank.temperature_c() > 15.0);
//! ```

pub mod array;
pub mod common;
pub mod error;
pub mod panel;
pub mod pump;
pub mod tank;

// Re-exports
pub use array::{DEFAULT_MAX_TEMP_C, PanelArray};
pub use error::{ComponentError, ComponentResult};
pub use panel::{Panel, PanelSpec, PanelUpdate};
pub use pump::CirculationPump;
pub use tank::{AddOutcome, Tank};
