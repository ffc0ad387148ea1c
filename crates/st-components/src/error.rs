//! Error types for component operations.

use thiserror::Error;

/// Errors that can occur during component calculations.
#[derive(Error, Debug, Clone)]
pub enum ComponentError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid state: {what}")]
    InvalidState { what: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Insufficient volume: requested {requested_l} L, stored {available_l} L")]
    InsufficientVolume { requested_l: f64, available_l: f64 },
}

pub type ComponentResult<T> = Result<T, ComponentError>;
