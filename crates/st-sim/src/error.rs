//! Error types for simulation runs.

use st_components::ComponentError;
use thiserror::Error;

/// Errors encountered while configuring or driving a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Component(#[from] ComponentError),
}

pub type SimResult<T> = Result<T, SimError>;
