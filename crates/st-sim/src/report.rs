//! Typed run results.

use std::fmt;

/// Terminal state of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimOutcome {
    /// The tank reached the target temperature.
    Converged,
    /// The requested duration elapsed first.
    TimeExhausted,
}

/// What a run produced: how long it took and where the tank ended up.
///
/// Presentation layers (CLI, logs, tests) consume this directly; nothing
/// in the core prints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimReport {
    pub outcome: SimOutcome,
    /// Whole seconds simulated before the run ended
    pub elapsed_s: u64,
    /// Tank temperature at the end of the run (°C)
    pub final_temp_c: f64,
    /// Cycles skipped because the tank held less than one pump stroke
    pub stalled_cycles: u64,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            SimOutcome::Converged => write!(
                f,
                "target reached after {} s; tank at {:.2} °C",
                self.elapsed_s, self.final_temp_c
            )?,
            SimOutcome::TimeExhausted => write!(
                f,
                "time budget exhausted after {} s; tank at {:.2} °C",
                self.elapsed_s, self.final_temp_c
            )?,
        }
        if self.stalled_cycles > 0 {
            write!(f, " ({} stalled cycles)", self.stalled_cycles)?;
        }
        Ok(())
    }
}
