//! Iteration control
//!
//! Decides when an iterative trust/belief estimation has run long enough.
//! A [`StopCondition`] is the reusable configuration; each run mints its own
//! [`IterationController`] from it and owns that controller exclusively.

pub mod controller;
pub mod convergence;
pub mod distance;
pub mod fixed;
mod parse;
pub mod types;

use std::fmt;

pub use controller::IterationController;
pub use convergence::ConvergenceIterator;
pub use distance::DistanceMeasure;
pub use fixed::FixedIterator;
pub use types::{ControllerState, Snapshot, StepDecision};

/// Stopping decision evaluated once per algorithm step
pub trait StoppingRule {
    /// Evaluate the step numbered `iteration` (1 for the first completed step)
    fn decide(
        &self,
        iteration: usize,
        previous: Option<&Snapshot>,
        current: &Snapshot,
    ) -> StepDecision;

    /// `true` to request another iteration, `false` to stop
    fn should_continue(
        &self,
        iteration: usize,
        previous: Option<&Snapshot>,
        current: &Snapshot,
    ) -> bool {
        self.decide(iteration, previous, current).should_continue()
    }
}

/// Closed set of stopping conditions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopCondition {
    Fixed(FixedIterator),
    Convergence(ConvergenceIterator),
}

impl StopCondition {
    /// Start a fresh controller for one run
    pub fn controller(&self) -> IterationController {
        IterationController::new(*self)
    }

    /// Whether decisions depend on the previous snapshot
    pub fn needs_history(&self) -> bool {
        matches!(self, StopCondition::Convergence(_))
    }

    /// Upper bound on iterations, if any
    pub fn limit(&self) -> Option<usize> {
        match self {
            StopCondition::Fixed(fixed) => Some(fixed.limit()),
            StopCondition::Convergence(convergence) => convergence.limit(),
        }
    }
}

impl StoppingRule for StopCondition {
    fn decide(
        &self,
        iteration: usize,
        previous: Option<&Snapshot>,
        current: &Snapshot,
    ) -> StepDecision {
        match self {
            StopCondition::Fixed(fixed) => fixed.decide(iteration, previous, current),
            StopCondition::Convergence(convergence) => {
                convergence.decide(iteration, previous, current)
            }
        }
    }
}

impl Default for StopCondition {
    fn default() -> Self {
        StopCondition::Fixed(FixedIterator::default())
    }
}

impl From<FixedIterator> for StopCondition {
    fn from(fixed: FixedIterator) -> Self {
        StopCondition::Fixed(fixed)
    }
}

impl From<ConvergenceIterator> for StopCondition {
    fn from(convergence: ConvergenceIterator) -> Self {
        StopCondition::Convergence(convergence)
    }
}

impl fmt::Display for StopCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopCondition::Fixed(fixed) => write!(f, "fixed-{}", fixed.limit()),
            StopCondition::Convergence(convergence) => {
                write!(
                    f,
                    "{}-convergence-{}",
                    convergence.measure(),
                    convergence.threshold()
                )?;
                if let Some(limit) = convergence.limit() {
                    write!(f, "-limit-{}", limit)?;
                }
                Ok(())
            }
        }
    }
}
