//! One-shot iteration controller
//!
//! A controller drives exactly one run. It counts the steps it has been shown,
//! keeps the previous snapshot when the stopping condition needs one, and
//! refuses to be consulted again once it has stopped the run.

use tracing::{debug, warn};

use crate::errors::{Result, TruthError};
use crate::iteration::types::{ControllerState, Snapshot, StepDecision};
use crate::iteration::{StopCondition, StoppingRule};

/// Stateful controller for a single run
#[derive(Debug)]
pub struct IterationController {
    /// Stopping condition
    condition: StopCondition,

    /// Number of steps recorded so far
    iteration: usize,

    /// Snapshot from the previous step (convergence conditions only)
    previous: Option<Snapshot>,

    /// Lifecycle state
    state: ControllerState,

    /// Distance measured on the latest step
    last_distance: Option<f64>,
}

impl IterationController {
    /// Create a controller in its initial state
    pub fn new(condition: StopCondition) -> Self {
        Self {
            condition,
            iteration: 0,
            previous: None,
            state: ControllerState::Initial,
            last_distance: None,
        }
    }

    /// Record one completed step and decide whether to run another.
    ///
    /// Fails with [`TruthError::ControllerTerminated`] if the controller has
    /// already stopped the run.
    pub fn should_continue(&mut self, current: Snapshot) -> Result<bool> {
        if self.state == ControllerState::Terminated {
            return Err(TruthError::ControllerTerminated {
                iterations: self.iteration,
            });
        }

        self.iteration += 1;
        let decision = self
            .condition
            .decide(self.iteration, self.previous.as_ref(), &current);
        self.last_distance = decision.distance();

        debug!(
            iteration = self.iteration,
            distance = ?self.last_distance,
            "iteration step"
        );

        match decision {
            StepDecision::Continue { .. } => {
                self.state = ControllerState::Running;
            }
            StepDecision::Converged { distance } => {
                debug!(iteration = self.iteration, distance, "converged");
                self.state = ControllerState::Terminated;
            }
            StepDecision::LimitReached { distance } => {
                if let (StopCondition::Convergence(_), Some(distance)) = (&self.condition, distance) {
                    warn!(
                        iteration = self.iteration,
                        distance,
                        "iteration limit reached before convergence"
                    );
                }
                self.state = ControllerState::Terminated;
            }
        }

        if self.condition.needs_history() && decision.should_continue() {
            self.previous = Some(current);
        } else {
            self.previous = None;
        }

        Ok(decision.should_continue())
    }

    /// Number of steps recorded so far
    pub fn iterations(&self) -> usize {
        self.iteration
    }

    /// Current lifecycle state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Distance measured on the latest step, if the condition measures one
    pub fn last_distance(&self) -> Option<f64> {
        self.last_distance
    }

    /// Stopping condition driving this controller
    pub fn condition(&self) -> &StopCondition {
        &self.condition
    }
}
