//! Iteration type definitions

use crate::types::{BeliefTable, TrustVector};

/// Trust and belief estimates at one step of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub trust: TrustVector,
    pub belief: BeliefTable,
}

impl Snapshot {
    /// Create a snapshot from estimate maps
    pub fn new(trust: TrustVector, belief: BeliefTable) -> Self {
        Self { trust, belief }
    }

    /// Flatten the estimates two snapshots have in common into equal-length
    /// vectors: trust for shared sources, then belief for shared
    /// (variable, value) pairs. Ordering follows the key order of `self`.
    pub fn paired_values(&self, other: &Snapshot) -> (Vec<f64>, Vec<f64>) {
        let mut ours = Vec::new();
        let mut theirs = Vec::new();

        for (source, trust) in &self.trust {
            if let Some(other_trust) = other.trust.get(source) {
                ours.push(*trust);
                theirs.push(*other_trust);
            }
        }

        for (variable, beliefs) in &self.belief {
            let Some(other_beliefs) = other.belief.get(variable) else {
                continue;
            };
            for (value, belief) in beliefs {
                if let Some(other_belief) = other_beliefs.get(value) {
                    ours.push(*belief);
                    theirs.push(*other_belief);
                }
            }
        }

        (ours, theirs)
    }
}

/// Outcome of evaluating a stopping condition for one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepDecision {
    /// Run another iteration
    Continue { distance: Option<f64> },

    /// Successive estimates are within the threshold
    Converged { distance: f64 },

    /// Iteration limit reached
    LimitReached { distance: Option<f64> },
}

impl StepDecision {
    /// Check if another iteration is requested
    pub fn should_continue(&self) -> bool {
        matches!(self, StepDecision::Continue { .. })
    }

    /// Distance measured for this step, if any
    pub fn distance(&self) -> Option<f64> {
        match self {
            StepDecision::Continue { distance } | StepDecision::LimitReached { distance } => {
                *distance
            }
            StepDecision::Converged { distance } => Some(*distance),
        }
    }
}

/// Lifecycle of an iteration controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No step recorded yet
    Initial,

    /// At least one step recorded and more requested
    Running,

    /// A step was refused; the controller must not be used again
    Terminated,
}
