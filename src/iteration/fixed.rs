//! Fixed iteration count

use crate::errors::{Result, TruthError};
use crate::iteration::types::{Snapshot, StepDecision};
use crate::iteration::StoppingRule;

/// Iterations run when no stopping condition is configured
pub const DEFAULT_LIMIT: usize = 20;

/// Run exactly `limit` iterations, ignoring the estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIterator {
    limit: usize,
}

impl FixedIterator {
    /// Create a fixed iterator. `limit` must be positive.
    pub fn new(limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(TruthError::Configuration(format!(
                "iteration limit must be a positive integer, got {}",
                limit
            )));
        }
        Ok(Self { limit })
    }

    /// Number of iterations to run
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for FixedIterator {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl StoppingRule for FixedIterator {
    fn decide(
        &self,
        iteration: usize,
        _previous: Option<&Snapshot>,
        _current: &Snapshot,
    ) -> StepDecision {
        if iteration < self.limit {
            StepDecision::Continue { distance: None }
        } else {
            StepDecision::LimitReached { distance: None }
        }
    }
}
