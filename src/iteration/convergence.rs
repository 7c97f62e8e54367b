//! Convergence detection between successive estimates
//!
//! Convergence alone does not guarantee termination: oscillating or noisy
//! updates may never come within the threshold. The optional limit bounds
//! the run in that case.

use crate::errors::{Result, TruthError};
use crate::iteration::distance::DistanceMeasure;
use crate::iteration::types::{Snapshot, StepDecision};
use crate::iteration::StoppingRule;

/// Iterate until successive snapshots are within `threshold` under `measure`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceIterator {
    /// Distance used to compare snapshots
    measure: DistanceMeasure,

    /// Largest distance still considered converged
    threshold: f64,

    /// Optional bound on the number of iterations
    limit: Option<usize>,
}

impl ConvergenceIterator {
    /// Create a convergence iterator.
    ///
    /// `threshold` must be a finite, non-negative number and `limit`, when
    /// given, must be positive.
    pub fn new(measure: DistanceMeasure, threshold: f64, limit: Option<usize>) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(TruthError::Configuration(format!(
                "convergence threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        if limit == Some(0) {
            return Err(TruthError::Configuration(
                "iteration limit must be a positive integer, got 0".to_string(),
            ));
        }
        Ok(Self {
            measure,
            threshold,
            limit,
        })
    }

    pub fn measure(&self) -> DistanceMeasure {
        self.measure
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn limit_reached(&self, iteration: usize) -> bool {
        self.limit.map_or(false, |limit| iteration >= limit)
    }
}

impl StoppingRule for ConvergenceIterator {
    fn decide(
        &self,
        iteration: usize,
        previous: Option<&Snapshot>,
        current: &Snapshot,
    ) -> StepDecision {
        // Nothing to compare against on the first step
        let Some(previous) = previous else {
            return StepDecision::Continue { distance: None };
        };

        let distance = self.measure.between(previous, current);
        if distance <= self.threshold {
            StepDecision::Converged { distance }
        } else if self.limit_reached(iteration) {
            StepDecision::LimitReached {
                distance: Some(distance),
            }
        } else {
            StepDecision::Continue {
                distance: Some(distance),
            }
        }
    }
}
