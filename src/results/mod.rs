//! Results of a completed run
//!
//! A [`Results`] value is built once, by the algorithm, when its run ends.
//! Everything else here (filtering, statistics, accuracy) reads it and, where
//! a new view is needed, returns a new value.

pub mod stats;

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::{Result, TruthError};
use crate::types::{BeliefTable, GroundTruth, SourceId, TrustVector, Value, VariableId};

pub use stats::Stats;

/// Trust and belief estimates of one run, with run metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Results {
    trust: TrustVector,
    belief: BeliefTable,
    iterations: usize,
    time_taken: f64,
    accuracy: Option<f64>,
}

impl Results {
    /// Package the final estimates of a run. `time_taken` is in seconds.
    pub fn new(trust: TrustVector, belief: BeliefTable, iterations: usize, time_taken: f64) -> Self {
        Self {
            trust,
            belief,
            iterations,
            time_taken: time_taken.max(0.0),
            accuracy: None,
        }
    }

    pub fn trust(&self) -> &TrustVector {
        &self.trust
    }

    pub fn belief(&self) -> &BeliefTable {
        &self.belief
    }

    /// Number of iterations the whole run took
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Wall-clock seconds the whole run took
    pub fn time_taken(&self) -> f64 {
        self.time_taken
    }

    /// Accuracy attached by [`Results::with_accuracy`], if any
    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    /// Restrict trust to `sources` and belief to `variables`.
    ///
    /// Unknown identifiers are ignored and `None` leaves a dimension as it
    /// is. Iteration count and time describe the whole run and are kept; a
    /// stored accuracy is dropped since it was scored on the unfiltered
    /// beliefs.
    pub fn filter(&self, sources: Option<&[SourceId]>, variables: Option<&[VariableId]>) -> Results {
        let trust = match sources {
            Some(sources) => sources
                .iter()
                .filter_map(|s| self.trust.get(s).map(|t| (*s, *t)))
                .collect(),
            None => self.trust.clone(),
        };
        let belief = match variables {
            Some(variables) => variables
                .iter()
                .filter_map(|v| self.belief.get(v).map(|b| (*v, b.clone())))
                .collect(),
            None => self.belief.clone(),
        };

        Results {
            trust,
            belief,
            iterations: self.iterations,
            time_taken: self.time_taken,
            accuracy: None,
        }
    }

    /// Mean and standard deviation of the trust values present
    pub fn get_trust_stats(&self) -> Option<Stats> {
        Stats::from_values(self.trust.values().copied())
    }

    /// Mean and standard deviation of belief values, per variable
    pub fn get_belief_stats(&self) -> BTreeMap<VariableId, Option<Stats>> {
        self.belief
            .iter()
            .map(|(var, beliefs)| (*var, Stats::from_values(beliefs.values().copied())))
            .collect()
    }

    /// Every value with the maximum belief score for `variable`.
    ///
    /// Ties are all returned. Fails with [`TruthError::UnknownVariable`] when
    /// the variable has no belief entry.
    pub fn get_most_believed_values(&self, variable: VariableId) -> Result<BTreeSet<Value>> {
        let beliefs = self
            .belief
            .get(&variable)
            .ok_or(TruthError::UnknownVariable(variable))?;

        let max = beliefs.values().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(beliefs
            .iter()
            .filter(|(_, belief)| **belief == max)
            .map(|(value, _)| *value)
            .collect())
    }

    /// Share of variables whose true value is among the most believed.
    ///
    /// Only variables with both a belief entry and a true value count. `None`
    /// when there are no such variables.
    pub fn accuracy_against(&self, truth: &GroundTruth) -> Option<f64> {
        let mut total = 0usize;
        let mut correct = 0usize;

        for (variable, true_value) in truth {
            let Ok(most_believed) = self.get_most_believed_values(*variable) else {
                continue;
            };
            total += 1;
            if most_believed.contains(true_value) {
                correct += 1;
            }
        }

        if total == 0 {
            None
        } else {
            Some(correct as f64 / total as f64)
        }
    }

    /// Copy of these results carrying their accuracy against `truth`
    pub fn with_accuracy(&self, truth: &GroundTruth) -> Results {
        Results {
            accuracy: self.accuracy_against(truth),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn belief(entries: &[(VariableId, &[(i32, f64)])]) -> BeliefTable {
        entries
            .iter()
            .map(|(var, values)| {
                let inner = values.iter().map(|(v, b)| (Value::from(*v), *b)).collect();
                (*var, inner)
            })
            .collect()
    }

    fn sample() -> Results {
        let trust = BTreeMap::from([(0, 0.5), (1, 1.0), (2, 0.25)]);
        let belief = belief(&[
            (0, &[(2, 1.0), (3, 1.0)]),
            (1, &[(1, 0.5), (2, 0.75)]),
            (2, &[(7, 0.1)]),
        ]);
        Results::new(trust, belief, 12, 0.5)
    }

    #[test]
    fn test_filter_sources_and_variables() {
        let filtered = sample().filter(Some(&[0, 2]), Some(&[1]));
        assert_eq!(filtered.trust().keys().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(filtered.belief().keys().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(filtered.iterations(), 12);
        assert_eq!(filtered.time_taken(), 0.5);
    }

    #[test]
    fn test_filter_unknown_ids_ignored() {
        let filtered = sample().filter(Some(&[1, 1000]), Some(&[499, 666]));
        assert_eq!(filtered.trust().keys().copied().collect::<Vec<_>>(), vec![1]);
        assert!(filtered.belief().is_empty());
    }

    #[test]
    fn test_filter_none_leaves_dimension() {
        let results = sample();
        let filtered = results.filter(None, Some(&[0]));
        assert_eq!(filtered.trust(), results.trust());
        assert_eq!(filtered.belief().len(), 1);
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let results = sample();
        let before = results.clone();
        let _ = results.filter(Some(&[]), Some(&[]));
        assert_eq!(results, before);
    }

    #[test]
    fn test_trust_stats() {
        let stats = sample().filter(Some(&[0, 1]), None).get_trust_stats().unwrap();
        assert_eq!(stats.as_tuple(), (0.75, 0.25));
    }

    #[test]
    fn test_trust_stats_undefined_when_empty() {
        assert_eq!(sample().filter(Some(&[]), None).get_trust_stats(), None);
    }

    #[test]
    fn test_belief_stats() {
        let stats = sample().get_belief_stats();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[&0].unwrap().as_tuple(), (1.0, 0.0));
        assert_eq!(stats[&1].unwrap().as_tuple(), (0.625, 0.125));
    }

    #[test]
    fn test_most_believed_ties() {
        let values = sample().get_most_believed_values(0).unwrap();
        assert_eq!(values, BTreeSet::from([Value::from(2), Value::from(3)]));

        let values = sample().get_most_believed_values(1).unwrap();
        assert_eq!(values, BTreeSet::from([Value::from(2)]));
    }

    #[test]
    fn test_most_believed_unknown_variable() {
        assert!(matches!(
            sample().get_most_believed_values(99),
            Err(TruthError::UnknownVariable(99))
        ));
    }

    #[test]
    fn test_accuracy_membership() {
        let truth = GroundTruth::from([
            (0, Value::from(3)),
            (1, Value::from(1)),
            (2, Value::from(7)),
            (5, Value::from(1)),
        ]);
        // Variable 0 counts through the tie, variable 5 has no belief
        let accuracy = sample().accuracy_against(&truth).unwrap();
        assert!((accuracy - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_undefined() {
        let truth = GroundTruth::from([(42, Value::from(1))]);
        assert_eq!(sample().accuracy_against(&truth), None);
        assert_eq!(sample().accuracy_against(&GroundTruth::new()), None);
    }

    #[test]
    fn test_with_accuracy_and_filter() {
        let truth = GroundTruth::from([(1, Value::from(2))]);
        let scored = sample().with_accuracy(&truth);
        assert_eq!(scored.accuracy(), Some(1.0));
        assert_eq!(sample().accuracy(), None);
        assert_eq!(scored.filter(None, None).accuracy(), None);
    }
}
