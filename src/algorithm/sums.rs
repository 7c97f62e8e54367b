//! Sums (hubs and authorities) and Average-Log
//!
//! A source's trust is the total belief of its claims and a claim's belief is
//! the total trust of its sources. Average-Log replaces the trust total with
//! the mean belief scaled by the log of the number of claims, so sources with
//! many claims are not favoured linearly.

use std::time::Instant;

use crate::algorithm::base::{iterate, normalize_max};
use crate::algorithm::{Algorithm, AlgorithmParam, ParamValue, PriorBelief};
use crate::dataset::{ClaimIndex, MatrixDataset};
use crate::errors::Result;
use crate::iteration::StopCondition;
use crate::results::Results;

/// Sums algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct Sums {
    pub priors: PriorBelief,
    pub iterator: StopCondition,
}

/// Average-Log algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct AverageLog {
    pub priors: PriorBelief,
    pub iterator: StopCondition,
}

impl Default for Sums {
    fn default() -> Self {
        Self {
            priors: PriorBelief::Fixed,
            iterator: StopCondition::default(),
        }
    }
}

impl Default for AverageLog {
    fn default() -> Self {
        Self {
            priors: PriorBelief::Fixed,
            iterator: StopCondition::default(),
        }
    }
}

/// Accepts `iterator` and `priors`
fn apply_params(
    algorithm: &str,
    params: &[AlgorithmParam],
    priors: &mut PriorBelief,
    iterator: &mut StopCondition,
) -> Result<()> {
    for param in params {
        match (param.name.as_str(), &param.value) {
            ("iterator", ParamValue::Iterator(it)) => *iterator = *it,
            ("priors", ParamValue::Priors(p)) => *priors = *p,
            _ => return Err(param.not_accepted(algorithm)),
        }
    }
    Ok(())
}

/// Belief of a claim: total trust of its sources, max-normalized
fn update_belief(index: &ClaimIndex, trust: &[f64], belief: &mut [f64]) {
    for (claim, b) in belief.iter_mut().enumerate() {
        *b = index.claim_sources(claim).iter().map(|s| trust[*s]).sum();
    }
    normalize_max(belief);
}

impl Sums {
    pub const NAME: &'static str = "sums";

    pub fn new(iterator: StopCondition) -> Self {
        Self {
            iterator,
            ..Self::default()
        }
    }

    pub fn from_params(params: &[AlgorithmParam], iterator: StopCondition) -> Result<Self> {
        let mut alg = Self::new(iterator);
        apply_params(Self::NAME, params, &mut alg.priors, &mut alg.iterator)?;
        Ok(alg)
    }
}

impl AverageLog {
    pub const NAME: &'static str = "average_log";

    pub fn new(iterator: StopCondition) -> Self {
        Self {
            iterator,
            ..Self::default()
        }
    }

    pub fn from_params(params: &[AlgorithmParam], iterator: StopCondition) -> Result<Self> {
        let mut alg = Self::new(iterator);
        apply_params(Self::NAME, params, &mut alg.priors, &mut alg.iterator)?;
        Ok(alg)
    }
}

impl Algorithm for Sums {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, data: &MatrixDataset) -> Result<Results> {
        let started = Instant::now();
        let index = ClaimIndex::new(data);
        let trust = vec![0.0; index.num_sources()];
        let belief = self.priors.initial_beliefs(&index);

        iterate(Self::NAME, &self.iterator, &index, started, trust, belief, |trust, belief| {
            for (source, t) in trust.iter_mut().enumerate() {
                *t = index.source_claims(source).iter().map(|c| belief[*c]).sum();
            }
            normalize_max(trust);
            update_belief(&index, trust, belief);
        })
    }
}

impl Algorithm for AverageLog {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, data: &MatrixDataset) -> Result<Results> {
        let started = Instant::now();
        let index = ClaimIndex::new(data);
        let trust = vec![0.0; index.num_sources()];
        let belief = self.priors.initial_beliefs(&index);

        iterate(Self::NAME, &self.iterator, &index, started, trust, belief, |trust, belief| {
            for (source, t) in trust.iter_mut().enumerate() {
                let claims = index.source_claims(source);
                *t = if claims.is_empty() {
                    0.0
                } else {
                    let n = claims.len() as f64;
                    let total: f64 = claims.iter().map(|c| belief[*c]).sum();
                    n.ln() * total / n
                };
            }
            normalize_max(trust);
            update_belief(&index, trust, belief);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TruthError;
    use crate::iteration::FixedIterator;
    use crate::types::Value;

    fn dataset() -> MatrixDataset {
        MatrixDataset::from_csv_str("1,2,3,2\n3,,1,2\n2,2,,\n,1,,3\n").unwrap()
    }

    #[test]
    fn test_sums_fixed_iterations() {
        let alg = Sums::new(StopCondition::Fixed(FixedIterator::new(5).unwrap()));
        let results = alg.run(&dataset()).unwrap();
        assert_eq!(results.iterations(), 5);
        assert_eq!(results.trust().len(), 4);
        assert_eq!(results.belief().len(), 4);
    }

    #[test]
    fn test_sums_normalized() {
        let results = Sums::default().run(&dataset()).unwrap();
        let max_trust = results.trust().values().copied().fold(0.0, f64::max);
        assert!((max_trust - 1.0).abs() < 1e-12);
        for beliefs in results.belief().values() {
            for b in beliefs.values() {
                assert!((0.0..=1.0).contains(b));
            }
        }
    }

    #[test]
    fn test_sums_prefers_majority() {
        // Three of four sources claim 7 for variable 0
        let data = MatrixDataset::from_csv_str("7,1\n7,1\n7,2\n8,2\n").unwrap();
        let results = Sums::default().run(&data).unwrap();
        let top = results.get_most_believed_values(0).unwrap();
        assert_eq!(top.into_iter().collect::<Vec<_>>(), vec![Value::from(7)]);
    }

    #[test]
    fn test_average_log_single_claim_sources() {
        // ln(1) = 0, so sources with a single claim get no trust
        let data = MatrixDataset::from_csv_str("1,\n,2\n").unwrap();
        let results = AverageLog::default().run(&data).unwrap();
        assert!(results.trust().values().all(|t| *t == 0.0));
    }

    #[test]
    fn test_from_params() {
        let params = vec![
            "priors=uniform".parse().unwrap(),
            "iterator=fixed-3".parse().unwrap(),
        ];
        let alg = Sums::from_params(&params, StopCondition::default()).unwrap();
        assert_eq!(alg.priors, PriorBelief::Uniform);
        assert_eq!(alg.iterator.limit(), Some(3));

        let params = vec!["g=1.2".parse().unwrap()];
        assert!(matches!(
            AverageLog::from_params(&params, StopCondition::default()),
            Err(TruthError::InvalidParameter { .. })
        ));
    }
}
