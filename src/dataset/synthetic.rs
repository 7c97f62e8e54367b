//! Synthetic supervised datasets
//!
//! Each source has a trust level: the probability that a claim it makes is
//! the true value. Wrong claims are spread uniformly over the other values of
//! the domain.

use rand::Rng;

use crate::dataset::{MatrixDataset, SupervisedData};
use crate::errors::{Result, TruthError};
use crate::types::{GroundTruth, Value};

/// Parameters for generating a synthetic dataset
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticData {
    trust: Vec<f64>,
    num_variables: usize,
    claim_probability: f64,
    domain_size: usize,
}

impl SyntheticData {
    pub fn new(
        trust: Vec<f64>,
        num_variables: usize,
        claim_probability: f64,
        domain_size: usize,
    ) -> Result<Self> {
        if trust.is_empty() {
            return Err(TruthError::SyntheticData(
                "At least one source trust value is required".to_string(),
            ));
        }
        if trust.iter().any(|t| !(0.0..=1.0).contains(t)) {
            return Err(TruthError::SyntheticData(
                "Trust values must be in [0, 1]".to_string(),
            ));
        }
        if num_variables == 0 {
            return Err(TruthError::SyntheticData(
                "Number of variables must be positive".to_string(),
            ));
        }
        if !(claim_probability > 0.0 && claim_probability <= 1.0) {
            return Err(TruthError::SyntheticData(
                "Claim probability must be in (0, 1]".to_string(),
            ));
        }
        if domain_size < 2 {
            return Err(TruthError::SyntheticData(
                "Domain size must be at least 2".to_string(),
            ));
        }

        Ok(Self {
            trust,
            num_variables,
            claim_probability,
            domain_size,
        })
    }

    pub fn num_sources(&self) -> usize {
        self.trust.len()
    }

    /// Draw true values and claims
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SupervisedData {
        let truth: Vec<usize> = (0..self.num_variables)
            .map(|_| rng.gen_range(0..self.domain_size))
            .collect();

        let rows: Vec<Vec<Option<Value>>> = self
            .trust
            .iter()
            .map(|&trust| {
                truth
                    .iter()
                    .map(|&true_value| {
                        if !rng.gen_bool(self.claim_probability) {
                            return None;
                        }
                        let value = if rng.gen_bool(trust) {
                            true_value
                        } else {
                            // Uniform over the other values
                            let wrong = rng.gen_range(0..self.domain_size - 1);
                            if wrong >= true_value {
                                wrong + 1
                            } else {
                                wrong
                            }
                        };
                        Some(Value::new(value as f64))
                    })
                    .collect()
            })
            .collect();

        let values: GroundTruth = truth
            .iter()
            .enumerate()
            .map(|(var, value)| (var, Value::new(*value as f64)))
            .collect();
        let data = MatrixDataset::from_uniform_rows(rows, self.num_variables);
        SupervisedData::new(data, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_invalid_parameters() {
        let err = SyntheticData::new(vec![2.0], 10, 0.5, 4).unwrap_err();
        assert_eq!(err.to_string(), "Trust values must be in [0, 1]");
        assert!(SyntheticData::new(vec![], 10, 0.5, 4).is_err());
        assert!(SyntheticData::new(vec![0.5], 0, 0.5, 4).is_err());
        assert!(SyntheticData::new(vec![0.5], 10, 0.0, 4).is_err());
        assert!(SyntheticData::new(vec![0.5], 10, 1.5, 4).is_err());
        assert!(SyntheticData::new(vec![0.5], 10, 0.5, 1).is_err());
    }

    #[test]
    fn test_shape_and_domain() {
        let synth = SyntheticData::new(vec![0.5, 0.6, 0.7], 10, 0.5, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let sup = synth.generate(&mut rng);

        assert_eq!(sup.data.num_sources(), 3);
        assert_eq!(sup.data.num_variables(), 10);
        assert_eq!(sup.values.len(), 10);
        for row in sup.data.rows() {
            for value in row.iter().flatten() {
                assert!((0.0..5.0).contains(&value.get()));
                assert!(value.is_integral());
            }
        }
    }

    #[test]
    fn test_sparse_claims_keep_full_width() {
        let synth = SyntheticData::new(vec![0.5; 6], 3, 0.05, 4).unwrap();
        let sup = synth.generate(&mut StdRng::seed_from_u64(19));

        assert_eq!(sup.data.num_sources(), 6);
        assert_eq!(sup.data.num_variables(), 3);
        assert!(sup.data.rows().iter().all(|row| row.len() == 3));
        assert!(sup.data.num_claims() < 18);
    }

    #[test]
    fn test_fully_trusted_source_copies_truth() {
        let synth = SyntheticData::new(vec![1.0], 25, 1.0, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let sup = synth.generate(&mut rng);
        for var in sup.data.variables() {
            assert_eq!(sup.data.claim(0, var), sup.values.get(&var).copied());
        }
    }

    #[test]
    fn test_untrusted_source_never_right() {
        let synth = SyntheticData::new(vec![0.0], 25, 1.0, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let sup = synth.generate(&mut rng);
        for var in sup.data.variables() {
            assert_ne!(sup.data.claim(0, var), sup.values.get(&var).copied());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let synth = SyntheticData::new(vec![0.3, 0.9], 8, 0.7, 4).unwrap();
        let a = synth.generate(&mut StdRng::seed_from_u64(42));
        let b = synth.generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
