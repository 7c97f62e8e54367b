//! Majority voting
//!
//! Not iterative: belief is the number of sources claiming a value and every
//! source has trust 1.

use std::time::Instant;

use crate::algorithm::base::finish;
use crate::algorithm::{Algorithm, AlgorithmParam};
use crate::dataset::{ClaimIndex, MatrixDataset};
use crate::errors::Result;
use crate::results::Results;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MajorityVoting;

impl MajorityVoting {
    pub const NAME: &'static str = "voting";

    /// Takes no parameters
    pub fn from_params(params: &[AlgorithmParam]) -> Result<Self> {
        match params.first() {
            Some(param) => Err(param.not_accepted(Self::NAME)),
            None => Ok(Self),
        }
    }
}

impl Algorithm for MajorityVoting {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, data: &MatrixDataset) -> Result<Results> {
        let started = Instant::now();
        let index = ClaimIndex::new(data);
        let trust = vec![1.0; index.num_sources()];
        let belief: Vec<f64> = (0..index.num_claims())
            .map(|c| index.claim_sources(c).len() as f64)
            .collect();

        Ok(finish(Self::NAME, &index, &trust, &belief, 1, started))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;
    use std::collections::BTreeSet;

    #[test]
    fn test_votes() {
        let data = MatrixDataset::from_csv_str("1,2,3,2\n3,,1,2\n2,2,,\n,1,,3\n").unwrap();
        let results = MajorityVoting.run(&data).unwrap();

        assert_eq!(results.iterations(), 1);
        assert!(results.trust().values().all(|t| *t == 1.0));
        assert_eq!(results.belief()[&1][&Value::from(2)], 2.0);

        let expected: [(usize, &[i32]); 4] = [(0, &[1, 2, 3]), (1, &[2]), (2, &[1, 3]), (3, &[2])];
        for (var, values) in expected {
            let want: BTreeSet<Value> = values.iter().map(|v| Value::from(*v)).collect();
            assert_eq!(results.get_most_believed_values(var).unwrap(), want);
        }
    }

    #[test]
    fn test_rejects_parameters() {
        let params = vec!["iterator=fixed-3".parse().unwrap()];
        assert!(MajorityVoting::from_params(&params).is_err());
        assert!(MajorityVoting::from_params(&[]).is_ok());
    }
}
