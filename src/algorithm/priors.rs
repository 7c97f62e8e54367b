//! Initial belief in each claim

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dataset::ClaimIndex;
use crate::errors::{Result, TruthError};

/// Fixed prior belief for [`PriorBelief::Fixed`]
pub const FIXED_PRIOR: f64 = 0.5;

/// How beliefs are initialized before the first iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorBelief {
    /// Every claim starts at 0.5
    Fixed,
    /// Share of the variable's claiming sources that make the claim
    Voted,
    /// One over the number of distinct values claimed for the variable
    Uniform,
}

impl PriorBelief {
    pub const ALL: [PriorBelief; 3] = [PriorBelief::Fixed, PriorBelief::Voted, PriorBelief::Uniform];

    pub fn name(&self) -> &'static str {
        match self {
            PriorBelief::Fixed => "fixed",
            PriorBelief::Voted => "voted",
            PriorBelief::Uniform => "uniform",
        }
    }

    /// Initial belief per claim
    pub fn initial_beliefs(&self, index: &ClaimIndex) -> Vec<f64> {
        (0..index.num_claims())
            .map(|claim| match self {
                PriorBelief::Fixed => FIXED_PRIOR,
                PriorBelief::Voted => {
                    let votes = index.claim_sources(claim).len() as f64;
                    let total: usize = index
                        .mutually_exclusive(claim)
                        .iter()
                        .map(|other| index.claim_sources(*other).len())
                        .sum();
                    votes / total as f64
                }
                PriorBelief::Uniform => 1.0 / index.mutually_exclusive(claim).len() as f64,
            })
            .collect()
    }
}

impl FromStr for PriorBelief {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self> {
        PriorBelief::ALL
            .into_iter()
            .find(|prior| prior.name() == s)
            .ok_or_else(|| TruthError::InvalidPriorBelief(s.to_string()))
    }
}

impl fmt::Display for PriorBelief {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MatrixDataset;

    fn index() -> ClaimIndex {
        // Variable 0: value 1 claimed by two sources, value 2 by one
        let data = MatrixDataset::from_csv_str("1,5\n1,\n2,\n").unwrap();
        ClaimIndex::new(&data)
    }

    #[test]
    fn test_fixed() {
        assert_eq!(PriorBelief::Fixed.initial_beliefs(&index()), vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_voted() {
        let beliefs = PriorBelief::Voted.initial_beliefs(&index());
        assert!((beliefs[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((beliefs[1] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(beliefs[2], 1.0);
    }

    #[test]
    fn test_uniform() {
        assert_eq!(PriorBelief::Uniform.initial_beliefs(&index()), vec![0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("voted".parse::<PriorBelief>().unwrap(), PriorBelief::Voted);
        let err = "blah".parse::<PriorBelief>().unwrap_err();
        assert_eq!(err.to_string(), "'blah' is not a valid PriorBelief");
    }
}
