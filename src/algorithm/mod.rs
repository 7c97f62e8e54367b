//! Truth-discovery algorithms
//!
//! Each algorithm initializes trust and belief estimates, updates them until
//! its [`StopCondition`] says stop, and packages the final estimates into
//! [`Results`]. The set of algorithms is closed: [`AlgorithmKind`] maps
//! labels to implementations.

mod base;
pub mod investment;
pub mod params;
pub mod priors;
pub mod sums;
pub mod truthfinder;
pub mod voting;

use std::fmt;
use std::str::FromStr;

use crate::dataset::MatrixDataset;
use crate::errors::{Result, TruthError};
use crate::iteration::StopCondition;
use crate::results::Results;

pub use investment::{Investment, PooledInvestment};
pub use params::{AlgorithmParam, ParamValue};
pub use priors::PriorBelief;
pub use sums::{AverageLog, Sums};
pub use truthfinder::TruthFinder;
pub use voting::MajorityVoting;

/// A truth-discovery algorithm
pub trait Algorithm: fmt::Debug + Send + Sync {
    /// Label the algorithm is registered under
    fn name(&self) -> &'static str;

    /// Estimate trust and belief for `data`
    fn run(&self, data: &MatrixDataset) -> Result<Results>;
}

/// Registered algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    AverageLog,
    Investment,
    PooledInvestment,
    Sums,
    TruthFinder,
    Voting,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::AverageLog,
        AlgorithmKind::Investment,
        AlgorithmKind::PooledInvestment,
        AlgorithmKind::Sums,
        AlgorithmKind::TruthFinder,
        AlgorithmKind::Voting,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlgorithmKind::AverageLog => AverageLog::NAME,
            AlgorithmKind::Investment => Investment::NAME,
            AlgorithmKind::PooledInvestment => PooledInvestment::NAME,
            AlgorithmKind::Sums => Sums::NAME,
            AlgorithmKind::TruthFinder => TruthFinder::NAME,
            AlgorithmKind::Voting => MajorityVoting::NAME,
        }
    }

    /// Whether runs are driven by a stop condition
    pub fn is_iterative(&self) -> bool {
        !matches!(self, AlgorithmKind::Voting)
    }

    /// Build the algorithm from parameters. `iterator` is used unless the
    /// parameters name one.
    pub fn build(&self, params: &[AlgorithmParam], iterator: StopCondition) -> Result<Box<dyn Algorithm>> {
        let algorithm: Box<dyn Algorithm> = match self {
            AlgorithmKind::AverageLog => Box::new(AverageLog::from_params(params, iterator)?),
            AlgorithmKind::Investment => Box::new(Investment::from_params(params, iterator)?),
            AlgorithmKind::PooledInvestment => {
                Box::new(PooledInvestment::from_params(params, iterator)?)
            }
            AlgorithmKind::Sums => Box::new(Sums::from_params(params, iterator)?),
            AlgorithmKind::TruthFinder => Box::new(TruthFinder::from_params(params, iterator)?),
            AlgorithmKind::Voting => Box::new(MajorityVoting::from_params(params)?),
        };
        Ok(algorithm)
    }
}

impl FromStr for AlgorithmKind {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self> {
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| TruthError::InvalidAlgorithm {
                label: s.to_string(),
            })
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.label().parse::<AlgorithmKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_label() {
        let err = "joesalgorithm".parse::<AlgorithmKind>().unwrap_err();
        assert_eq!(err.to_string(), "invalid algorithm label 'joesalgorithm'");
    }

    #[test]
    fn test_build_uses_default_iterator() {
        let iterator: StopCondition = "fixed-7".parse().unwrap();
        let alg = AlgorithmKind::Sums.build(&[], iterator).unwrap();
        assert_eq!(alg.name(), "sums");

        let data = MatrixDataset::from_csv_str("1,2\n1,3\n").unwrap();
        assert_eq!(alg.run(&data).unwrap().iterations(), 7);
    }

    #[test]
    fn test_build_rejects_unknown_parameter() {
        let params = vec!["g=1.5".parse().unwrap()];
        assert!(AlgorithmKind::Sums.build(&params, StopCondition::default()).is_err());
        assert!(AlgorithmKind::Investment
            .build(&params, StopCondition::default())
            .is_ok());
    }
}
