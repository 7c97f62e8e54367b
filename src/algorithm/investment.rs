//! Investment and Pooled Investment
//!
//! Each source spreads its trust evenly over its claims and gets back a share
//! of each claim's belief in proportion to what it invested. Claim belief
//! grows non-linearly (exponent `g`) with the trust invested in it. Pooled
//! Investment additionally shares belief out among the competing claims for a
//! variable.

use std::time::Instant;

use crate::algorithm::base::{iterate, normalize_max};
use crate::algorithm::{Algorithm, AlgorithmParam, ParamValue, PriorBelief};
use crate::dataset::{ClaimIndex, MatrixDataset};
use crate::errors::Result;
use crate::iteration::StopCondition;
use crate::results::Results;

/// Default growth exponent for Investment
pub const INVESTMENT_G: f64 = 1.2;

/// Default growth exponent for Pooled Investment
pub const POOLED_INVESTMENT_G: f64 = 1.4;

/// Investment algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct Investment {
    pub priors: PriorBelief,
    pub iterator: StopCondition,
    pub g: f64,
}

/// Pooled Investment algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PooledInvestment {
    pub priors: PriorBelief,
    pub iterator: StopCondition,
    pub g: f64,
}

impl Default for Investment {
    fn default() -> Self {
        Self {
            priors: PriorBelief::Voted,
            iterator: StopCondition::default(),
            g: INVESTMENT_G,
        }
    }
}

impl Default for PooledInvestment {
    fn default() -> Self {
        Self {
            priors: PriorBelief::Voted,
            iterator: StopCondition::default(),
            g: POOLED_INVESTMENT_G,
        }
    }
}

/// Accepts `iterator`, `priors` and `g`
fn apply_params(
    algorithm: &str,
    params: &[AlgorithmParam],
    priors: &mut PriorBelief,
    iterator: &mut StopCondition,
    g: &mut f64,
) -> Result<()> {
    for param in params {
        match (param.name.as_str(), &param.value) {
            ("iterator", ParamValue::Iterator(it)) => *iterator = *it,
            ("priors", ParamValue::Priors(p)) => *priors = *p,
            ("g", ParamValue::Float(value)) => {
                *g = param.checked_float(*value, |v| v.is_finite() && v >= 0.0)?;
            }
            _ => return Err(param.not_accepted(algorithm)),
        }
    }
    Ok(())
}

/// Trust per claim invested by a source
fn stake(index: &ClaimIndex, trust: &[f64], source: usize) -> f64 {
    match index.source_claims(source).len() {
        0 => 0.0,
        n => trust[source] / n as f64,
    }
}

/// Return on investment: each source collects belief from its claims in
/// proportion to its share of the stake placed on them
fn reinvest(index: &ClaimIndex, trust: &mut [f64], belief: &[f64]) {
    let stakes: Vec<f64> = (0..trust.len()).map(|s| stake(index, &*trust, s)).collect();
    let pools: Vec<f64> = (0..index.num_claims())
        .map(|c| index.claim_sources(c).iter().map(|s| stakes[*s]).sum())
        .collect();

    for (source, t) in trust.iter_mut().enumerate() {
        *t = index
            .source_claims(source)
            .iter()
            .filter(|c| pools[**c] > 0.0)
            .map(|c| belief[*c] * stakes[source] / pools[*c])
            .sum();
    }
}

/// Total stake placed on each claim under the current trust
fn invested(index: &ClaimIndex, trust: &[f64]) -> Vec<f64> {
    (0..index.num_claims())
        .map(|c| {
            index
                .claim_sources(c)
                .iter()
                .map(|s| stake(index, trust, *s))
                .sum()
        })
        .collect()
}

impl Investment {
    pub const NAME: &'static str = "investment";

    pub fn new(iterator: StopCondition) -> Self {
        Self {
            iterator,
            ..Self::default()
        }
    }

    pub fn from_params(params: &[AlgorithmParam], iterator: StopCondition) -> Result<Self> {
        let mut alg = Self::new(iterator);
        apply_params(Self::NAME, params, &mut alg.priors, &mut alg.iterator, &mut alg.g)?;
        Ok(alg)
    }
}

impl PooledInvestment {
    pub const NAME: &'static str = "pooled_investment";

    pub fn new(iterator: StopCondition) -> Self {
        Self {
            iterator,
            ..Self::default()
        }
    }

    pub fn from_params(params: &[AlgorithmParam], iterator: StopCondition) -> Result<Self> {
        let mut alg = Self::new(iterator);
        apply_params(Self::NAME, params, &mut alg.priors, &mut alg.iterator, &mut alg.g)?;
        Ok(alg)
    }
}

impl Algorithm for Investment {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, data: &MatrixDataset) -> Result<Results> {
        let started = Instant::now();
        let index = ClaimIndex::new(data);
        let trust = vec![1.0; index.num_sources()];
        let belief = self.priors.initial_beliefs(&index);
        let g = self.g;

        iterate(Self::NAME, &self.iterator, &index, started, trust, belief, |trust, belief| {
            reinvest(&index, trust, belief);
            normalize_max(trust);
            for (b, h) in belief.iter_mut().zip(invested(&index, trust)) {
                *b = h.powf(g);
            }
            normalize_max(belief);
        })
    }
}

impl Algorithm for PooledInvestment {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, data: &MatrixDataset) -> Result<Results> {
        let started = Instant::now();
        let index = ClaimIndex::new(data);
        let trust = vec![1.0; index.num_sources()];
        let belief = self.priors.initial_beliefs(&index);
        let g = self.g;

        iterate(Self::NAME, &self.iterator, &index, started, trust, belief, |trust, belief| {
            reinvest(&index, trust, belief);
            normalize_max(trust);

            let h = invested(&index, trust);
            let grown: Vec<f64> = h.iter().map(|x| x.powf(g)).collect();
            for (claim, b) in belief.iter_mut().enumerate() {
                let pool: f64 = index
                    .mutually_exclusive(claim)
                    .iter()
                    .map(|other| grown[*other])
                    .sum();
                *b = if pool > 0.0 {
                    h[claim] * grown[claim] / pool
                } else {
                    0.0
                };
            }
        })
    }
}
