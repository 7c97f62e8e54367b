//! TruthFinder
//!
//! Source trust is the mean confidence of its claims. A claim's confidence
//! score adds up `-ln(1 - t)` over its sources, is adjusted by the scores of
//! related claims through an optional implication function, and is squashed
//! into (0, 1) by a dampened logistic.

use std::time::Instant;

use crate::algorithm::base::iterate;
use crate::algorithm::{Algorithm, AlgorithmParam, ParamValue};
use crate::dataset::{ClaimIndex, MatrixDataset};
use crate::errors::Result;
use crate::iteration::StopCondition;
use crate::results::Results;
use crate::types::{Value, VariableId};

/// Support one value lends another for the same variable, in [-1, 1]
pub type Implication = fn(VariableId, Value, Value) -> f64;

pub const DEFAULT_INITIAL_TRUST: f64 = 0.9;
pub const DEFAULT_INFLUENCE_PARAM: f64 = 0.5;
pub const DEFAULT_DAMPENING_FACTOR: f64 = 0.3;

/// Keeps `-ln(1 - t)` finite for fully trusted sources
const MAX_TRUST: f64 = 1.0 - 1e-10;

/// TruthFinder algorithm
#[derive(Debug, Clone)]
pub struct TruthFinder {
    pub iterator: StopCondition,
    pub initial_trust: f64,
    pub influence_param: f64,
    pub dampening_factor: f64,
    pub implication: Option<Implication>,
}

impl Default for TruthFinder {
    fn default() -> Self {
        Self {
            iterator: StopCondition::default(),
            initial_trust: DEFAULT_INITIAL_TRUST,
            influence_param: DEFAULT_INFLUENCE_PARAM,
            dampening_factor: DEFAULT_DAMPENING_FACTOR,
            implication: None,
        }
    }
}

impl TruthFinder {
    pub const NAME: &'static str = "truthfinder";

    pub fn new(iterator: StopCondition) -> Self {
        Self {
            iterator,
            ..Self::default()
        }
    }

    /// Accepts `iterator`, `initial_trust`, `influence_param` and `dampening_factor`
    pub fn from_params(params: &[AlgorithmParam], iterator: StopCondition) -> Result<Self> {
        let mut alg = Self::new(iterator);
        for param in params {
            match (param.name.as_str(), &param.value) {
                ("iterator", ParamValue::Iterator(it)) => alg.iterator = *it,
                ("initial_trust", ParamValue::Float(v)) => {
                    alg.initial_trust = param.checked_float(*v, |t| t > 0.0 && t < 1.0)?;
                }
                ("influence_param", ParamValue::Float(v)) => {
                    alg.influence_param = param.checked_float(*v, f64::is_finite)?;
                }
                ("dampening_factor", ParamValue::Float(v)) => {
                    alg.dampening_factor = param.checked_float(*v, |d| d.is_finite() && d > 0.0)?;
                }
                _ => return Err(param.not_accepted(Self::NAME)),
            }
        }
        Ok(alg)
    }

    pub fn with_implication(mut self, implication: Implication) -> Self {
        self.implication = Some(implication);
        self
    }

    /// Confidence scores after the implication adjustment
    fn adjusted_scores(&self, index: &ClaimIndex, scores: &[f64]) -> Vec<f64> {
        let Some(implication) = self.implication else {
            return scores.to_vec();
        };

        let claims = index.claims();
        (0..scores.len())
            .map(|claim| {
                let target = claims[claim];
                let support: f64 = index
                    .mutually_exclusive(claim)
                    .iter()
                    .filter(|other| **other != claim)
                    .map(|other| {
                        scores[*other] * implication(target.variable, claims[*other].value, target.value)
                    })
                    .sum();
                scores[claim] + self.influence_param * support
            })
            .collect()
    }
}

impl Algorithm for TruthFinder {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, data: &MatrixDataset) -> Result<Results> {
        let started = Instant::now();
        let index = ClaimIndex::new(data);
        let trust = vec![self.initial_trust; index.num_sources()];
        let belief = vec![0.0; index.num_claims()];
        let gamma = self.dampening_factor;

        iterate(Self::NAME, &self.iterator, &index, started, trust, belief, |trust, belief| {
            let trust_scores: Vec<f64> = trust.iter().map(|t| -(1.0 - t.min(MAX_TRUST)).ln()).collect();
            let scores: Vec<f64> = (0..belief.len())
                .map(|c| index.claim_sources(c).iter().map(|s| trust_scores[*s]).sum())
                .collect();

            for (b, score) in belief.iter_mut().zip(self.adjusted_scores(&index, &scores)) {
                *b = 1.0 / (1.0 + (-gamma * score).exp());
            }

            for (source, t) in trust.iter_mut().enumerate() {
                let claims = index.source_claims(source);
                if !claims.is_empty() {
                    *t = claims.iter().map(|c| belief[*c]).sum::<f64>() / claims.len() as f64;
                }
            }
        })
    }
}
