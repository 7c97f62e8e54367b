//! Claim lookup tables used by the algorithms
//!
//! A claim is a distinct (variable, value) pair. Claim ids are assigned in
//! (variable, value) order so runs are reproducible.

use std::collections::BTreeMap;

use crate::dataset::MatrixDataset;
use crate::iteration::Snapshot;
use crate::types::{BeliefTable, SourceId, TrustVector, Value, VariableId};

/// Index into [`ClaimIndex::claims`]
pub type ClaimId = usize;

/// A value proposed for a variable by at least one source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub variable: VariableId,
    pub value: Value,
}

/// Incidence between sources and claims
#[derive(Debug, Clone)]
pub struct ClaimIndex {
    claims: Vec<Claim>,
    source_claims: Vec<Vec<ClaimId>>,
    claim_sources: Vec<Vec<SourceId>>,
    variable_claims: BTreeMap<VariableId, Vec<ClaimId>>,
}

impl ClaimIndex {
    pub fn new(data: &MatrixDataset) -> Self {
        let mut grouped: BTreeMap<(VariableId, Value), Vec<SourceId>> = BTreeMap::new();
        for source in data.sources() {
            for variable in data.variables() {
                if let Some(value) = data.claim(source, variable) {
                    grouped.entry((variable, value)).or_default().push(source);
                }
            }
        }

        let mut claims = Vec::with_capacity(grouped.len());
        let mut claim_sources = Vec::with_capacity(grouped.len());
        let mut source_claims = vec![Vec::new(); data.num_sources()];
        let mut variable_claims: BTreeMap<VariableId, Vec<ClaimId>> = BTreeMap::new();

        for (claim_id, ((variable, value), sources)) in grouped.into_iter().enumerate() {
            for &source in &sources {
                source_claims[source].push(claim_id);
            }
            variable_claims.entry(variable).or_default().push(claim_id);
            claims.push(Claim { variable, value });
            claim_sources.push(sources);
        }

        Self {
            claims,
            source_claims,
            claim_sources,
            variable_claims,
        }
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn num_claims(&self) -> usize {
        self.claims.len()
    }

    pub fn num_sources(&self) -> usize {
        self.source_claims.len()
    }

    /// Claims made by `source`
    pub fn source_claims(&self, source: SourceId) -> &[ClaimId] {
        &self.source_claims[source]
    }

    /// Sources making `claim`
    pub fn claim_sources(&self, claim: ClaimId) -> &[SourceId] {
        &self.claim_sources[claim]
    }

    /// Claims competing with `claim` for the same variable, itself included
    pub fn mutually_exclusive(&self, claim: ClaimId) -> &[ClaimId] {
        self.variable_claims
            .get(&self.claims[claim].variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Map dense per-source scores onto source ids
    pub fn trust_vector(&self, trust: &[f64]) -> TrustVector {
        trust.iter().copied().enumerate().collect()
    }

    /// Map dense per-claim scores onto the belief table
    pub fn belief_table(&self, belief: &[f64]) -> BeliefTable {
        let mut table = BeliefTable::new();
        for (claim, score) in self.claims.iter().zip(belief) {
            table
                .entry(claim.variable)
                .or_default()
                .insert(claim.value, *score);
        }
        table
    }

    pub fn snapshot(&self, trust: &[f64], belief: &[f64]) -> Snapshot {
        Snapshot::new(self.trust_vector(trust), self.belief_table(belief))
    }
}
