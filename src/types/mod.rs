//! Type definitions module
//!
//! Identifiers and estimate containers shared by the iteration controller,
//! the algorithms and the results layer.

use std::collections::BTreeMap;

pub mod value;

pub use value::Value;

/// Source identifier (row of the claim matrix)
pub type SourceId = usize;

/// Variable identifier (column of the claim matrix)
pub type VariableId = usize;

/// Trust score per source. No fixed range is assumed.
pub type TrustVector = BTreeMap<SourceId, f64>;

/// Belief score per candidate value, per variable. Inner scores need not sum to 1.
pub type BeliefTable = BTreeMap<VariableId, BTreeMap<Value, f64>>;

/// Known true value per variable
pub type GroundTruth = BTreeMap<VariableId, Value>;
