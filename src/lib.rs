//! truthdiscovery v0.5.0 - Trust and belief estimation from conflicting claims
//!
//! Sources make claims about the values of variables. Truth-discovery
//! algorithms iteratively estimate how trustworthy each source is and how
//! strongly each candidate value is believed.
//!
//! # Architecture
//!
//! - **iteration**: stop conditions, distance measures and the controller
//!   that decides when an algorithm has iterated enough
//! - **results**: trust/belief outputs, statistics and accuracy scoring
//! - **dataset**: claim matrices, supervised and synthetic data
//! - **algorithm**: Sums, AverageLog, Investment, PooledInvestment,
//!   TruthFinder and majority voting
//! - **cli**: command-line client and its configuration

pub mod errors;
pub mod types;

// Core
pub mod iteration;
pub mod results;

// Data and algorithms
pub mod dataset;
pub mod algorithm;

// Client
pub mod cli;
pub mod telemetry;

// Re-export commonly used types
pub use errors::{Result, TruthError};
pub use types::{BeliefTable, GroundTruth, SourceId, TrustVector, Value, VariableId};
pub use iteration::{
    DistanceMeasure, IterationController, Snapshot, StopCondition, StoppingRule,
};
pub use results::{Results, Stats};
pub use dataset::{MatrixDataset, SupervisedData, SyntheticData};
pub use algorithm::{Algorithm, AlgorithmKind};
