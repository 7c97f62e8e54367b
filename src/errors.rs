//! Error types for truthdiscovery
//!
//! Configuration problems are reported at construction/parse time, naming the
//! offending token. "No data" conditions are not errors: statistics and
//! accuracy return `None` instead.

use thiserror::Error;

use crate::types::VariableId;

/// Main error type for the truthdiscovery library
#[derive(Error, Debug)]
pub enum TruthError {
    /// Unrecognized distance measure name
    #[error("invalid distance measure '{name}'")]
    InvalidMeasure { name: String },

    /// Out-of-range iterator parameters (limit, threshold)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Iterator description that does not match the grammar
    #[error("invalid iterator specification '{input}'")]
    Specification { input: String },

    /// Variable absent from a belief table
    #[error("unknown variable {0}")]
    UnknownVariable(VariableId),

    /// Controller asked to continue after it already stopped the run
    #[error("iteration controller already terminated after {iterations} iterations")]
    ControllerTerminated { iterations: usize },

    /// Accuracy requested with no ground truth supplied
    #[error("cannot calculate accuracy without --supervised")]
    AccuracyWithoutGroundTruth,

    /// Unknown algorithm label
    #[error("invalid algorithm label '{label}'")]
    InvalidAlgorithm { label: String },

    /// Parameter name not accepted by an algorithm
    #[error("invalid parameter '{name}' for {algorithm}")]
    InvalidParameter { name: String, algorithm: String },

    /// Parameter string without a '='
    #[error("parameters must be in the form 'key=value': got '{0}'")]
    ParameterFormat(String),

    /// Parameter value that is not of the expected type or range
    #[error("invalid value '{value}' for parameter '{name}'")]
    InvalidParameterValue { name: String, value: String },

    /// Unknown prior belief name
    #[error("'{0}' is not a valid PriorBelief")]
    InvalidPriorBelief(String),

    /// Unknown output field name
    #[error("invalid output field '{0}'")]
    InvalidOutputField(String),

    /// Malformed claim matrix
    #[error("dataset error on line {line}: {message}")]
    Dataset { line: usize, message: String },

    /// Invalid synthetic data parameters
    #[error("{0}")]
    SyntheticData(String),

    /// Configuration file errors
    #[error("Config error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML rendering errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for truthdiscovery operations
pub type Result<T> = std::result::Result<T, TruthError>;

impl TruthError {
    /// Errors caused by what the user typed, as opposed to I/O or rendering
    pub fn is_usage_error(&self) -> bool {
        !matches!(
            self,
            TruthError::Io(_) | TruthError::Json(_) | TruthError::Yaml(_)
        )
    }
}
