//! Datasets with known true values

use std::path::Path;

use crate::dataset::csv::{format_rows, parse_rows};
use crate::dataset::MatrixDataset;
use crate::errors::{Result, TruthError};
use crate::results::Results;
use crate::types::{GroundTruth, Value};

/// A claim matrix together with the true value of (some of) its variables
#[derive(Debug, Clone, PartialEq)]
pub struct SupervisedData {
    pub data: MatrixDataset,
    pub values: GroundTruth,
}

impl SupervisedData {
    pub fn new(data: MatrixDataset, values: GroundTruth) -> Self {
        Self { data, values }
    }

    /// Load from a CSV file whose first row holds the true values
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_csv_str(&text)
    }

    /// Parse CSV text whose first row holds the true values. Empty cells in
    /// that row mean the true value is unknown.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut rows = parse_rows(text)?.into_iter();
        let (_, truth_row) = rows.next().ok_or_else(|| TruthError::Dataset {
            line: 1,
            message: "supervised dataset needs a row of true values".to_string(),
        })?;

        let sources: Vec<_> = rows.collect();

        let values = truth_row
            .iter()
            .enumerate()
            .filter_map(|(var, value)| value.map(|v| (var, v)))
            .collect();
        let data = MatrixDataset::with_width(sources, truth_row.len())?;
        Ok(Self { data, values })
    }

    /// Render the true values row followed by the claim matrix
    pub fn to_csv(&self) -> String {
        let truth_row: Vec<Option<Value>> = (0..self.data.num_variables())
            .map(|var| self.values.get(&var).copied())
            .collect();
        let mut out = format_rows(std::iter::once(truth_row.as_slice()));
        out.push_str(&self.data.to_csv());
        out
    }

    /// Accuracy of `results` against the known true values
    pub fn get_accuracy(&self, results: &Results) -> Option<f64> {
        results.accuracy_against(&self.values)
    }
}
