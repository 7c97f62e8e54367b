//! Source × variable claim matrix

use std::ops::Range;
use std::path::Path;

use crate::dataset::csv::{format_rows, parse_rows};
use crate::errors::{Result, TruthError};
use crate::types::{SourceId, Value, VariableId};

/// Claims made by each source (rows) about each variable (columns)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatrixDataset {
    rows: Vec<Vec<Option<Value>>>,
    num_variables: usize,
}

impl MatrixDataset {
    /// Build a dataset from rows of optional claims. All rows must have the
    /// same length.
    pub fn from_rows(rows: Vec<Vec<Option<Value>>>) -> Result<Self> {
        let numbered = rows.into_iter().enumerate().map(|(i, row)| (i + 1, row)).collect();
        Self::from_numbered_rows(numbered)
    }

    pub(crate) fn from_numbered_rows(rows: Vec<(usize, Vec<Option<Value>>)>) -> Result<Self> {
        let num_variables = rows.first().map_or(0, |(_, row)| row.len());
        Self::with_width(rows, num_variables)
    }

    /// Rows paired with their line numbers, each of exactly `num_variables` cells
    pub(crate) fn with_width(
        rows: Vec<(usize, Vec<Option<Value>>)>,
        num_variables: usize,
    ) -> Result<Self> {
        if let Some((line, row)) = rows.iter().find(|(_, row)| row.len() != num_variables) {
            return Err(TruthError::Dataset {
                line: *line,
                message: format!("expected {} columns, found {}", num_variables, row.len()),
            });
        }

        Ok(Self {
            rows: rows.into_iter().map(|(_, row)| row).collect(),
            num_variables,
        })
    }

    /// Rows already known to hold `num_variables` cells each
    pub(crate) fn from_uniform_rows(rows: Vec<Vec<Option<Value>>>, num_variables: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == num_variables));
        Self {
            rows,
            num_variables,
        }
    }

    /// Load a dataset from a CSV file
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_csv_str(&text)
    }

    /// Parse a dataset from CSV text
    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::from_numbered_rows(parse_rows(text)?)
    }

    /// Render the dataset as CSV text
    pub fn to_csv(&self) -> String {
        format_rows(self.rows.iter().map(|row| row.as_slice()))
    }

    pub fn num_sources(&self) -> usize {
        self.rows.len()
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn sources(&self) -> Range<SourceId> {
        0..self.rows.len()
    }

    pub fn variables(&self) -> Range<VariableId> {
        0..self.num_variables
    }

    /// Value claimed by `source` for `variable`, if any
    pub fn claim(&self, source: SourceId, variable: VariableId) -> Option<Value> {
        self.rows.get(source)?.get(variable).copied().flatten()
    }

    /// Number of non-empty cells
    pub fn num_claims(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn rows(&self) -> &[Vec<Option<Value>>] {
        &self.rows
    }
}
