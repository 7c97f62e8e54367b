//! Rendering of run results as YAML or JSON documents

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::dataset::SupervisedData;
use crate::errors::{Result, TruthError};
use crate::results::{Results, Stats};
use crate::types::{BeliefTable, TrustVector, Value, VariableId};

/// A section of the `run` output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputField {
    Time,
    Iterations,
    Trust,
    Belief,
    TrustStats,
    BeliefStats,
    MostBelievedValues,
    Accuracy,
}

impl OutputField {
    pub const ALL: [OutputField; 8] = [
        OutputField::Time,
        OutputField::Iterations,
        OutputField::Trust,
        OutputField::Belief,
        OutputField::TrustStats,
        OutputField::BeliefStats,
        OutputField::MostBelievedValues,
        OutputField::Accuracy,
    ];

    /// Fields shown when none are requested
    pub const DEFAULT: [OutputField; 4] = [
        OutputField::Trust,
        OutputField::Belief,
        OutputField::Iterations,
        OutputField::Time,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputField::Time => "time",
            OutputField::Iterations => "iterations",
            OutputField::Trust => "trust",
            OutputField::Belief => "belief",
            OutputField::TrustStats => "trust_stats",
            OutputField::BeliefStats => "belief_stats",
            OutputField::MostBelievedValues => "most_believed_values",
            OutputField::Accuracy => "accuracy",
        }
    }
}

impl FromStr for OutputField {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self> {
        OutputField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| TruthError::InvalidOutputField(s.to_string()))
    }
}

impl fmt::Display for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serialization format for the output document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(TruthError::Config(format!("Unknown output format: {}", s))),
        }
    }
}

/// Requested sections of a run's results. Absent sections are omitted from
/// the rendered document; `None` inside a present section renders as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutputDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust: Option<TrustVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub belief: Option<BeliefTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_stats: Option<Option<Stats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub belief_stats: Option<BTreeMap<VariableId, Option<Stats>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_believed_values: Option<BTreeMap<VariableId, Vec<Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<Option<f64>>,
}

impl OutputDocument {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            OutputFormat::Json => {
                let mut text = serde_json::to_string_pretty(self)?;
                text.push('\n');
                Ok(text)
            }
        }
    }
}

/// Collect the requested fields of `results`. Asking for accuracy without
/// ground truth fails before anything else is computed.
pub fn build_output(
    results: &Results,
    supervised: Option<&SupervisedData>,
    fields: &[OutputField],
) -> Result<OutputDocument> {
    let truth = match supervised {
        Some(sup) => Some(&sup.values),
        None if fields.contains(&OutputField::Accuracy) => {
            return Err(TruthError::AccuracyWithoutGroundTruth)
        }
        None => None,
    };

    let mut doc = OutputDocument::default();
    for field in fields {
        match field {
            OutputField::Time => doc.time = Some(results.time_taken()),
            OutputField::Iterations => doc.iterations = Some(results.iterations()),
            OutputField::Trust => doc.trust = Some(results.trust().clone()),
            OutputField::Belief => doc.belief = Some(results.belief().clone()),
            OutputField::TrustStats => doc.trust_stats = Some(results.get_trust_stats()),
            OutputField::BeliefStats => doc.belief_stats = Some(results.get_belief_stats()),
            OutputField::MostBelievedValues => {
                let mut most_believed = BTreeMap::new();
                for &var in results.belief().keys() {
                    let values = results.get_most_believed_values(var)?;
                    most_believed.insert(var, values.into_iter().collect());
                }
                doc.most_believed_values = Some(most_believed);
            }
            OutputField::Accuracy => {
                doc.accuracy = truth.map(|values| results.accuracy_against(values));
            }
        }
    }
    Ok(doc)
}
