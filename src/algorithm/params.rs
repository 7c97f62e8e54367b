//! `key=value` algorithm parameters

use std::str::FromStr;

use crate::algorithm::PriorBelief;
use crate::errors::{Result, TruthError};
use crate::iteration::StopCondition;

/// Typed parameter value. The parameter name decides the type.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Iterator(StopCondition),
    Priors(PriorBelief),
    Float(f64),
}

/// A named algorithm parameter
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmParam {
    pub name: String,
    pub value: ParamValue,
}

impl AlgorithmParam {
    pub fn new(name: impl Into<String>, value: ParamValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Error for a parameter `algorithm` does not take
    pub fn not_accepted(&self, algorithm: &str) -> TruthError {
        TruthError::InvalidParameter {
            name: self.name.clone(),
            algorithm: algorithm.to_string(),
        }
    }

    /// Float value checked against `valid`
    pub(crate) fn checked_float(&self, value: f64, valid: impl Fn(f64) -> bool) -> Result<f64> {
        if valid(value) {
            Ok(value)
        } else {
            Err(TruthError::InvalidParameterValue {
                name: self.name.clone(),
                value: value.to_string(),
            })
        }
    }
}

impl FromStr for AlgorithmParam {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| TruthError::ParameterFormat(s.to_string()))?;
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() {
            return Err(TruthError::ParameterFormat(s.to_string()));
        }

        let value = match name {
            "iterator" => ParamValue::Iterator(value.parse()?),
            "priors" => ParamValue::Priors(value.parse()?),
            _ => ParamValue::Float(value.parse().map_err(|_| {
                TruthError::InvalidParameterValue {
                    name: name.to_string(),
                    value: value.to_string(),
                }
            })?),
        };

        Ok(Self::new(name, value))
    }
}
