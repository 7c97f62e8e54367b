//! Claimed values
//!
//! Claims are real numbers, but they are used as map keys and set members, so
//! `Value` gives them a total order and bit-exact equality.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Largest magnitude rendered as an integer
const INTEGRAL_LIMIT: f64 = 9.0e15;

/// A candidate value for a variable
#[derive(Debug, Clone, Copy)]
pub struct Value(f64);

impl Value {
    /// Wrap a float. Negative zero is folded into zero.
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    /// Underlying float
    pub fn get(self) -> f64 {
        self.0
    }

    /// Whether the value has no fractional part
    pub fn is_integral(self) -> bool {
        self.0.fract() == 0.0 && self.0.abs() < INTEGRAL_LIMIT
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::new(f64::from(value))
    }
}

impl FromStr for Value {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: f64 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a number", s.trim()))?;
        if !parsed.is_finite() {
            return Err(format!("'{}' is not a finite number", s.trim()));
        }
        Ok(Self::new(parsed))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_integral() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_integral_display() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(-4).to_string(), "-4");
    }

    #[test]
    fn test_negative_zero_folded() {
        assert_eq!(Value::new(-0.0), Value::new(0.0));
    }

    #[test]
    fn test_ordering_and_sets() {
        let set: BTreeSet<Value> = [3.0, 1.0, 2.0, 1.0].into_iter().map(Value::new).collect();
        let ordered: Vec<f64> = set.into_iter().map(Value::get).collect();
        assert_eq!(ordered, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(" 7 ".parse::<Value>().unwrap(), Value::from(7));
        assert!("seven".parse::<Value>().is_err());
        assert!("inf".parse::<Value>().is_err());
    }
}
