//! Textual iterator descriptions
//!
//! ```text
//! fixed-<positive integer>
//! <measure>-convergence-<positive real>[-limit-<positive integer>]
//! ```
//!
//! The whole string must match. A well-formed convergence description with an
//! unknown measure is reported as [`TruthError::InvalidMeasure`], anything
//! else that does not match as [`TruthError::Specification`].

use std::str::FromStr;

use crate::errors::{Result, TruthError};
use crate::iteration::{ConvergenceIterator, DistanceMeasure, FixedIterator, StopCondition};

const FIXED_PREFIX: &str = "fixed-";
const CONVERGENCE_MARKER: &str = "-convergence-";
const LIMIT_MARKER: &str = "-limit-";

impl FromStr for StopCondition {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || TruthError::Specification {
            input: s.to_string(),
        };

        if let Some(limit) = s.strip_prefix(FIXED_PREFIX) {
            let limit = parse_count(limit).ok_or_else(malformed)?;
            return Ok(FixedIterator::new(limit)?.into());
        }

        let Some((measure, rest)) = s.split_once(CONVERGENCE_MARKER) else {
            return Err(malformed());
        };
        let (threshold, limit) = match rest.split_once(LIMIT_MARKER) {
            Some((threshold, limit)) => (threshold, Some(limit)),
            None => (rest, None),
        };

        if measure.is_empty() || measure.contains('-') {
            return Err(malformed());
        }
        let threshold = parse_real(threshold).ok_or_else(malformed)?;
        let limit = match limit {
            Some(limit) => Some(parse_count(limit).ok_or_else(malformed)?),
            None => None,
        };

        let measure: DistanceMeasure = measure.parse()?;
        Ok(ConvergenceIterator::new(measure, threshold, limit)?.into())
    }
}

/// Decimal digits only
fn parse_count(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Unsigned decimal, optionally with an exponent
fn parse_real(token: &str) -> Option<f64> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+');
    if !token.chars().all(allowed) || !token.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed() {
        let condition: StopCondition = "fixed-145".parse().unwrap();
        assert_eq!(condition, StopCondition::Fixed(FixedIterator::new(145).unwrap()));
    }

    #[test]
    fn test_parse_convergence() {
        let condition: StopCondition = "l1-convergence-0.234".parse().unwrap();
        match condition {
            StopCondition::Convergence(it) => {
                assert_eq!(it.measure(), DistanceMeasure::L1);
                assert_eq!(it.threshold(), 0.234);
                assert_eq!(it.limit(), None);
            }
            other => panic!("expected convergence iterator, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_convergence_with_limit() {
        let condition: StopCondition = "l2-convergence-0.234-limit-9".parse().unwrap();
        match condition {
            StopCondition::Convergence(it) => {
                assert_eq!(it.measure(), DistanceMeasure::L2);
                assert_eq!(it.threshold(), 0.234);
                assert_eq!(it.limit(), Some(9));
            }
            other => panic!("expected convergence iterator, got {:?}", other),
        }

        let condition: StopCondition = "cosine-convergence-1e5".parse().unwrap();
        assert!(matches!(condition, StopCondition::Convergence(_)));
    }

    #[test]
    fn test_malformed_descriptions() {
        let invalid = [
            "fixed",
            "fixed-",
            "fixed-hello",
            "fixed-10.0",
            "fixed--4",
            "fixed-4 ",
            " fixed-4",
            "convergence",
            "-convergence-",
            "l1-convergence-",
            "l1-convergence-l1",
            "l1-convergence-0.03-limit",
            "l1-convergence-0.03-limit-",
            "l1-convergence-0.03-limit-45.0",
            "l1-convergence-0.03-limit-4-limit-5",
            "a-b-convergence-0.1",
            "hello",
            "",
        ];
        for input in invalid {
            match input.parse::<StopCondition>() {
                Err(TruthError::Specification { input: got }) => assert_eq!(got, input),
                other => panic!("expected specification error for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_unknown_measure_named() {
        match "blah-convergence-0.3-limit-99".parse::<StopCondition>() {
            Err(TruthError::InvalidMeasure { name }) => assert_eq!(name, "blah"),
            other => panic!("expected invalid measure, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_numbers() {
        assert!(matches!(
            "fixed-0".parse::<StopCondition>(),
            Err(TruthError::Configuration(_))
        ));
        assert!(matches!(
            "l1-convergence-0.1-limit-0".parse::<StopCondition>(),
            Err(TruthError::Configuration(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["fixed-20", "l1-convergence-0.001", "cosine-convergence-0.5-limit-40"] {
            let condition: StopCondition = input.parse().unwrap();
            assert_eq!(condition.to_string(), input);
        }
    }
}
