//! Distance measures between successive estimates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, TruthError};
use crate::iteration::types::Snapshot;

/// Selectable distance between two equal-length estimate vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMeasure {
    /// Sum of absolute differences
    L1,
    /// Euclidean norm of the difference
    L2,
    /// One minus cosine similarity
    Cosine,
}

impl DistanceMeasure {
    /// All measures, in canonical order
    pub const ALL: [DistanceMeasure; 3] = [
        DistanceMeasure::L1,
        DistanceMeasure::L2,
        DistanceMeasure::Cosine,
    ];

    /// Canonical name used in iterator descriptions
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMeasure::L1 => "l1",
            DistanceMeasure::L2 => "l2",
            DistanceMeasure::Cosine => "cosine",
        }
    }

    fn function(self) -> fn(&[f64], &[f64]) -> f64 {
        match self {
            DistanceMeasure::L1 => l1,
            DistanceMeasure::L2 => l2,
            DistanceMeasure::Cosine => cosine,
        }
    }

    /// Distance between two vectors. Identical inputs give exactly zero; an
    /// undefined result (NaN anywhere in the inputs) is infinite, so it never
    /// counts as converged.
    ///
    /// Both slices must have the same length. Elements are compared
    /// pairwise and any excess in the longer slice is ignored; use
    /// [`DistanceMeasure::between`] to compare snapshots, which pairs them.
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "distance inputs must have equal length");
        if a.iter().chain(b).any(|x| x.is_nan()) {
            return f64::INFINITY;
        }
        if a == b {
            return 0.0;
        }
        let distance = self.function()(a, b);
        if distance.is_nan() {
            f64::INFINITY
        } else {
            distance.max(0.0)
        }
    }

    /// Distance between the estimates two snapshots have in common
    pub fn between(&self, previous: &Snapshot, current: &Snapshot) -> f64 {
        let (a, b) = previous.paired_values(current);
        self.distance(&a, &b)
    }
}

fn l1(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

fn l2(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Largest magnitude in `values`, zero for an empty or all-zero slice
fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc: f64, x| acc.max(x.abs()))
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let scale_a = max_abs(a);
    let scale_b = max_abs(b);

    // No direction to compare
    if scale_a == 0.0 || scale_b == 0.0 {
        return 1.0;
    }

    // Similarity is scale-invariant; rescaling into [-1, 1] keeps the
    // squared norms finite for large trust values
    let (mut dot, mut norm_a, mut norm_b) = (0.0, 0.0, 0.0);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (x / scale_a, y / scale_b);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())
}

impl FromStr for DistanceMeasure {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self> {
        DistanceMeasure::ALL
            .into_iter()
            .find(|measure| measure.name() == s)
            .ok_or_else(|| TruthError::InvalidMeasure {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for DistanceMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_l1() {
        assert_eq!(DistanceMeasure::L1.distance(&[1.0, 0.0], &[0.0, 1.0]), 2.0);
    }

    #[test]
    fn test_l2() {
        assert_eq!(DistanceMeasure::L2.distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
    }

    #[test]
    fn test_cosine_identical() {
        let v = [0.3, 1.7, 2.2];
        assert_eq!(DistanceMeasure::Cosine.distance(&v, &v), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_and_opposite() {
        let d = DistanceMeasure::Cosine.distance(&[1.0, 0.0], &[0.0, 1.0]);
        assert!((d - 1.0).abs() < 1e-12);
        let d = DistanceMeasure::Cosine.distance(&[1.0, 1.0], &[-1.0, -1.0]);
        assert!((d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_vector() {
        assert_eq!(DistanceMeasure::Cosine.distance(&[0.0, 0.0], &[1.0, 2.0]), 1.0);
        assert_eq!(DistanceMeasure::Cosine.distance(&[4.0, 2.0], &[0.0, 0.0]), 1.0);
    }

    #[test]
    fn test_nan_is_never_zero() {
        for measure in DistanceMeasure::ALL {
            assert_eq!(measure.distance(&[f64::NAN], &[1.0]), f64::INFINITY);
            assert_eq!(measure.distance(&[f64::NAN, 2.0], &[f64::NAN, 2.0]), f64::INFINITY);
        }
    }

    #[test]
    fn test_cosine_large_values() {
        let d = DistanceMeasure::Cosine.distance(&[1e200, 1e200], &[1e200, 2e200]);
        let expected = 1.0 - 3.0 / (2f64.sqrt() * 5f64.sqrt());
        assert!(d > 0.0);
        assert!((d - expected).abs() < 1e-12);

        let d = DistanceMeasure::Cosine.distance(&[1e300, 0.0], &[0.0, 1e-300]);
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_vectors() {
        for measure in DistanceMeasure::ALL {
            assert_eq!(measure.distance(&[], &[]), 0.0);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!("l1".parse::<DistanceMeasure>().unwrap(), DistanceMeasure::L1);
        assert_eq!("l2".parse::<DistanceMeasure>().unwrap(), DistanceMeasure::L2);
        assert_eq!(
            "cosine".parse::<DistanceMeasure>().unwrap(),
            DistanceMeasure::Cosine
        );
    }

    #[test]
    fn test_lookup_invalid() {
        for name in ["L1", "euclidean", "", "cosine "] {
            match name.parse::<DistanceMeasure>() {
                Err(TruthError::InvalidMeasure { name: got }) => assert_eq!(got, name),
                other => panic!("expected InvalidMeasure for {:?}, got {:?}", name, other),
            }
        }
    }

    #[quickcheck]
    fn prop_non_negative_and_zero_on_identity(values: Vec<(i16, i16)>) -> bool {
        let a: Vec<f64> = values.iter().map(|(x, _)| f64::from(*x)).collect();
        let b: Vec<f64> = values.iter().map(|(_, y)| f64::from(*y)).collect();
        DistanceMeasure::ALL.iter().all(|measure| {
            measure.distance(&a, &b) >= 0.0 && measure.distance(&a, &a) == 0.0
        })
    }
}
