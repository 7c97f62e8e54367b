//! Summary statistics over estimate values

use serde::{Deserialize, Serialize};

/// Mean and population standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub mean: f64,
    pub stddev: f64,
}

impl Stats {
    /// Summarize a sequence of values; `None` when it is empty
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        // Welford's update keeps the variance numerically stable
        let mut count = 0usize;
        let mut mean = 0.0;
        let mut m2 = 0.0;
        for value in values {
            count += 1;
            let delta = value - mean;
            mean += delta / count as f64;
            m2 += delta * (value - mean);
        }

        if count == 0 {
            return None;
        }
        Some(Self {
            mean,
            stddev: (m2 / count as f64).max(0.0).sqrt(),
        })
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.mean, self.stddev)
    }
}
