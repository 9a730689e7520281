//! Sample statistics over trial results.

use serde::Serialize;
use tabled::Tabled;

/// Critical value of the standard normal distribution for a 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation with the `n - 1` denominator.
///
/// `NaN` when there are fewer than two samples, since the variance is undefined.
pub fn stddev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }

    let mean = mean(samples);
    let squares = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    (squares / (samples.len() - 1) as f64).sqrt()
}

pub(crate) fn format_value(value: &f64) -> String {
    format!("{value:.6}")
}

/// Summary of the percolation threshold over a set of trials.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Tabled)]
pub struct ThresholdStats {
    #[tabled(rename = "Trials")]
    pub trials: usize,
    #[tabled(rename = "Mean", display_with = "format_value")]
    pub mean: f64,
    #[tabled(rename = "Stddev", display_with = "format_value")]
    pub stddev: f64,
    #[tabled(rename = "95% Low", display_with = "format_value")]
    pub confidence_lo: f64,
    #[tabled(rename = "95% High", display_with = "format_value")]
    pub confidence_hi: f64,
}

impl ThresholdStats {
    /// Computes the summary of `samples`.
    ///
    /// With a single sample the standard deviation and both confidence bounds are `NaN`.
    pub fn from_samples(samples: &[f64]) -> Self {
        let trials = samples.len();
        let mean = mean(samples);
        let stddev = stddev(samples);
        let half_width = CONFIDENCE_95 * stddev / (trials as f64).sqrt();

        Self {
            trials,
            mean,
            stddev,
            confidence_lo: mean - half_width,
            confidence_hi: mean + half_width,
        }
    }
}
