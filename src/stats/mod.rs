//! Summary statistics over successful round-trip times

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Printed instead of a summary when no probe succeeded
pub const NO_SAMPLES_MESSAGE: &str = "No successful RTT samples collected.";

/// Below this many samples the 95th percentile is reported as the maximum
pub const P95_MIN_SAMPLES: usize = 20;

/// Descriptive statistics for a run, all values in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencySummary {
    pub count: usize,
    pub min_ms: f64,
    pub mean_ms: f64,
    pub median_ms: f64,
    /// Exclusive-method 95th percentile, or the maximum for small runs
    pub p95_ms: f64,
    pub max_ms: f64,
    /// Population standard deviation; zero below two samples
    pub std_dev_ms: f64,
}

/// Summarize successful RTTs, or `None` when there are none
pub fn summarize(rtts: &[f64]) -> Option<LatencySummary> {
    if rtts.is_empty() {
        return None;
    }

    let mut sorted = rtts.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let max = sorted[count - 1];

    let p95 = if count >= P95_MIN_SAMPLES {
        exclusive_quantile(&sorted, 19, 20)
    } else {
        max
    };

    let std_dev = if count >= 2 {
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;
        variance.sqrt()
    } else {
        0.0
    };

    Some(LatencySummary {
        count,
        min_ms: sorted[0],
        mean_ms: mean,
        median_ms: median(&sorted),
        p95_ms: p95,
        max_ms: max,
        std_dev_ms: std_dev,
    })
}

/// Render the summary block, or the no-samples message
pub fn format_summary(summary: Option<&LatencySummary>) -> String {
    match summary {
        Some(summary) => summary.to_string(),
        None => NO_SAMPLES_MESSAGE.to_string(),
    }
}

fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// The `i`-th of `n - 1` cut points dividing `sorted` into `n` groups,
/// interpolated on the `(len + 1)` scale. Needs at least two values.
fn exclusive_quantile(sorted: &[f64], i: usize, n: usize) -> f64 {
    let len = sorted.len();
    let m = len + 1;
    let j = (i * m / n).clamp(1, len - 1);
    // i*m - j*n may be negative after clamping; keep the arithmetic signed
    let delta = (i * m) as f64 - (j * n) as f64;
    (sorted[j - 1] * (n as f64 - delta) + sorted[j] * delta) / n as f64
}

impl fmt::Display for LatencySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Samples: {}", self.count)?;
        writeln!(f, "Min: {:.2} ms", self.min_ms)?;
        writeln!(f, "Avg: {:.2} ms", self.mean_ms)?;
        writeln!(f, "Median: {:.2} ms", self.median_ms)?;
        writeln!(f, "P95: {:.2} ms", self.p95_ms)?;
        writeln!(f, "Max: {:.2} ms", self.max_ms)?;
        writeln!(f, "StdDev: {:.2} ms", self.std_dev_ms)
    }
}
