//! A single recorded probe result

use crate::recorder::sanitize_raw;
use chrono::{DateTime, Local};

/// Timestamp layout used in the sample log and on the console
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One probe attempt as it is persisted.
///
/// `success` is true exactly when `rtt_ms` is present; the constructor is the
/// only way to build one, so the pair can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    timestamp: DateTime<Local>,
    host: String,
    rtt_ms: Option<f64>,
    raw_output: String,
}

impl Sample {
    /// Build a sample from what the probe reported.
    ///
    /// A latency parsed from a probe whose process did not exit successfully
    /// is discarded, and a successful exit without a latency is a failure.
    pub fn from_probe(
        timestamp: DateTime<Local>,
        host: impl Into<String>,
        exit_success: bool,
        rtt_ms: Option<f64>,
        raw_output: &str,
    ) -> Self {
        Self {
            timestamp,
            host: host.into(),
            rtt_ms: rtt_ms.filter(|_| exit_success),
            raw_output: sanitize_raw(raw_output),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// ISO-8601 local time with second precision
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn success(&self) -> bool {
        self.rtt_ms.is_some()
    }

    pub fn rtt_ms(&self) -> Option<f64> {
        self.rtt_ms
    }

    /// Sanitized, length-bounded probe output
    pub fn raw_output(&self) -> &str {
        &self.raw_output
    }

    /// `0`/`1` flag as written to the log
    pub fn success_flag(&self) -> &'static str {
        if self.success() {
            "1"
        } else {
            "0"
        }
    }

    /// Latency with two fractional digits, or empty when the probe failed
    pub fn rtt_field(&self) -> String {
        self.rtt_ms.map(|rtt| format!("{:.2}", rtt)).unwrap_or_default()
    }
}
