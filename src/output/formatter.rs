//! Core formatting trait and the plain text implementation
//!
//! Plain output is what lands in redirected logs and CI transcripts, so its
//! layout is fixed: the banner, one line per probe, the summary block and the
//! loss footer.

use crate::{
    executor::RunReport,
    models::Sample,
    stats::{format_summary, LatencySummary},
};
use std::path::Path;
use std::time::Duration;

/// Banner prefix on every startup line
pub const BANNER_PREFIX: &str = "[Latency Logger]";

/// Width the host column is padded to in per-sample lines
pub const HOST_COLUMN_WIDTH: usize = 20;

/// What the startup banner shows
#[derive(Debug, Clone)]
pub struct BannerInfo<'a> {
    pub host: &'a str,
    pub interval: Duration,
    pub timeout_secs: u64,
    pub output_path: &'a Path,
    pub probe_command: &'a str,
}

/// Main trait for console output
pub trait OutputFormatter: Send + Sync {
    /// Startup banner, ending with the Ctrl+C hint and a blank line
    fn format_banner(&self, banner: &BannerInfo<'_>) -> String;

    /// One line per recorded sample
    fn format_sample_line(&self, sample: &Sample) -> String;

    /// Notice printed when the run was interrupted
    fn format_interrupted(&self) -> String;

    /// Summary block, or the no-samples message
    fn format_summary(&self, summary: Option<&LatencySummary>) -> String;

    /// Sent / received / loss line
    fn format_run_footer(&self, report: &RunReport) -> String;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> String;
}

/// Render an interval in seconds the way it was typed: `1.0`, `0.5`, `2.25`
pub fn format_seconds(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs.fract() == 0.0 {
        format!("{:.1}", secs)
    } else {
        format!("{}", secs)
    }
}

/// Plain text formatter implementation
#[derive(Debug, Clone, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }

    /// `OK x.xx ms` or `FAIL`
    pub fn status_text(sample: &Sample) -> String {
        match sample.rtt_ms() {
            Some(rtt) => format!("OK {:.2} ms", rtt),
            None => "FAIL".to_string(),
        }
    }

    pub(crate) fn footer_text(report: &RunReport) -> String {
        format!(
            "Sent: {}  Received: {}  Loss: {:.1}%  Elapsed: {:.1}s",
            report.sent,
            report.received(),
            report.loss_percent(),
            report.elapsed.as_secs_f64()
        )
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_banner(&self, banner: &BannerInfo<'_>) -> String {
        format!(
            "{p} host={} interval={}s timeout={}s\n{p} output -> {}\n{p} ping cmd -> {}\nPress Ctrl+C to stop.\n",
            banner.host,
            format_seconds(banner.interval),
            banner.timeout_secs,
            banner.output_path.display(),
            banner.probe_command,
            p = BANNER_PREFIX,
        )
    }

    fn format_sample_line(&self, sample: &Sample) -> String {
        format!(
            "{}  {:<width$}  {}",
            sample.timestamp_iso(),
            sample.host(),
            Self::status_text(sample),
            width = HOST_COLUMN_WIDTH
        )
    }

    fn format_interrupted(&self) -> String {
        "\nStopped by user.\n".to_string()
    }

    fn format_summary(&self, summary: Option<&LatencySummary>) -> String {
        format_summary(summary)
    }

    fn format_run_footer(&self, report: &RunReport) -> String {
        Self::footer_text(report)
    }

    fn format_warning(&self, warning: &str) -> String {
        format!("WARNING: {}", warning)
    }
}
