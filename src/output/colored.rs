//! Colored formatter implementation with terminal color support
//!
//! Same layout as the plain formatter with ANSI colors added; successful
//! samples are colored by latency band.

use super::formatter::{format_seconds, BannerInfo, OutputFormatter, PlainFormatter, BANNER_PREFIX, HOST_COLUMN_WIDTH};
use crate::{
    executor::RunReport,
    models::Sample,
    stats::{LatencySummary, NO_SAMPLES_MESSAGE},
};
use colored::*;

/// Latency band classification for color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyBand {
    Excellent,  // < 50ms
    Good,       // 50-100ms
    Fair,       // 100-300ms
    Poor,       // 300-1000ms
    VeryPoor,   // > 1000ms
}

impl LatencyBand {
    /// Determine the band for a round-trip time in milliseconds
    pub fn from_rtt(rtt_ms: f64) -> Self {
        if rtt_ms < 50.0 {
            Self::Excellent
        } else if rtt_ms < 100.0 {
            Self::Good
        } else if rtt_ms < 300.0 {
            Self::Fair
        } else if rtt_ms < 1000.0 {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Excellent => Color::Green,
            Self::Good => Color::Cyan,
            Self::Fair => Color::Yellow,
            Self::Poor => Color::Magenta,
            Self::VeryPoor => Color::Red,
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            muted: Color::BrightBlack,
        }
    }
}

/// Colored formatter implementation
#[derive(Debug, Clone, Default)]
pub struct ColoredFormatter {
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    fn status(&self, sample: &Sample) -> ColoredString {
        match sample.rtt_ms() {
            Some(rtt) => PlainFormatter::status_text(sample)
                .as_str()
                .color(LatencyBand::from_rtt(rtt).color()),
            None => "FAIL".color(self.color_scheme.error).bold(),
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_banner(&self, banner: &BannerInfo<'_>) -> String {
        let prefix = BANNER_PREFIX.color(self.color_scheme.header).bold();
        let output_path = banner.output_path.display().to_string();
        format!(
            "{p} host={} interval={}s timeout={}s\n{p} output -> {}\n{p} ping cmd -> {}\n{}\n",
            banner.host.bold(),
            format_seconds(banner.interval),
            banner.timeout_secs,
            output_path.as_str().color(self.color_scheme.info),
            banner.probe_command.color(self.color_scheme.muted),
            "Press Ctrl+C to stop.".color(self.color_scheme.muted),
            p = prefix,
        )
    }

    fn format_sample_line(&self, sample: &Sample) -> String {
        format!(
            "{}  {:<width$}  {}",
            sample.timestamp_iso().as_str().color(self.color_scheme.muted),
            sample.host(),
            self.status(sample),
            width = HOST_COLUMN_WIDTH
        )
    }

    fn format_interrupted(&self) -> String {
        format!("\n{}\n", "Stopped by user.".color(self.color_scheme.warning))
    }

    fn format_summary(&self, summary: Option<&LatencySummary>) -> String {
        match summary {
            Some(summary) => {
                let mut out = String::new();
                for line in summary.to_string().lines() {
                    match line.split_once(": ") {
                        Some((label, value)) => {
                            out.push_str(&format!("{}: {}\n", label.bold(), value));
                        }
                        None => {
                            out.push_str(line);
                            out.push('\n');
                        }
                    }
                }
                out
            }
            None => NO_SAMPLES_MESSAGE.color(self.color_scheme.warning).to_string(),
        }
    }

    fn format_run_footer(&self, report: &RunReport) -> String {
        let text = PlainFormatter::footer_text(report);
        if report.sent > 0 && report.received() < report.sent {
            text.as_str().color(self.color_scheme.warning).to_string()
        } else {
            text.as_str().color(self.color_scheme.muted).to_string()
        }
    }

    fn format_warning(&self, warning: &str) -> String {
        format!("{} {}", "WARNING:".color(self.color_scheme.warning).bold(), warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_bands() {
        assert_eq!(LatencyBand::from_rtt(0.4), LatencyBand::Excellent);
        assert_eq!(LatencyBand::from_rtt(50.0), LatencyBand::Good);
        assert_eq!(LatencyBand::from_rtt(150.0), LatencyBand::Fair);
        assert_eq!(LatencyBand::from_rtt(999.9), LatencyBand::Poor);
        assert_eq!(LatencyBand::from_rtt(1500.0), LatencyBand::VeryPoor);
        assert_eq!(LatencyBand::VeryPoor.color(), Color::Red);
    }

    #[test]
    fn test_colored_output_keeps_text() {
        colored::control::set_override(true);
        let formatter = ColoredFormatter::new();
        let ts = chrono::Local::now();
        let ok = Sample::from_probe(ts, "1.1.1.1", true, Some(12.0), "");
        let fail = Sample::from_probe(ts, "1.1.1.1", false, None, "");

        let ok_line = formatter.format_sample_line(&ok);
        assert!(ok_line.contains("OK 12.00 ms"));
        assert!(ok_line.contains("\u{1b}["));
        assert!(formatter.format_sample_line(&fail).contains("FAIL"));

        let summary = crate::stats::summarize(&[10.0, 20.0]);
        let block = formatter.format_summary(summary.as_ref());
        assert!(block.contains("15.00 ms"));
        assert_eq!(block.lines().count(), 7);
        colored::control::unset_override();
    }
}
