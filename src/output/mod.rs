//! Console output formatting
//!
//! The per-sample stream, the banner and the end-of-run summary go to
//! stdout through an [`OutputFormatter`]. Diagnostics go through
//! [`crate::logging`] to stderr instead.

mod colored;
mod formatter;

pub use colored::{ColorScheme, ColoredFormatter, LatencyBand};
pub use formatter::{format_seconds, BannerInfo, OutputFormatter, PlainFormatter};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        if enable_color {
            Box::new(ColoredFormatter::new())
        } else {
            Box::new(PlainFormatter::new())
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn OutputFormatter> {
        Self::create_formatter(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sample;

    #[test]
    fn test_plain_factory_output_has_no_escapes() {
        let formatter = OutputFormatterFactory::create_plain_formatter();
        let sample = Sample::from_probe(chrono::Local::now(), "host", true, Some(1.0), "");
        assert!(!formatter.format_sample_line(&sample).contains('\u{1b}'));
        assert_eq!(formatter.format_warning("x"), "WARNING: x");
    }
}
