//! Run configuration data model

use crate::error::{AppError, Result};
use crate::logging::LogFormat;
use std::path::PathBuf;
use std::time::Duration;

/// When the probe loop should end on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Stop after this many samples have been recorded
    Count(u64),
    /// Stop once this much wall-clock time has elapsed since the first probe
    Duration(Duration),
    /// Keep probing until interrupted
    UntilInterrupted,
}

impl StopCondition {
    /// Build from the mutually exclusive count/duration options
    pub fn from_options(count: Option<u64>, duration_secs: Option<u64>) -> Result<Self> {
        match (count, duration_secs) {
            (Some(_), Some(_)) => Err(AppError::config(
                "--count and --duration are mutually exclusive",
            )),
            (Some(count), None) => Ok(Self::Count(count)),
            (None, Some(secs)) => Ok(Self::Duration(Duration::from_secs(secs))),
            (None, None) => Ok(Self::UntilInterrupted),
        }
    }

    /// Whether the loop should stop after `sent` samples and `elapsed` time
    pub fn is_reached(&self, sent: u64, elapsed: Duration) -> bool {
        match *self {
            Self::Count(max) => sent >= max,
            Self::Duration(max) => elapsed >= max,
            Self::UntilInterrupted => false,
        }
    }

    /// Short human-readable description
    pub fn describe(&self) -> String {
        match self {
            Self::Count(count) => format!("{} samples", count),
            Self::Duration(duration) => format!("{}s", duration.as_secs_f64()),
            Self::UntilInterrupted => "until interrupted".to_string(),
        }
    }
}

/// Immutable configuration for a single logging run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Target host name or IP address passed to ping
    pub host: String,

    /// Target spacing between the start of consecutive probes
    pub interval: Duration,

    /// Per-probe timeout handed to the ping utility
    pub timeout_seconds: u64,

    /// When to end the run
    pub stop_condition: StopCondition,

    /// CSV file the samples are appended to
    pub output_path: PathBuf,

    /// Enable colored terminal output
    pub enable_color: bool,

    /// Enable verbose output
    pub verbose: bool,

    /// Enable debug output
    pub debug: bool,

    /// Format for diagnostic log lines
    pub log_format: LogFormat,
}

impl RunConfig {
    /// Create a configuration with default interval, timeout and presentation settings
    pub fn new(host: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            host: host.into(),
            interval: crate::defaults::DEFAULT_INTERVAL,
            timeout_seconds: crate::defaults::DEFAULT_TIMEOUT_SECS,
            stop_condition: StopCondition::UntilInterrupted,
            output_path: output_path.into(),
            enable_color: crate::defaults::DEFAULT_ENABLE_COLOR,
            verbose: false,
            debug: false,
            log_format: LogFormat::Console,
        }
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Validate the configuration and return the first error found
    pub fn validate(&self) -> Result<()> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(AppError::validation("Host cannot be empty"));
        }

        if host.starts_with('-') {
            return Err(AppError::validation(format!(
                "Invalid host '{}': a host cannot start with '-'",
                host
            )));
        }

        if host.chars().any(char::is_whitespace) {
            return Err(AppError::validation(format!(
                "Invalid host '{}': whitespace is not allowed",
                host
            )));
        }

        if self.timeout_seconds == 0 {
            return Err(AppError::validation("Timeout must be greater than 0"));
        }

        if self.timeout_seconds > crate::defaults::MAX_TIMEOUT_SECS {
            return Err(AppError::validation(format!(
                "Timeout cannot exceed {} seconds",
                crate::defaults::MAX_TIMEOUT_SECS
            )));
        }

        match self.stop_condition {
            StopCondition::Count(0) => {
                return Err(AppError::validation("Count must be greater than 0"));
            }
            StopCondition::Duration(d) if d.is_zero() => {
                return Err(AppError::validation("Duration must be greater than 0"));
            }
            _ => {}
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::validation("Output path cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RunConfig {
        RunConfig::new("8.8.8.8", "data/out.csv")
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_empty_host_invalid() {
        let mut config = config();
        config.host = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_flag_like_host_invalid() {
        let mut config = config();
        config.host = "-f".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_host_with_space_invalid() {
        let mut config = config();
        config.host = "8.8.8.8 -c 100".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ipv6_host_valid() {
        let mut config = config();
        config.host = "2001:db8::1".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = config();
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());
        config.timeout_seconds = 301;
        assert!(config.validate().is_err());
        config.timeout_seconds = 300;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_count_and_duration_invalid() {
        let mut config = config();
        config.stop_condition = StopCondition::Count(0);
        assert!(config.validate().is_err());
        config.stop_condition = StopCondition::Duration(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_errors_use_validation_variant() {
        let mut config = config();
        config.host = "-c".to_string();
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_stop_condition_from_options() {
        assert_eq!(StopCondition::from_options(Some(5), None).unwrap(), StopCondition::Count(5));
        assert_eq!(
            StopCondition::from_options(None, Some(3)).unwrap(),
            StopCondition::Duration(Duration::from_secs(3))
        );
        assert_eq!(StopCondition::from_options(None, None).unwrap(), StopCondition::UntilInterrupted);
        assert!(StopCondition::from_options(Some(5), Some(3)).is_err());
    }

    #[test]
    fn test_stop_condition_is_reached() {
        let count = StopCondition::Count(5);
        assert!(!count.is_reached(4, Duration::from_secs(100)));
        assert!(count.is_reached(5, Duration::ZERO));

        let duration = StopCondition::Duration(Duration::from_secs(3));
        assert!(!duration.is_reached(100, Duration::from_millis(2999)));
        assert!(duration.is_reached(1, Duration::from_secs(3)));

        assert!(!StopCondition::UntilInterrupted.is_reached(u64::MAX, Duration::MAX));
    }
}
