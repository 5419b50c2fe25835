//! Configuration validation utilities and rules
//!
//! Hard errors come from [`RunConfig::validate`]. The checks here only
//! produce warnings about settings that work but probably are not what the
//! user meant.

use crate::{
    defaults::{DEFAULT_INTERVAL, DEFAULT_TIMEOUT_SECS},
    error::Result,
    models::{RunConfig, StopCondition},
    output::format_seconds,
    probe::PingPlatform,
};
use colored::Colorize;
use std::net::IpAddr;

/// Configuration validator with advanced validation rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration and collect non-fatal warnings
    pub fn validate_comprehensive(config: &RunConfig) -> Result<Vec<ValidationWarning>> {
        Self::validate_for_platform(config, PingPlatform::detect())
    }

    /// Same as [`validate_comprehensive`](Self::validate_comprehensive) for an explicit platform
    pub fn validate_for_platform(
        config: &RunConfig,
        platform: PingPlatform,
    ) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        config.validate()?;

        warnings.extend(Self::validate_host(&config.host));
        warnings.extend(Self::validate_timing(config, platform));
        warnings.extend(Self::validate_stop_condition(config));

        Ok(warnings)
    }

    fn validate_host(host: &str) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        let is_loopback = match host.parse::<IpAddr>() {
            Ok(ip) => ip.is_loopback(),
            Err(_) => host.eq_ignore_ascii_case("localhost"),
        };

        if is_loopback {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Host '{}' is a loopback address; results will not reflect the network", host),
            ));
        }

        warnings
    }

    fn validate_timing(config: &RunConfig, platform: PingPlatform) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if config.interval < config.timeout() {
            // Defaults trip this check; only user-chosen timing is a warning
            let level = if config.interval == DEFAULT_INTERVAL && config.timeout_seconds == DEFAULT_TIMEOUT_SECS {
                ValidationLevel::Info
            } else {
                ValidationLevel::Warning
            };
            warnings.push(ValidationWarning::new(
                level,
                format!(
                    "Interval {}s is shorter than the {}s timeout; probes to an unreachable host will run back to back",
                    format_seconds(config.interval),
                    config.timeout_seconds
                ),
            ));
        }

        if !platform.honors_timeout() {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!(
                    "ping on {} is run without a timeout flag; the system default applies instead of {}s",
                    platform.name(),
                    config.timeout_seconds
                ),
            ));
        }

        warnings
    }

    fn validate_stop_condition(config: &RunConfig) -> Vec<ValidationWarning> {
        if config.stop_condition == StopCondition::UntilInterrupted {
            vec![ValidationWarning::new(
                ValidationLevel::Info,
                "No --count or --duration given; running until interrupted".to_string(),
            )]
        } else {
            Vec::new()
        }
    }
}

/// Validation warning levels
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    Info,
    Warning,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
        }
    }
}

/// Configuration validation warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        let tag = format!("[{}]", self.level.as_str());
        if use_color {
            let tag = match self.level {
                ValidationLevel::Info => tag.as_str().blue(),
                ValidationLevel::Warning => tag.as_str().yellow().bold(),
            };
            format!("{} {}", tag, self.message)
        } else {
            format!("{} {}", tag, self.message)
        }
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &RunConfig) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}
