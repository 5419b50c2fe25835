//! Environment variable handling and .env file management

use crate::cli::{parse_interval, parse_timeout};
use crate::error::{AppError, Result};
use crate::logging::LogFormat;
use clap::ValueEnum;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_HOST: &str = "LATENCY_HOST";
pub const ENV_INTERVAL: &str = "LATENCY_INTERVAL";
pub const ENV_TIMEOUT: &str = "LATENCY_TIMEOUT";
pub const ENV_OUTPUT_DIR: &str = "LATENCY_OUTPUT_DIR";
pub const ENV_LOG_FORMAT: &str = "LATENCY_LOG_FORMAT";
pub const ENV_ENABLE_COLOR: &str = "ENABLE_COLOR";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Settings read from the environment, each `None` when unset or blank
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvSettings {
    pub host: Option<String>,
    pub interval: Option<Duration>,
    pub timeout_seconds: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub log_format: Option<LogFormat>,
    /// `ENABLE_COLOR`, overridden to `false` by any `NO_COLOR`
    pub enable_color: Option<bool>,
}

impl EnvSettings {
    /// Read from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary lookup, so tests never touch the real environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = Self {
            host: get(ENV_HOST),
            output_dir: get(ENV_OUTPUT_DIR).map(PathBuf::from),
            ..Self::default()
        };

        if let Some(value) = get(ENV_INTERVAL) {
            EnvManager::validate_env_var(ENV_INTERVAL, &value)?;
            settings.interval = parse_interval(&value).ok();
        }

        if let Some(value) = get(ENV_TIMEOUT) {
            EnvManager::validate_env_var(ENV_TIMEOUT, &value)?;
            settings.timeout_seconds = parse_timeout(&value).ok();
        }

        if let Some(value) = get(ENV_LOG_FORMAT) {
            EnvManager::validate_env_var(ENV_LOG_FORMAT, &value)?;
            settings.log_format = LogFormat::from_str(&value, true).ok();
        }

        if let Some(value) = get(ENV_ENABLE_COLOR) {
            EnvManager::validate_env_var(ENV_ENABLE_COLOR, &value)?;
            settings.enable_color = value.parse().ok();
        }

        // NO_COLOR disables color whatever its value, even when empty
        if lookup(ENV_NO_COLOR).is_some() {
            settings.enable_color = Some(false);
        }

        Ok(settings)
    }
}

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env from the current directory if it exists.
    ///
    /// Variables already set in the environment win over the file.
    pub fn load_env_file(debug: bool) -> Result<()> {
        Self::load_env_file_from(Path::new(".env"), debug)
    }

    /// Load an env file from an explicit path if it exists
    pub fn load_env_file_from(path: &Path, debug: bool) -> Result<()> {
        if path.exists() {
            dotenv::from_path(path)
                .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;

            if debug {
                eprintln!("Loaded configuration from {}", path.display());
            }
        } else if debug {
            eprintln!("No {} file found, using defaults and CLI arguments", path.display());
        }

        Ok(())
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            ENV_HOST => {
                if value.trim().is_empty() {
                    return Err(AppError::config(format!("{} cannot be empty", ENV_HOST)));
                }
            }
            ENV_INTERVAL => {
                parse_interval(value)
                    .map_err(|e| AppError::parse(format!("Invalid {} value '{}': {}", ENV_INTERVAL, value, e)))?;
            }
            ENV_TIMEOUT => {
                parse_timeout(value)
                    .map_err(|e| AppError::parse(format!("Invalid {} value '{}': {}", ENV_TIMEOUT, value, e)))?;
            }
            ENV_LOG_FORMAT => {
                LogFormat::from_str(value, true).map_err(|_| {
                    AppError::parse(format!(
                        "Invalid {} value '{}': expected console, json or compact",
                        ENV_LOG_FORMAT, value
                    ))
                })?;
            }
            ENV_ENABLE_COLOR => {
                value
                    .parse::<bool>()
                    .map_err(|e| AppError::parse(format!("Invalid {} value '{}': {}", ENV_ENABLE_COLOR, value, e)))?;
            }
            _ => {
                // Unknown environment variable, ignore
            }
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            (ENV_HOST, "Target host name or IP address", "8.8.8.8"),
            (ENV_INTERVAL, "Seconds between probes (>= 0)", "1.0"),
            (ENV_TIMEOUT, "Per-probe timeout in seconds (1-300)", "2"),
            (ENV_OUTPUT_DIR, "Directory for generated CSV file names", "data"),
            (ENV_LOG_FORMAT, "Diagnostic log format (console, json, compact)", "console"),
            (ENV_ENABLE_COLOR, "Enable colored output", "true"),
            (ENV_NO_COLOR, "Disable colored output when set to anything", "1"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<20} {}\n", var, description));
            help.push_str(&format!("  {:<20} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n");

        help
    }
}
