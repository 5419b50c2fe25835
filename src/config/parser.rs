//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::{supports_color, Cli},
    config::env::{EnvManager, EnvSettings},
    error::{AppError, Result},
    models::{RunConfig, StopCondition},
    output::format_seconds,
    recorder::resolve_output_path,
};
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
    env: Option<EnvSettings>,
}

impl ConfigParser {
    /// Create a parser that reads `.env` and the process environment
    pub fn new(cli: Cli) -> Self {
        Self { cli, env: None }
    }

    /// Create a parser with pre-read environment settings
    pub fn with_env(cli: Cli, env: EnvSettings) -> Self {
        Self { cli, env: Some(env) }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<RunConfig> {
        self.parse_at(Local::now())
    }

    /// Like [`parse`](Self::parse), naming a generated output file after `now`
    pub fn parse_at(&self, now: DateTime<Local>) -> Result<RunConfig> {
        let env = match &self.env {
            Some(env) => env.clone(),
            None => {
                EnvManager::load_env_file(self.cli.debug)?;
                EnvSettings::from_env()?
            }
        };

        let host = self
            .cli
            .host
            .clone()
            .or_else(|| env.host.clone())
            .map(|h| h.trim().to_string())
            .ok_or_else(|| {
                AppError::config("No target host given; pass --host or set LATENCY_HOST")
            })?;

        let output_dir = env
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::defaults::DEFAULT_OUTPUT_DIR));
        let output_path = resolve_output_path(self.cli.out.as_deref(), &output_dir, &host, now);

        let mut config = RunConfig::new(host, output_path);

        if let Some(interval) = self.cli.interval.or(env.interval) {
            config.interval = interval;
        }
        if let Some(timeout) = self.cli.timeout.or(env.timeout_seconds) {
            config.timeout_seconds = timeout;
        }
        config.stop_condition = StopCondition::from_options(self.cli.count, self.cli.duration)?;

        config.enable_color = self
            .cli
            .color_override()
            .or(env.enable_color)
            .unwrap_or_else(supports_color);
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
        if let Some(format) = self.cli.log_format.or(env.log_format) {
            config.log_format = format;
        }

        config.validate()?;

        Ok(config)
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<RunConfig> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &RunConfig) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Host: {}", config.host));
    summary.push(format!("Interval: {}s", format_seconds(config.interval)));
    summary.push(format!("Timeout: {}s", config.timeout_seconds));
    summary.push(format!("Stop: {}", config.stop_condition.describe()));
    summary.push(format!("Output: {}", config.output_path.display()));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
