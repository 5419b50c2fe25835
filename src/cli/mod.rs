//! Command-line interface definition

use crate::config::EnvManager;
use crate::logging::LogFormat;
use clap::Parser;
use std::io::IsTerminal;
use std::time::Duration;

/// Largest accepted probe interval, one day
const MAX_INTERVAL_SECS: f64 = 86_400.0;

/// Latency Logger - periodically ping a host and log every round-trip time to CSV
#[derive(Parser, Debug, Clone)]
#[command(name = "latency-logger")]
#[command(version, about, long_about = None)]
#[command(after_help = EnvManager::display_env_help())]
pub struct Cli {
    /// Target host name or IP address (or LATENCY_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Seconds between the start of consecutive probes [default: 1.0]
    #[arg(long, value_name = "SECS", value_parser = parse_interval)]
    pub interval: Option<Duration>,

    /// Per-probe timeout in whole seconds, 1-300 [default: 2]
    #[arg(long, value_name = "SECS", value_parser = parse_timeout)]
    pub timeout: Option<u64>,

    /// Stop after this many probes
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..), conflicts_with = "duration")]
    pub count: Option<u64>,

    /// Stop after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: Option<u64>,

    /// CSV output path [default: data/latency_<host>_<timestamp>.csv]
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Format of diagnostic messages on stderr
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Explicit color choice from `--color` / `--no-color`, if any
    pub fn color_override(&self) -> Option<bool> {
        if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None
        }
    }

    /// Check if colors should be enabled, falling back to terminal detection
    pub fn use_colors(&self) -> bool {
        self.color_override().unwrap_or_else(supports_color)
    }
}

/// Parse a non-negative, possibly fractional, number of seconds
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid interval: {}", s))?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("Interval must be a non-negative number of seconds, got: {}", s));
    }
    if secs > MAX_INTERVAL_SECS {
        return Err(format!("Interval cannot exceed {} seconds", MAX_INTERVAL_SECS));
    }

    Ok(Duration::from_secs_f64(secs))
}

/// Parse a whole-second probe timeout
pub fn parse_timeout(s: &str) -> Result<u64, String> {
    if s.starts_with('+') || s.starts_with("0x") || s.starts_with("0X") {
        return Err(format!("Invalid timeout: {}", s));
    }

    s.parse::<u64>()
        .map_err(|_| format!("Invalid timeout: {}", s))
        .and_then(|secs| {
            if secs == 0 {
                Err("Timeout must be greater than 0".to_string())
            } else if secs > crate::defaults::MAX_TIMEOUT_SECS {
                Err(format!(
                    "Timeout cannot exceed {} seconds",
                    crate::defaults::MAX_TIMEOUT_SECS
                ))
            } else {
                Ok(secs)
            }
        })
}

/// Check if the terminal supports color output
pub fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    std::io::stdout().is_terminal()
}
