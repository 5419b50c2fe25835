//! Platform-specific ping command construction
//!
//! The three ping dialects are a closed set selected once at startup by
//! [`PingPlatform::detect`]; nothing else in the crate branches on the OS.

use std::fmt;

/// Ping dialect of the host operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingPlatform {
    /// `ping -n 1 -w <milliseconds>`
    Windows,
    /// iputils/busybox `ping -c 1 -W <seconds>`
    Linux,
    /// BSD-style ping (macOS and anything else); its `-W` unit varies, so the
    /// system default timeout is used
    MacOs,
}

impl PingPlatform {
    /// Detect the ping dialect for the platform this binary was built for
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::MacOs
        }
    }

    /// Human-readable platform family name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
        }
    }

    /// Whether the caller-supplied timeout is passed to ping
    pub fn honors_timeout(&self) -> bool {
        !matches!(self, Self::MacOs)
    }

    /// Build the single-echo ping command for `host`
    pub fn command(&self, host: &str, timeout_secs: u64) -> PingCommand {
        let args = match self {
            Self::Windows => vec![
                "-n".to_string(),
                "1".to_string(),
                "-w".to_string(),
                timeout_secs.saturating_mul(1000).to_string(),
                host.to_string(),
            ],
            Self::Linux => vec![
                "-c".to_string(),
                "1".to_string(),
                "-W".to_string(),
                timeout_secs.to_string(),
                host.to_string(),
            ],
            Self::MacOs => vec!["-c".to_string(), "1".to_string(), host.to_string()],
        };

        PingCommand {
            program: "ping".to_string(),
            args,
        }
    }
}

/// A fully built ping invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for PingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
