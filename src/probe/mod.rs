//! Probe invocation: one ICMP echo per call via the system ping utility
//!
//! A probe never returns an error. Anything that goes wrong while running
//! ping (missing binary, permission denied, a hung process) comes back as a
//! failed [`ProbeOutcome`] whose text describes the problem.

pub mod parser;
pub mod platform;

pub use parser::extract_rtt_ms;
pub use platform::{PingCommand, PingPlatform};

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// What a single probe attempt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Combined stdout and stderr, or an `EXCEPTION:` description
    pub output: String,
    /// Whether the probe process reported success
    pub exit_success: bool,
}

impl ProbeOutcome {
    /// Outcome of a process that ran to completion
    pub fn completed(output: impl Into<String>, exit_success: bool) -> Self {
        Self {
            output: output.into(),
            exit_success,
        }
    }

    /// Outcome of a probe that could not be run at all
    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            output: format!("EXCEPTION: {}", error),
            exit_success: false,
        }
    }

    /// Round-trip time found in the output, if any
    pub fn rtt_ms(&self) -> Option<f64> {
        extract_rtt_ms(&self.output)
    }
}

/// A source of latency measurements
#[async_trait]
pub trait Probe: Send + Sync {
    /// Send one echo request and wait for the result
    async fn probe(&self) -> ProbeOutcome;

    /// Command line or other description shown in the startup banner
    fn describe(&self) -> String;
}

/// Probe backed by the operating system's `ping` command
#[derive(Debug, Clone)]
pub struct SystemPing {
    command: PingCommand,
    watchdog: Duration,
}

impl SystemPing {
    /// Build the ping command for the current platform
    pub fn new(host: &str, timeout_secs: u64) -> Self {
        Self::for_platform(PingPlatform::detect(), host, timeout_secs)
    }

    /// Build the ping command for an explicit platform family
    pub fn for_platform(platform: PingPlatform, host: &str, timeout_secs: u64) -> Self {
        Self::with_command(
            platform.command(host, timeout_secs),
            Duration::from_secs(timeout_secs).saturating_add(crate::defaults::PROBE_GRACE),
        )
    }

    /// Run an arbitrary command as the probe, killed after `watchdog`
    pub fn with_command(command: PingCommand, watchdog: Duration) -> Self {
        Self { command, watchdog }
    }

    pub fn command(&self) -> &PingCommand {
        &self.command
    }

    /// Longest the probe process may run before it is killed
    pub fn watchdog(&self) -> Duration {
        self.watchdog
    }
}

#[async_trait]
impl Probe for SystemPing {
    async fn probe(&self) -> ProbeOutcome {
        let mut command = Command::new(&self.command.program);
        command
            .args(&self.command.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        match tokio::time::timeout(self.watchdog, command.output()).await {
            Ok(Ok(output)) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                ProbeOutcome::completed(text, output.status.success())
            }
            Ok(Err(e)) => ProbeOutcome::failed(format!("failed to run '{}': {}", self.command.program, e)),
            Err(_) => ProbeOutcome::failed(format!(
                "'{}' did not exit within {:.1}s and was killed",
                self.command,
                self.watchdog.as_secs_f64()
            )),
        }
    }

    fn describe(&self) -> String {
        self.command.to_string()
    }
}
