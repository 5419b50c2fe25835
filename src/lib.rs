//! Latency Logger
//!
//! Periodically pings a target host with the operating system's `ping`
//! utility, appends every measurement to a CSV log and prints summary
//! statistics when the run ends.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod models;
pub mod output;
pub mod probe;
pub mod recorder;
pub mod stats;

// Re-export commonly used types
pub use app::App;
pub use error::{AppError, Result};
pub use executor::{ProbeSession, RunReport, ShutdownSignal, StopReason};
pub use models::{RunConfig, Sample, StopCondition};
pub use probe::{extract_rtt_ms, Probe, ProbeOutcome, SystemPing};
pub use recorder::SampleRecorder;
pub use stats::{summarize, LatencySummary};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
    pub const DEFAULT_TIMEOUT_SECS: u64 = 2;
    pub const MAX_TIMEOUT_SECS: u64 = 300;
    pub const DEFAULT_OUTPUT_DIR: &str = "data";
    pub const DEFAULT_ENABLE_COLOR: bool = true;

    /// Upper bound, in characters, on the raw probe text stored per sample
    pub const RAW_OUTPUT_MAX_CHARS: usize = 500;

    /// Extra time granted to the ping process beyond its own timeout before it is killed
    pub const PROBE_GRACE: Duration = Duration::from_secs(5);
}
