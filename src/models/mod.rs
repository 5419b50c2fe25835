//! Data models for the latency logger

pub mod config;
pub mod sample;

// Re-export main model types
pub use config::{RunConfig, StopCondition};
pub use sample::Sample;
