//! Output path selection for the sample log

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Replace every character outside `[A-Za-z0-9_.-]` with `_`
pub fn sanitize_host(host: &str) -> String {
    host.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `<dir>/latency_<sanitized-host>_<YYYYmmdd_HHMMSS>.csv`
pub fn auto_output_path(dir: &Path, host: &str, now: DateTime<Local>) -> PathBuf {
    dir.join(format!(
        "latency_{}_{}.csv",
        sanitize_host(host),
        now.format("%Y%m%d_%H%M%S")
    ))
}

/// Use the explicit path verbatim when one was given, otherwise generate one under `dir`
pub fn resolve_output_path(
    explicit: Option<&str>,
    dir: &Path,
    host: &str,
    now: DateTime<Local>,
) -> PathBuf {
    match explicit.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => PathBuf::from(path),
        None => auto_output_path(dir, host, now),
    }
}
