//! Round-trip time extraction from ping output

use regex::Regex;
use std::sync::LazyLock;

/// `time=12.3 ms`, `time=14ms`, `time<1ms`, `TIME=0.045 MS`, ...
static RTT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)time[=<]\s*([0-9.]+)\s*ms").expect("RTT pattern is a valid regex")
});

/// Extract the round-trip time in milliseconds from ping output.
///
/// Only the first `time` field is considered. `time<1ms` yields the bound
/// itself (1.0). Returns `None` when there is no time field or its numeral
/// does not parse.
pub fn extract_rtt_ms(output: &str) -> Option<f64> {
    let captures = RTT_PATTERN.captures(output)?;
    captures.get(1)?.as_str().parse::<f64>().ok()
}
