//! The probe loop: probe, parse, record, check for stop, sleep, repeat.
//!
//! A [`ProbeSession`] owns everything a run touches (the probe, the open
//! sample log, the console and the shutdown signal) and is consumed by
//! [`ProbeSession::run`]. Probes never overlap. The only await points are
//! the probe itself and the pause between iterations, and only the pause is
//! cut short by an interrupt.

pub mod shutdown;

pub use shutdown::ShutdownSignal;

use crate::{
    error::Result,
    logging::Logger,
    models::{RunConfig, Sample, StopCondition},
    output::OutputFormatter,
    probe::Probe,
    recorder::SampleRecorder,
    stats::{summarize, LatencySummary},
};
use chrono::Local;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Why the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// The configured number of samples was recorded
    CountReached,
    /// The configured run duration elapsed
    DurationElapsed,
    /// Ctrl+C (or another trigger of the shutdown signal)
    Interrupted,
}

impl StopReason {
    pub fn description(&self) -> &'static str {
        match self {
            Self::CountReached => "sample count reached",
            Self::DurationElapsed => "duration elapsed",
            Self::Interrupted => "stopped by user",
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub stop_reason: StopReason,
    /// Samples recorded, successful or not
    pub sent: u64,
    /// Successful round-trip times in probe order
    pub rtts: Vec<f64>,
    pub elapsed: Duration,
    pub output_path: PathBuf,
}

impl RunReport {
    /// Number of successful probes
    pub fn received(&self) -> u64 {
        self.rtts.len() as u64
    }

    /// Percentage of recorded samples that failed
    pub fn loss_percent(&self) -> f64 {
        if self.sent == 0 {
            0.0
        } else {
            (self.sent - self.received()) as f64 / self.sent as f64 * 100.0
        }
    }

    /// Latency statistics over the successful probes
    pub fn summary(&self) -> Option<LatencySummary> {
        summarize(&self.rtts)
    }
}

/// Everything one logging run needs, built once at startup
pub struct ProbeSession<P: Probe> {
    config: RunConfig,
    probe: P,
    recorder: SampleRecorder,
    formatter: Box<dyn OutputFormatter>,
    console: Box<dyn Write + Send>,
    logger: Logger,
    shutdown: ShutdownSignal,
}

impl<P: Probe> ProbeSession<P> {
    pub fn new(
        config: RunConfig,
        probe: P,
        recorder: SampleRecorder,
        formatter: Box<dyn OutputFormatter>,
        logger: Logger,
        shutdown: ShutdownSignal,
    ) -> Self {
        Self {
            config,
            probe,
            recorder,
            formatter,
            console: Box::new(std::io::stdout()),
            logger,
            shutdown,
        }
    }

    /// Send per-sample console lines somewhere other than stdout
    pub fn with_console(mut self, console: Box<dyn Write + Send>) -> Self {
        self.console = console;
        self
    }

    /// Run until the stop condition or an interrupt.
    ///
    /// Only a failure to write the sample log ends the run with an error.
    pub async fn run(mut self) -> Result<RunReport> {
        let started = Instant::now();
        let mut sent: u64 = 0;
        let mut rtts = Vec::new();

        self.logger
            .debug("probe loop starting")
            .field("host", &self.config.host)
            .field("interval_ms", self.config.interval.as_millis() as u64)
            .field("stop", self.config.stop_condition.describe())
            .field("probe", self.probe.describe())
            .log();

        let stop_reason = loop {
            if self.shutdown.is_triggered() {
                break StopReason::Interrupted;
            }

            let iteration_started = Instant::now();
            let sample = self.probe_once().await;

            if let Err(e) = self.recorder.record(&sample) {
                self.logger
                    .error("failed to record sample")
                    .error_info(&e)
                    .field("path", self.recorder.path().display().to_string())
                    .log();
                return Err(e);
            }
            sent += 1;
            if let Some(rtt) = sample.rtt_ms() {
                rtts.push(rtt);
            }

            let line = self.formatter.format_sample_line(&sample);
            let _ = writeln!(self.console, "{}", line);
            let _ = self.console.flush();

            if self.config.stop_condition.is_reached(sent, started.elapsed()) {
                break match self.config.stop_condition {
                    StopCondition::Duration(_) => StopReason::DurationElapsed,
                    _ => StopReason::CountReached,
                };
            }

            if self.shutdown.is_triggered() {
                break StopReason::Interrupted;
            }

            let iteration = iteration_started.elapsed();
            if !self.config.interval.is_zero() && iteration > self.config.interval {
                self.logger
                    .warn("probe took longer than the interval; next probe starts at once")
                    .field("iteration_ms", iteration.as_millis() as u64)
                    .field("interval_ms", self.config.interval.as_millis() as u64)
                    .log();
            }

            let pause = self.config.interval.saturating_sub(iteration);
            self.logger
                .trace("sleeping until next probe")
                .field("pause_ms", pause.as_millis() as u64)
                .log();

            if !pause.is_zero() {
                tokio::select! {
                    _ = tokio::time::sleep(pause) => {}
                    _ = self.shutdown.wait() => break StopReason::Interrupted,
                }
            }
        };

        let report = RunReport {
            stop_reason,
            sent,
            rtts,
            elapsed: started.elapsed(),
            output_path: self.recorder.path().to_path_buf(),
        };

        self.logger
            .info("probe loop finished")
            .field("reason", report.stop_reason)
            .field("sent", report.sent)
            .field("received", report.received())
            .field("elapsed_ms", report.elapsed.as_millis() as u64)
            .log();

        Ok(report)
    }

    async fn probe_once(&self) -> Sample {
        let timestamp = Local::now();
        let probe_started = Instant::now();
        let outcome = self.probe.probe().await;
        let rtt = outcome.rtt_ms();

        if outcome.exit_success && rtt.is_none() {
            self.logger
                .debug("probe exited successfully but no time field was found")
                .field("output", &outcome.output)
                .log();
        }

        let sample = Sample::from_probe(
            timestamp,
            self.config.host.as_str(),
            outcome.exit_success,
            rtt,
            &outcome.output,
        );

        self.logger
            .debug("probe finished")
            .field("success", sample.success())
            .field("rtt_ms", sample.rtt_ms())
            .field("probe_ms", probe_started.elapsed().as_millis() as u64)
            .log();

        sample
    }
}
