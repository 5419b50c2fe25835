//! Main application orchestration and execution

use crate::{
    cli::Cli,
    config::{display_config_summary, load_config, validate_config, ValidationLevel},
    error::Result,
    executor::{ProbeSession, RunReport, ShutdownSignal, StopReason},
    logging::Logger,
    output::{BannerInfo, OutputFormatterFactory},
    models::RunConfig,
    probe::{Probe, SystemPing},
    recorder::SampleRecorder,
};

/// Main application struct that coordinates all components
pub struct App {
    config: RunConfig,
    logger: Logger,
}

impl App {
    /// Create an application for an already-built configuration
    pub fn new(config: RunConfig) -> Self {
        let logger = Logger::with_config("app", &config);
        Self { config, logger }
    }

    /// Load configuration from CLI arguments, environment and `.env`
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Ok(Self::new(load_config(cli)?))
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the logger until its stop condition or Ctrl+C
    pub async fn run(self) -> Result<RunReport> {
        colored::control::set_override(self.config.enable_color);

        let warnings = validate_config(&self.config)?;
        let formatter = OutputFormatterFactory::create_formatter(self.config.enable_color);

        if self.config.debug {
            self.logger
                .debug("configuration loaded")
                .field("summary", display_config_summary(&self.config))
                .field("build_time", env!("BUILD_TIME"))
                .field("git_commit", env!("GIT_COMMIT"))
                .field("target", env!("TARGET_TRIPLE"))
                .log();
        }

        for warning in &warnings {
            match warning.level {
                ValidationLevel::Warning => eprintln!("{}", formatter.format_warning(&warning.message)),
                ValidationLevel::Info => self.logger.info(&warning.format(false)).log(),
            }
        }

        let probe = SystemPing::new(&self.config.host, self.config.timeout_seconds);
        let recorder = SampleRecorder::open(&self.config.output_path)?;
        self.logger
            .named("recorder")
            .info("sample log opened")
            .field("path", self.config.output_path.display().to_string())
            .field("created_header", recorder.created_header())
            .log();

        let probe_command = probe.describe();
        println!(
            "{}",
            formatter.format_banner(&BannerInfo {
                host: &self.config.host,
                interval: self.config.interval,
                timeout_secs: self.config.timeout_seconds,
                output_path: &self.config.output_path,
                probe_command: &probe_command,
            })
        );

        let shutdown = ShutdownSignal::new();
        let listener = shutdown.listen_for_ctrl_c();

        let session = ProbeSession::new(
            self.config.clone(),
            probe,
            recorder,
            OutputFormatterFactory::create_formatter(self.config.enable_color),
            self.logger.named("executor"),
            shutdown,
        );
        let result = session.run().await;
        listener.abort();
        let report = result?;

        if report.stop_reason == StopReason::Interrupted {
            println!("{}", formatter.format_interrupted());
        }

        println!("{}", formatter.format_summary(report.summary().as_ref()));
        println!("{}", formatter.format_run_footer(&report));

        Ok(report)
    }
}
