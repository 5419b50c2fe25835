//! Latency Logger - Main CLI Application
//!
//! Pings a host once per interval, appends each result to a CSV log and
//! prints summary statistics when the run ends or is interrupted.

use clap::Parser;
use latency_logger::{
    cli::Cli,
    error::{AppError, ErrorReporter, Result},
    App, PKG_NAME, VERSION,
};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue with the command line you ran.");
        process::exit(99);
    }));

    let cli = Cli::parse();
    let reporter = ErrorReporter::new(cli.use_colors(), cli.verbose);

    if let Err(e) = run_application(cli).await {
        reporter.report_error(&e);
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        eprintln!("{} v{}", PKG_NAME, VERSION);
        eprintln!("Debug mode enabled");
    }

    let app = App::from_cli(cli)?;
    app.run().await?;

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) | AppError::Parse(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Pass the target with --host or set LATENCY_HOST");
            eprintln!("  - --interval takes seconds (decimals allowed), --timeout whole seconds 1-300");
            eprintln!("  - Use either --count or --duration, not both");
            eprintln!("  - Check your .env file format");
        }
        AppError::Record(_) => {
            eprintln!();
            eprintln!("Sample log troubleshooting:");
            eprintln!("  - Check that the output directory is writable");
            eprintln!("  - Check free disk space");
            eprintln!("  - Choose another location with --out or LATENCY_OUTPUT_DIR");
        }
    }
}
