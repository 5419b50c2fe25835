//! Error handling for the latency logger
//!
//! Probe and parse failures never show up here: they are recorded as failed
//! samples. What remains are problems that stop a run before it starts
//! (configuration) or end it early (the sample log could not be written).

use thiserror::Error;

/// Custom error types for the latency logger
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Parsing errors (numbers, log levels, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// The sample log could not be opened, written or synced
    #[error("Sample log error: {0}")]
    Record(String),

}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new sample log error
    pub fn record<S: Into<String>>(message: S) -> Self {
        Self::Record(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Parse(_) => "PARSE",
            Self::Record(_) => "RECORD",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file, LATENCY_* environment variables or command line arguments.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Check the host name and the interval, timeout, count and duration values.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse value: {}\n\nSuggestion: Numbers must be plain decimals, e.g. --interval 0.5 --timeout 2.", msg)
            }
            Self::Record(msg) => {
                format!("Could not write the sample log: {}\n\nSuggestion: Samples collected so far are on disk. Free up space or choose another --out path and start a new run.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => 1,  // Invalid configuration/usage
            Self::Record(_) => 5,  // Sample log I/O
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Record(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error reporter for user-facing error output
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Render an error the way `report_error` prints it
    pub fn format_error(&self, error: &AppError) -> String {
        let mut out = error.format_for_console(self.use_color);
        if self.verbose {
            out.push_str("\n\n");
            out.push_str(&error.user_friendly_message());
        }
        out
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", self.format_error(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_error = AppError::config("Invalid host");
        assert_eq!(config_error.category(), "CONFIG");
        assert_eq!(config_error.exit_code(), 1);

        let record_error = AppError::record("disk full");
        assert_eq!(record_error.category(), "RECORD");
        assert_eq!(record_error.exit_code(), 5);
    }

    #[test]
    fn test_error_display() {
        let error = AppError::validation("host must not be empty");
        assert_eq!(error.to_string(), "Validation error: host must not be empty");
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = AppError::record("No space left on device");
        let message = error.user_friendly_message();
        assert!(message.contains("No space left on device"));
        assert!(message.contains("Suggestion:"));
    }

    #[test]
    fn test_console_formatting_plain() {
        let error = AppError::parse("bad number");
        let formatted = error.format_for_console(false);
        assert_eq!(formatted, "[PARSE] Parsing error: bad number");
    }

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(AppError::validation("bad host").exit_code(), 1);
        assert_eq!(AppError::parse("bad number").exit_code(), 1);
        assert_eq!(AppError::record("disk full").exit_code(), 5);
    }

    #[test]
    fn test_error_reporter_verbose_adds_suggestion() {
        let reporter = ErrorReporter::new(false, true);
        let text = reporter.format_error(&AppError::config("missing host"));
        assert!(text.starts_with("[CONFIG]"));
        assert!(text.contains("Suggestion:"));

        let terse = ErrorReporter::new(false, false).format_error(&AppError::config("missing host"));
        assert!(!terse.contains("Suggestion:"));
    }
}
