//! Error handling for the greeter CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - A one-line hint per category
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use greeter_core::application::error::{ErrorInfo, ErrorKind};

/// Fallback program name when `argv[0]` is unavailable.
pub const DEFAULT_PROGRAM: &str = "greeter";

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of positional arguments.
    #[error("Usage: {program} <name>")]
    Usage { program: String },

    /// The greet use case failed (validation or infrastructure).
    ///
    /// Displays only the message; the kind selects the hint.
    #[error("{}", .0.message)]
    Greet(#[from] ErrorInfo),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file or environment override could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// The configured output file could not be opened.
    #[error("Cannot open output file {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// The single hint line printed after the error message.
    pub fn hint(&self) -> String {
        match self {
            Self::Usage { program } => format!("Example: {program} Alice"),
            Self::Greet(info) => info.hint().to_owned(),
            Self::Config { .. } | Self::Output { .. } => "A system error occurred.".to_owned(),
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Usage { .. } => ErrorCategory::UserError,
            Self::Greet(info) => match info.kind {
                ErrorKind::Validation => ErrorCategory::UserError,
                ErrorKind::Infrastructure => ErrorCategory::Internal,
            },
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Output { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS. Every failure maps to `1`.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::Configuration | ErrorCategory::Internal => 1,
        }
    }

    /// Format the error with ANSI colours.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        match self {
            Self::Usage { program } => {
                output.push_str(&format!("{} {program} <name>\n", "Usage:".bold()));
            }
            _ => {
                output.push_str(&format!("{} {}\n", "Error:".red().bold(), self.red()));
            }
        }

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!("  {} {}\n", "→".dimmed(), err.to_string().dimmed()));
                source = err.source();
            }
        }

        output.push_str(&format!("{}\n", self.hint().yellow()));
        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = match self {
            Self::Usage { .. } => format!("{self}\n"),
            _ => format!("Error: {self}\n"),
        };

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        out.push_str(&self.hint());
        out.push('\n');
        out
    }

    /// Log the error using tracing.
    ///
    /// Never above `info`: at the default level stderr carries only the
    /// formatted report.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::debug!("User error: {}", self),
            ErrorCategory::Configuration => tracing::info!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::info!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (argument count, invalid name).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── tests ─────────────────────────────────────────────────────────────────────
