// ============================================================================
// domain/error.rs - ERROR TAXONOMY
// ============================================================================

use std::fmt;
use thiserror::Error;

/// Category of a failure.
///
/// Exactly two kinds exist:
/// - `Validation`: raised by domain smart constructors before any I/O
/// - `Infrastructure`: raised by adapters (I/O failure, cancellation, trapped panic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Infrastructure,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "ValidationError",
            Self::Infrastructure => "InfrastructureError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single error type carried on the failure track of every [`GreetResult`].
///
/// Errors are:
/// - Cloneable (they flow unchanged through every layer)
/// - Categorizable via [`ErrorKind`]
/// - Actionable (see [`ErrorInfo::hint`])
///
/// `message` should be non-empty; this is a convention, not enforced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A domain validation failure (invalid input).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// An infrastructure failure (I/O, cancellation, trapped panic).
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Infrastructure, message)
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_infrastructure(&self) -> bool {
        self.kind == ErrorKind::Infrastructure
    }

    /// One-line user-facing hint for this error's category.
    pub fn hint(&self) -> &'static str {
        match self.kind {
            ErrorKind::Validation => "Please provide a valid name.",
            ErrorKind::Infrastructure => "A system error occurred.",
        }
    }
}

/// Result alias used by every fallible operation in the workspace.
pub type GreetResult<T> = Result<T, ErrorInfo>;
