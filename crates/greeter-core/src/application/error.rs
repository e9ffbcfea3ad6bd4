//! Application-facing error facade.
//!
//! Outer layers (adapters, CLI) import error types from here rather than
//! reaching into `crate::domain`. There is one error type for the whole
//! workspace; this module only re-exports it and adds the constructors
//! adapters use for infrastructure failures.

pub use crate::domain::error::{ErrorInfo, ErrorKind, GreetResult};

use crate::application::CancelReason;

/// `write cancelled: <reason>`
pub fn write_cancelled(reason: CancelReason) -> ErrorInfo {
    ErrorInfo::infrastructure(format!("write cancelled: {reason}"))
}

/// `write failed: <detail>`
pub fn write_failed(detail: impl std::fmt::Display) -> ErrorInfo {
    ErrorInfo::infrastructure(format!("write failed: {detail}"))
}

/// `write panicked: <detail>`
pub fn write_panicked(detail: impl std::fmt::Display) -> ErrorInfo {
    ErrorInfo::infrastructure(format!("write panicked: {detail}"))
}
