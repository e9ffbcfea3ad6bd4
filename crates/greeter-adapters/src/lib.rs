//! Infrastructure adapters for the greeter.
//!
//! This crate implements the ports defined in `greeter-core::application::ports`.
//! It contains all I/O operations.

pub mod console;

// Re-export commonly used adapters
pub use console::{ConsoleWriter, SharedBuffer};
