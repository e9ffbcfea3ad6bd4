// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the greeter.
//!
//! This module contains pure business logic with ZERO I/O.
//! Output is handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or console calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable values**: Domain objects are Clone + PartialEq
//! - **Errors are values**: Every fallible operation returns a `GreetResult`
//!
// Public API - what the world sees
pub mod error;
pub mod railway;
pub mod value_objects;

// Re-exports for convenience
pub use error::{ErrorInfo, ErrorKind, GreetResult};
pub use railway::{OptionExt, ResultExt};
pub use value_objects::{MAX_NAME_LENGTH, Person};
