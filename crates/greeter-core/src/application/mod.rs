//! Application layer for the greeter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GreetService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Commands**: DTOs entering the application (GreetCommand)
//! - **Context**: Cooperative cancellation passed through every call
//! - **Errors**: Facade over the domain error type
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod command;
pub mod context;
pub mod error;
pub mod ports;
pub mod services;

pub use command::GreetCommand;
pub use context::{CancelHandle, CancelReason, Context};

// Re-export main services
pub use services::GreetService;

// Re-export port traits (for adapter implementation)
pub use ports::{GreetPort, Writer};
