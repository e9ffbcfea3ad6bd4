//! Greeter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the greeter,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          greeter-cli (CLI)              │
//! │   (Composition root, drives GreetPort)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GreetService)               │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driving: GreetPort, Driven: Writer)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    greeter-adapters (Infrastructure)    │
//! │        (ConsoleWriter, SharedBuffer)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │     (Person, ErrorInfo, ResultExt)      │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use greeter_core::prelude::*;
//!
//! // 1. Pick a writer (any impl Writer)
//! let service = GreetService::new(writer);
//!
//! // 2. Run the use case
//! service.execute(&Context::background(), GreetCommand::new("Alice"))?;
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CancelHandle, CancelReason, Context, GreetCommand, GreetService,
        ports::{GreetPort, Writer},
    };
    pub use crate::domain::{
        ErrorInfo, ErrorKind, GreetResult, MAX_NAME_LENGTH, OptionExt, Person, ResultExt,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
