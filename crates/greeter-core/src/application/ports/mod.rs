//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from, or offers to, the outside world.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Writer`: Emit a line of text
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `GreetPort`: Run the greet use case (implemented by `GreetService`)

pub mod input;
pub mod output;

pub use input::GreetPort;
pub use output::Writer;
