//! Driving (input) ports - implemented by the application.
//!
//! Presentation adapters (the CLI) depend on these traits, never on the
//! concrete services, so they can be tested against a mock.

use crate::application::{Context, GreetCommand};
use crate::domain::GreetResult;

/// Port for the greet use case.
pub trait GreetPort {
    /// Validate the command's name and emit the greeting.
    fn execute(&self, ctx: &Context, command: GreetCommand) -> GreetResult<()>;
}
