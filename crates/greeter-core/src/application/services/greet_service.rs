//! Greet Service - the greet use case.
//!
//! Coordinates the workflow:
//! 1. Validate the raw name into a `Person`
//! 2. Build the greeting message
//! 3. Hand it to the injected `Writer`
//!
//! It implements the driving port (incoming) and uses a driven port (outgoing).

use tracing::{debug, instrument};

use crate::{
    application::{
        Context, GreetCommand,
        ports::{GreetPort, Writer},
    },
    domain::{GreetResult, Person, ResultExt},
};

/// Greet use case, generic over its output port.
///
/// The writer type is fixed at compile time, so calls into it are
/// statically dispatched.
#[derive(Debug, Clone)]
pub struct GreetService<W> {
    writer: W,
}

impl<W: Writer> GreetService<W> {
    /// Create a new greet service with the given writer.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use greeter_core::application::{Context, GreetCommand, GreetService, ports::GreetPort};
    ///
    /// let service = GreetService::new(writer); // impl Writer
    /// service.execute(&Context::background(), GreetCommand::new("Alice"))?;
    /// ```
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: Writer> GreetPort for GreetService<W> {
    /// Validation errors are returned unchanged and nothing is written.
    /// Writer errors are returned verbatim. No retries.
    #[instrument(skip_all, fields(name = %command.name()))]
    fn execute(&self, ctx: &Context, command: GreetCommand) -> GreetResult<()> {
        let person = Person::new(command.name).tap(
            |_| debug!("Name validated"),
            |e| debug!(error = %e, "Name rejected"),
        )?;

        let message = person.greeting_message();
        self.writer.write(ctx, &message)
    }
}
