//! The greet command: positional arguments in, greeting out.

use greeter_core::application::{Context, GreetCommand, ports::GreetPort};
use tracing::{debug, instrument};

use crate::error::{CliError, CliResult, DEFAULT_PROGRAM};

/// The name in `[program, name]`, or [`CliError::Usage`] for any other
/// argument count.
///
/// Cheap and side-effect free; the composition root calls it before
/// loading config or opening the output.
pub fn single_name(args: &[String]) -> CliResult<&str> {
    match args {
        [_, name] => Ok(name.as_str()),
        _ => {
            debug!(argc = args.len(), "Wrong argument count");
            let program = args.first().map_or(DEFAULT_PROGRAM, String::as_str);
            Err(CliError::Usage {
                program: program.to_owned(),
            })
        }
    }
}

/// Maps process arguments onto the greet use case.
///
/// Generic over the driving port so tests can swap in a mock.
pub struct GreetHandler<P> {
    port: P,
}

impl<P: GreetPort> GreetHandler<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Run with `args[0]` as the program name and `args[1]` as the name to
    /// greet.
    ///
    /// Any other argument count is a [`CliError::Usage`] and the use case is
    /// not invoked.
    #[instrument(skip_all, fields(argc = args.len()))]
    pub fn execute(&self, args: &[String]) -> CliResult<()> {
        let name = single_name(args)?;

        let ctx = Context::background();
        self.port.execute(&ctx, GreetCommand::new(name))?;

        debug!("Greeting delivered");
        Ok(())
    }
}
