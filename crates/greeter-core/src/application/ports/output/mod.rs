//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `greeter-adapters` crate provides implementations.

use crate::application::Context;
use crate::domain::GreetResult;

/// Port for emitting a message.
///
/// Implemented by:
/// - `greeter_adapters::ConsoleWriter` (stdout, stderr, file or in-memory sink)
///
/// ## Contract
///
/// - Check `ctx` before doing any I/O; a done context yields an
///   infrastructure error and nothing is written
/// - Never let a panic escape; convert it to an infrastructure error
/// - Report every failure as `ErrorKind::Infrastructure`
#[cfg_attr(test, mockall::automock)]
pub trait Writer: Send + Sync {
    /// Write `message` followed by a newline.
    fn write(&self, ctx: &Context, message: &str) -> GreetResult<()>;
}

impl<W: Writer + ?Sized> Writer for &W {
    fn write(&self, ctx: &Context, message: &str) -> GreetResult<()> {
        (**self).write(ctx, message)
    }
}
