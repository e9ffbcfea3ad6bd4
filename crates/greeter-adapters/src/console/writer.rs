//! Console writer adapter over any `std::io::Write` sink.

use std::{
    any::Any,
    fmt,
    io::{self, Write},
    panic::{self, AssertUnwindSafe},
    sync::{Mutex, PoisonError},
};

use tracing::{debug, instrument, trace};

use greeter_core::application::{
    Context,
    error::{self, GreetResult},
    ports::Writer,
};

/// Writes each message as one line to an injected sink.
///
/// The sink is chosen by the composition root: stdout, stderr, a file, or
/// a [`SharedBuffer`](super::SharedBuffer) in tests. This is the only place
/// where I/O faults become errors:
///
/// | Cause                         | Message prefix     |
/// |-------------------------------|--------------------|
/// | context already done          | `write cancelled:` |
/// | sink returned an `io::Error`  | `write failed:`    |
/// | sink panicked                 | `write panicked:`  |
///
/// Catching a panic needs an unwinding build, and the process panic hook
/// still runs first. Binaries that must keep stderr clean replace the hook
/// (the `greeter` binary routes it into its debug log).
pub struct ConsoleWriter<S> {
    sink: Mutex<S>,
}

impl<S: Write + Send> ConsoleWriter<S> {
    /// Wrap an arbitrary output stream.
    pub fn new(sink: S) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Give the sink back (e.g. to inspect a buffer).
    pub fn into_inner(self) -> S {
        self.sink
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, message: &str) -> io::Result<()> {
        // A previous write may have panicked while holding the lock; the sink
        // itself is still usable.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(sink, "{message}")?;
        sink.flush()
    }
}

impl ConsoleWriter<io::Stdout> {
    /// Writer on the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl ConsoleWriter<io::Stderr> {
    /// Writer on the process's standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<S> fmt::Debug for ConsoleWriter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleWriter").finish_non_exhaustive()
    }
}

impl<S: Write + Send> Writer for ConsoleWriter<S> {
    #[instrument(level = "trace", skip_all, fields(bytes = message.len()))]
    fn write(&self, ctx: &Context, message: &str) -> GreetResult<()> {
        if let Some(reason) = ctx.err() {
            debug!(%reason, "Write skipped");
            return Err(error::write_cancelled(reason));
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.write_line(message))) {
            Ok(Ok(())) => {
                trace!("Write complete");
                Ok(())
            }
            Ok(Err(e)) => {
                debug!(error = %e, "Write failed");
                Err(error::write_failed(e))
            }
            Err(payload) => {
                let detail = panic_detail(payload.as_ref());
                debug!(%detail, "Sink panicked during write");
                Err(error::write_panicked(detail))
            }
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}
