//! Diagnostics for the greeter binary.
//!
//! Everything here writes to stderr through `tracing`; stdout is reserved
//! for the greeting. The library crates only emit events.
//!
//! Default level is `warn`. `-v`/`-vv`/`-vvv` raise it to info, debug and
//! trace, `-q` lowers it to error, and `RUST_LOG` replaces the lot.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const CRATES: [&str; 3] = ["greeter", "greeter_core", "greeter_adapters"];

/// Install the stderr subscriber. Call once, first thing after parsing.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Send panic reports to the `debug` log instead of printing them.
///
/// A panic inside the output sink is already reported as a
/// `write panicked:` error, so the default `thread 'main' panicked at`
/// banner would only duplicate it. Run with `-vv` to see the report.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!(%info, "Panic caught");
    }));
}

fn level_for(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

fn directives(level: &str) -> String {
    CRATES.map(|krate| format!("{krate}={level}")).join(",")
}
