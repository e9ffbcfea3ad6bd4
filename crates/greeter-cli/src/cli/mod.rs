//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and
//! help text. No business logic lives here; in particular the positional
//! count is not enforced by clap so that the handler can print the usage
//! message itself.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "greeter",
    bin_name = "greeter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Greets a person by name",
    long_about = "Validates a name (non-empty, at most 100 bytes) and \
                  prints a greeting for it.",
    after_help = "EXAMPLES:\n\
        \x20 greeter Alice\n\
        \x20 greeter \"Bob Smith\"\n\
        \x20 GREETER_OUTPUT__TARGET=stderr greeter Alice",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name to greet. Exactly one is expected.
    ///
    /// Unknown hyphenated words count as names (`greeter -x`); once a name
    /// has been seen, everything after it does too. `--` forces a name that
    /// collides with a flag.
    #[arg(value_name = "NAME", allow_hyphen_values = true)]
    pub names: Vec<String>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
