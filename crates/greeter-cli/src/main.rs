//! # Greeter CLI
//!
//! Composition root of the hexagonal greeter.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging, stderr only) and route
//!    panic reports into it.
//! 3. Check for exactly one name; nothing else happens on a usage error.
//! 4. Load configuration (env + file + defaults).
//! 5. Wire `ConsoleWriter` → `GreetService` → `GreetHandler` and run it.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Greeting written (or `--help`/`--version`) |
//! |  1   | Any failure                               |

use std::process::ExitCode;

use clap::Parser;
use greeter_adapters::ConsoleWriter;
use greeter_core::application::GreetService;
use tracing::{debug, info, instrument};

use crate::{
    cli::Cli,
    commands::greet::{GreetHandler, single_name},
    config::{AppConfig, OutputConfig},
    error::{CliError, CliResult, DEFAULT_PROGRAM},
    logging::{init_logging, install_panic_hook},
    output::{open_sink, use_color},
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here with exit code 0.
            let _ = e.print();
            return if e.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }
    install_panic_hook();

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        names = cli.names.len(),
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;

    // ── 3. Check the argument count ───────────────────────────────────────
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_owned());
    let args: Vec<String> = std::iter::once(program).chain(cli.names).collect();

    if let Err(e) = single_name(&args) {
        let color = use_color(&cli.global, &OutputConfig::default());
        return handle_error(e, verbose, color);
    }

    // ── 4. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::Config {
                message: format!("{e:#}"),
                source: None,
            };
            let color = use_color(&cli.global, &OutputConfig::default());
            return handle_error(err, verbose, color);
        }
    };
    let color = use_color(&cli.global, &config.output);

    // ── 5. Wire and run ───────────────────────────────────────────────────
    match run(&args, &config) {
        Ok(()) => {
            info!("Greeter completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Build the adapter chain and hand the arguments to the handler.
#[instrument(skip_all)]
fn run(args: &[String], config: &AppConfig) -> CliResult<()> {
    // The output file is only touched once the arguments are known good.
    single_name(args)?;

    let sink = open_sink(&config.output)?;
    let service = GreetService::new(ConsoleWriter::new(sink));
    GreetHandler::new(service).execute(args)
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
