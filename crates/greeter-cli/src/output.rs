//! Output sink selection and colour detection.

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
};

use crate::{
    cli::GlobalArgs,
    config::{OutputConfig, OutputTarget},
    error::{CliError, CliResult},
};

/// Sink handed to the console writer.
pub type Sink = Box<dyn Write + Send>;

/// Open the sink the configuration asks for.
///
/// A configured file is opened for appending and created if missing.
pub fn open_sink(config: &OutputConfig) -> CliResult<Sink> {
    if let Some(path) = &config.file {
        tracing::debug!(path = %path.display(), "Appending greetings to file");
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
        return Ok(Box::new(file));
    }

    Ok(match config.target {
        OutputTarget::Stdout => Box::new(io::stdout()),
        OutputTarget::Stderr => Box::new(io::stderr()),
    })
}

/// `true` when error reports on stderr may use ANSI colours.
pub fn use_color(args: &GlobalArgs, config: &OutputConfig) -> bool {
    !args.no_color && !config.no_color && io::stderr().is_terminal()
}

// ── tests ─────────────────────────────────────────────────────────────────────
