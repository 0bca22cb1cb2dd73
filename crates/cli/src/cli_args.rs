//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and turns the
//! parsed options into the history source and script emitter for a session.

use clap::Parser;
use history_cuts_core::config::{
    expand_history_file, get_output_directory, DEFAULT_HISTORY_LIMIT, DEFAULT_HISTORY_SHELL,
    DEFAULT_SHEBANG,
};
use history_cuts_core::error::{Error, Result};
use history_cuts_core::history::{FileHistorySource, HistorySource, ShellHistorySource};
use history_cuts_core::script::ScriptEmitter;
use log::debug;

/// Command-line arguments for the history-cuts CLI tool.
///
/// Every option is optional; with none given the tool asks `bash` for its
/// last 100 history entries and writes `<name>.sh` into the current
/// directory.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use history_cuts_cli::cli_args::Args;
///
/// let args = Args::parse_from(["hc", "--limit", "20"]);
/// assert_eq!(args.limit, 20);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Shell asked to print its history with `history -r; history`.
    ///
    /// If not provided, defaults to `bash`.
    #[arg(long, short = 's')]
    pub shell: Option<String>,

    /// Read commands from this history file instead of running a shell.
    ///
    /// One command per line, as in `~/.bash_history`. Cannot be combined with `--shell`.
    #[arg(long, short = 'f')]
    pub history_file: Option<String>,

    /// Number of most recent history commands to choose from.
    #[arg(long, short = 'n', default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub limit: usize,

    /// First line written to the script.
    #[arg(long, short = 'b', default_value = DEFAULT_SHEBANG)]
    pub shebang: String,

    /// Directory the script is written to.
    ///
    /// If not provided, defaults to the current directory.
    #[arg(long, short = 'o')]
    pub output_dir: Option<String>,

    /// Print the script instead of writing it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,
}

impl Args {
    /// Builds the history source selected by the arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the limit is zero, or if both a shell and a
    /// history file are given.
    pub fn history_source(&self) -> Result<Box<dyn HistorySource>> {
        if self.limit == 0 {
            return Err(Error::InvalidLimit);
        }

        match (&self.shell, expand_history_file(&self.history_file)) {
            (Some(_), Some(_)) => Err(Error::ConflictingHistorySources),
            (_, Some(path)) => {
                debug!("History file: `{}`", path.display());
                Ok(Box::new(FileHistorySource::new(path, self.limit)))
            }
            (shell, None) => {
                let shell = shell.as_deref().unwrap_or(DEFAULT_HISTORY_SHELL);
                debug!("History shell: `{}`", shell);
                Ok(Box::new(ShellHistorySource::new(shell, self.limit)))
            }
        }
    }

    /// Builds the emitter that writes into the output directory.
    #[must_use]
    pub fn script_emitter(&self) -> ScriptEmitter {
        ScriptEmitter::new(get_output_directory(&self.output_dir), self.shebang.clone())
    }
}
