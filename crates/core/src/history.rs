//! Sources of recent shell history.
//!
//! A [`HistorySource`] yields the ordered list of recent commands offered for
//! selection. [`ShellHistorySource`] asks an interactive shell to print its
//! history; [`FileHistorySource`] reads a history file directly.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::config::{DEFAULT_HISTORY_LIMIT, DEFAULT_HISTORY_SHELL, HISTORY_SHELL_SCRIPT};
use crate::error::{Error, Result};

static HISTORY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(.*)$").expect("history line pattern is valid")
});

static TIMESTAMP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\d+$").expect("timestamp pattern is valid"));

/// One line of `history` output: the shell's own index and the command text.
///
/// The index is kept as printed; nothing downstream reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub index: String,
    pub text: String,
}

/// Anything that can produce the ordered list of recent commands,
/// oldest first.
pub trait HistorySource {
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or parsed.
    fn fetch_recent_commands(&self) -> Result<Vec<String>>;
}

impl<T: HistorySource + ?Sized> HistorySource for Box<T> {
    fn fetch_recent_commands(&self) -> Result<Vec<String>> {
        (**self).fetch_recent_commands()
    }
}

/// Parses a single `<index> <command>` history line.
///
/// Surrounding whitespace on the line and on the command text is stripped.
///
/// # Errors
///
/// Returns [`Error::HistoryLine`] if the line does not match the format.
///
/// # Examples
///
/// ```
/// use history_cuts_core::history::parse_history_line;
///
/// let entry = parse_history_line("  42  git status ").unwrap();
/// assert_eq!(entry.index, "42");
/// assert_eq!(entry.text, "git status");
/// ```
pub fn parse_history_line(line: &str) -> Result<HistoryEntry> {
    let trimmed = line.trim();
    let captures = HISTORY_LINE
        .captures(trimmed)
        .ok_or_else(|| Error::history_line(line))?;

    Ok(HistoryEntry {
        index: captures[1].to_string(),
        text: captures[2].trim().to_string(),
    })
}

/// Parses the full output of `history`, keeping the last `limit` commands.
///
/// Blank lines are skipped; any other line that does not parse is an error.
///
/// # Errors
///
/// Returns [`Error::HistoryLine`] for the first malformed line.
pub fn parse_history_output(output: &str, limit: usize) -> Result<Vec<String>> {
    let mut commands = Vec::new();
    for line in output.lines().filter(|line| !line.trim().is_empty()) {
        commands.push(parse_history_line(line)?.text);
    }

    Ok(keep_most_recent(commands, limit))
}

fn keep_most_recent(mut commands: Vec<String>, limit: usize) -> Vec<String> {
    let excess = commands.len().saturating_sub(limit);
    commands.drain(..excess);
    commands
}

/// Reads history from an interactive shell subprocess.
///
/// Runs `<shell> -i -c "history -r; history"` and parses its standard output.
#[derive(Debug, Clone)]
pub struct ShellHistorySource {
    pub shell: String,
    pub script: String,
    pub limit: usize,
}

impl ShellHistorySource {
    pub fn new(shell: impl Into<String>, limit: usize) -> Self {
        Self {
            shell: shell.into(),
            script: HISTORY_SHELL_SCRIPT.to_string(),
            limit,
        }
    }

    /// Replaces the script the shell is asked to run.
    #[must_use]
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }
}

impl Default for ShellHistorySource {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SHELL, DEFAULT_HISTORY_LIMIT)
    }
}

impl HistorySource for ShellHistorySource {
    fn fetch_recent_commands(&self) -> Result<Vec<String>> {
        debug!("Running `{} -i -c \"{}\"`", self.shell, self.script);

        // `-i` makes the shell interactive so its history builtin is enabled
        let output = Command::new(&self.shell)
            .args(["-i", "-c", self.script.as_str()])
            // A timestamp format would be printed between index and command
            .env_remove("HISTTIMEFORMAT")
            .stdin(Stdio::null())
            .output()?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stderr.is_empty() {
            debug!("History shell stderr: {}", stderr);
        }

        if !output.status.success() {
            return Err(Error::SubProcessExit {
                shell: self.shell.clone(),
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("History shell printed {} lines", stdout.lines().count());

        parse_history_output(&stdout, self.limit)
    }
}

/// Reads history from a plain history file, one command per line.
///
/// `#<epoch>` timestamp lines written when `HISTTIMEFORMAT` is set are skipped.
#[derive(Debug, Clone)]
pub struct FileHistorySource {
    pub path: PathBuf,
    pub limit: usize,
}

impl FileHistorySource {
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
        }
    }
}

impl HistorySource for FileHistorySource {
    fn fetch_recent_commands(&self) -> Result<Vec<String>> {
        debug!("Reading history file `{}`", self.path.display());

        let bytes = fs::read(&self.path).map_err(|e| {
            Error::io_error(
                "history".to_string(),
                self.path.display().to_string(),
                e,
            )
        })?;

        let commands = String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !TIMESTAMP_LINE.is_match(line))
            .map(ToString::to_string)
            .collect();

        Ok(keep_most_recent(commands, self.limit))
    }
}
