use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("History shell `{}` exited with {}: {}", .shell, .status, .stderr)]
    SubProcessExit {
        shell: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Could not run history shell: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Could not parse history line, expected `<index> <command>`: \"{}\"", .line)]
    HistoryLine { line: String },

    #[error("Invalid selection `{}`: expected a comma-separated list of indexes", .token)]
    InvalidSelection { token: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),

    #[error("History limit must be at least 1.")]
    InvalidLimit,

    #[error("Only one of `--shell` or `--history-file` may be given.")]
    ConflictingHistorySources,
}

impl Error {
    pub fn history_line(line: &str) -> Self {
        Self::HistoryLine {
            line: line.to_string(),
        }
    }

    pub fn invalid_selection(token: &str) -> Self {
        Self::InvalidSelection {
            token: token.to_string(),
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
