//! Type definitions for the prompt-driven session.
//!
//! This module defines the states the session moves through and the
//! answers the operator can give at each prompt.

use std::path::PathBuf;

use history_cuts_core::selection::SelectionSet;

/// Where the session currently is.
///
/// Sessions start in `AwaitingStart` and only ever move forward to `Done`,
/// apart from the operator asking to change the selection while `Selecting`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingStart,
    Selecting {
        commands: Vec<String>,
    },
    AwaitingScriptName {
        commands: Vec<String>,
        selection: SelectionSet,
    },
    Done(Outcome),
}

/// How a finished session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operator chose not to build a script.
    Declined,
    /// The history source returned no commands.
    NoHistory,
    /// The operator backed out after selecting, or input ended early.
    Cancelled,
    /// The script was written to this path.
    Written(PathBuf),
    /// Dry run: the script for this path was printed, not written.
    Printed(PathBuf),
}

/// Represents the operator's answer when asked if the script is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyChoice {
    Yes,
    No,
    ChangeSelection,
}
