//! Default settings and path utilities for history-cuts.
//!
//! This module holds the defaults every option falls back to and the
//! functions for resolving user supplied paths, expanding `~` where needed.

use std::path::PathBuf;

/// Shell invoked to print the in-memory history
pub const DEFAULT_HISTORY_SHELL: &str = "bash";

/// Script passed to the history shell: reload the history file, then print it
pub const HISTORY_SHELL_SCRIPT: &str = "history -r; history";

/// Number of most recent commands offered for selection
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// First line of every generated script
pub const DEFAULT_SHEBANG: &str = "#!/bin/bash";

/// Suffix appended to the script name given by the operator
pub const SCRIPT_EXTENSION: &str = "sh";

/// Directory scripts are written to when none is given
const DEFAULT_OUTPUT_DIRECTORY: &str = ".";

/// Resolves the directory the script is written to.
///
/// If a custom directory is provided, uses that directory. Otherwise, uses
/// the current working directory. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use history_cuts_core::config::get_output_directory;
///
/// // Current directory
/// let default_dir = get_output_directory(&None);
/// assert_eq!(default_dir.to_str(), Some("."));
///
/// // Custom directory
/// let custom_dir = get_output_directory(&Some("/tmp/scripts".to_string()));
/// assert_eq!(custom_dir.to_str(), Some("/tmp/scripts"));
/// ```
pub fn get_output_directory(output_directory_arg: &Option<String>) -> PathBuf {
    let output_directory = match output_directory_arg {
        Some(output_directory) => output_directory,
        None => DEFAULT_OUTPUT_DIRECTORY,
    };

    PathBuf::from(shellexpand::tilde(output_directory).to_string())
}

/// Expands shell variables in a history file path.
///
/// Returns None if no history file is provided.
pub fn expand_history_file(history_file: &Option<String>) -> Option<PathBuf> {
    history_file
        .as_ref()
        .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
}
