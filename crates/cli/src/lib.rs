//! History Cuts CLI Library
//!
//! This crate provides the command-line interface for history-cuts. It walks
//! the operator through picking commands from recent shell history and saves
//! them as an executable script.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`session`]: The prompt-driven session state machine and console rendering
//!
//! # Examples
//!
//! ```bash
//! # Pick from the last 100 bash history commands, write ./<name>.sh
//! hc
//!
//! # Read a history file instead of running a shell
//! hc --history-file ~/.bash_history
//!
//! # Only offer the last 20 commands, write into ~/bin
//! hc -n 20 -o ~/bin
//!
//! # Dry run (print the script, don't write it)
//! hc --dry-run
//! ```

pub mod cli_args;
pub mod session;
