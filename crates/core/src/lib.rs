//! History Cuts Core Library
//!
//! This crate provides the core functionality for history-cuts, a tool that
//! turns commands from recent shell history into an executable script.
//!
//! # Key Features
//!
//! - **History Sources**: Fetch recent commands from an interactive shell or a history file
//! - **Selection Parsing**: Parse comma-separated index lists typed by the operator
//! - **Script Emission**: Write the selected commands behind a shebang and mark the file executable
//! - **Error Handling**: A single error type covering every failure mode
//!
//! # Examples
//!
//! Building a script from the most recent bash history:
//!
//! ```no_run
//! use history_cuts_core::history::{HistorySource, ShellHistorySource};
//! use history_cuts_core::script::write_script;
//! use history_cuts_core::selection::read_selection;
//!
//! let commands = ShellHistorySource::default().fetch_recent_commands()?;
//! let selection = read_selection("0, 2")?;
//! let path = write_script("setup", &selection, &commands)?;
//! println!("Wrote {}", path.display());
//! # Ok::<(), history_cuts_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod script;
pub mod selection;
