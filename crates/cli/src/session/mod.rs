//! The prompt-driven session that turns history into a script.
//!
//! A [`Session`] reads operator answers from any [`BufRead`] and writes its
//! prompts and listings to any [`Write`], moving through [`SessionState`]
//! one step at a time:
//!
//! - **`AwaitingStart`**: ask whether to build a script; fetch and list history
//! - **`Selecting`**: read the selection, echo it highlighted, confirm it
//! - **`AwaitingScriptName`**: read a name and write (or print) the script
//! - **`Done`**: the session is over

pub mod display;
pub mod input;
pub mod types;

use std::io::{BufRead, Write};

use log::debug;

use history_cuts_core::error::{Error, Result};
use history_cuts_core::history::HistorySource;
use history_cuts_core::script::ScriptEmitter;
use history_cuts_core::selection::SelectionSet;

pub use display::{display, render_with_highlight, warn_out_of_range};
pub use types::{Outcome, ReadyChoice, SessionState};

pub struct Session<R, W, H> {
    input: R,
    output: W,
    source: H,
    emitter: ScriptEmitter,
    dry_run: bool,
}

impl<R: BufRead, W: Write, H: HistorySource> Session<R, W, H> {
    pub fn new(input: R, output: W, source: H, emitter: ScriptEmitter) -> Self {
        Self {
            input,
            output,
            source,
            emitter,
            dry_run: false,
        }
    }

    /// Print the script instead of writing it.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs the session from `AwaitingStart` until it is `Done`.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be fetched, the script cannot
    /// be written, or the console cannot be read or written.
    pub fn run(&mut self) -> Result<Outcome> {
        let mut state = SessionState::AwaitingStart;
        loop {
            state = match self.step(state)? {
                SessionState::Done(outcome) => return Ok(outcome),
                next => next,
            };
        }
    }

    /// Performs the work of one state and returns the next.
    ///
    /// # Errors
    ///
    /// See [`Session::run`].
    pub fn step(&mut self, state: SessionState) -> Result<SessionState> {
        debug!("Session step from {}", state_name(&state));

        match state {
            SessionState::AwaitingStart => self.start(),
            SessionState::Selecting { commands } => self.select(commands),
            SessionState::AwaitingScriptName {
                commands,
                selection,
            } => self.emit(&commands, &selection),
            done @ SessionState::Done(_) => Ok(done),
        }
    }

    fn start(&mut self) -> Result<SessionState> {
        let ready = input::confirm(
            &mut self.input,
            &mut self.output,
            "Select from recent history commands to build a script?",
        )?;
        match ready {
            Some(true) => {}
            Some(false) => return Ok(SessionState::Done(Outcome::Declined)),
            None => return Ok(SessionState::Done(Outcome::Cancelled)),
        }

        let commands = self.source.fetch_recent_commands()?;
        debug!("Fetched {} history commands", commands.len());

        if commands.is_empty() {
            writeln!(self.output, "No history commands were found.").map_err(Error::Stdio)?;
            return Ok(SessionState::Done(Outcome::NoHistory));
        }

        display(&mut self.output, &commands)?;
        Ok(SessionState::Selecting { commands })
    }

    fn select(&mut self, commands: Vec<String>) -> Result<SessionState> {
        let Some(selection) = input::prompt_selection(&mut self.input, &mut self.output)? else {
            return Ok(SessionState::Done(Outcome::Cancelled));
        };

        render_with_highlight(&mut self.output, &selection, &commands)?;

        let (_, out_of_range) = selection.split_by_range(commands.len());
        warn_out_of_range(&mut self.output, &out_of_range)?;

        match input::confirm_script_ready(&mut self.input, &mut self.output)? {
            Some(ReadyChoice::Yes) => Ok(SessionState::AwaitingScriptName {
                commands,
                selection,
            }),
            Some(ReadyChoice::ChangeSelection) => Ok(SessionState::Selecting { commands }),
            Some(ReadyChoice::No) | None => Ok(SessionState::Done(Outcome::Cancelled)),
        }
    }

    fn emit(&mut self, commands: &[String], selection: &SelectionSet) -> Result<SessionState> {
        let Some(name) = input::prompt_script_name(&mut self.input, &mut self.output)? else {
            return Ok(SessionState::Done(Outcome::Cancelled));
        };

        if self.dry_run {
            let path = self.emitter.script_path(&name);
            let script = self.emitter.render_script(selection, commands);
            writeln!(
                self.output,
                "Dry run is specified, not writing `{}`:",
                path.display()
            )
            .map_err(Error::Stdio)?;
            write!(self.output, "{script}").map_err(Error::Stdio)?;
            return Ok(SessionState::Done(Outcome::Printed(path)));
        }

        writeln!(self.output, "Creating script {name}").map_err(Error::Stdio)?;
        let path = self.emitter.write_script(&name, selection, commands)?;
        writeln!(self.output, "Created script `{}`", path.display()).map_err(Error::Stdio)?;

        Ok(SessionState::Done(Outcome::Written(path)))
    }
}

fn state_name(state: &SessionState) -> &'static str {
    match state {
        SessionState::AwaitingStart => "AwaitingStart",
        SessionState::Selecting { .. } => "Selecting",
        SessionState::AwaitingScriptName { .. } => "AwaitingScriptName",
        SessionState::Done(_) => "Done",
    }
}
