use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use itertools::Itertools;
use log::warn;

use history_cuts_core::error::{Error, Result};
use history_cuts_core::selection::SelectionSet;

fn format_command(index: usize, command: &str) -> String {
    format!("{index}: {command}")
}

/// Prints every command as `<index>: <command>`, in list order.
pub fn display<W: Write>(output: &mut W, commands: &[String]) -> Result<()> {
    for (index, command) in commands.iter().enumerate() {
        writeln!(output, "{}", format_command(index, command)).map_err(Error::Stdio)?;
    }

    output.flush().map_err(Error::Stdio)
}

/// Prints the same listing as [`display`], with selected lines in bold green.
pub fn render_with_highlight<W: Write>(
    output: &mut W,
    selection: &SelectionSet,
    commands: &[String],
) -> Result<()> {
    for (index, command) in commands.iter().enumerate() {
        let line = format_command(index, command);
        if selection.contains(index) {
            queue!(
                output,
                SetForegroundColor(Color::Green),
                SetAttribute(Attribute::Bold),
                Print(line),
                SetAttribute(Attribute::Reset),
                ResetColor,
                Print("\n")
            )
            .map_err(Error::Stdio)?;
        } else {
            queue!(output, Print(line), Print("\n")).map_err(Error::Stdio)?;
        }
    }

    output.flush().map_err(Error::Stdio)
}

/// Tells the operator which selected indexes have no command and will be
/// left out of the script.
pub fn warn_out_of_range<W: Write>(output: &mut W, out_of_range: &[usize]) -> Result<()> {
    if out_of_range.is_empty() {
        return Ok(());
    }

    let indexes = out_of_range.iter().join(", ");
    warn!("Selection contains out of range indexes: {}", indexes);

    queue!(
        output,
        SetForegroundColor(Color::Yellow),
        Print(format!(
            "No command for index {indexes}; it will be left out of the script."
        )),
        ResetColor,
        Print("\n")
    )
    .map_err(Error::Stdio)?;

    output.flush().map_err(Error::Stdio)
}
