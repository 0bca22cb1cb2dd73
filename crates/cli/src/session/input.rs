use std::io::{BufRead, Write};

use history_cuts_core::error::{Error, Result};
use history_cuts_core::selection::{read_selection, SelectionSet};

use super::types::ReadyChoice;

/// Prints `prompt` and reads one line, trimmed.
///
/// Returns `None` once the input is exhausted.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}").map_err(Error::Stdio)?;
    output.flush().map_err(Error::Stdio)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(Error::Stdio)?;
    if read == 0 {
        // End the prompt line so following output starts cleanly
        writeln!(output).map_err(Error::Stdio)?;
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Asks a yes/no question until answered with `y` or `n`.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<Option<bool>> {
    loop {
        let Some(answer) = prompt_line(input, output, &format!("{question} (y/n): "))? else {
            return Ok(None);
        };

        match answer.to_lowercase().as_str() {
            "y" => return Ok(Some(true)),
            "n" => return Ok(Some(false)),
            _ => {}
        }
    }
}

/// Confirms with the operator whether the script should be written
pub fn confirm_script_ready<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<ReadyChoice>> {
    loop {
        let Some(answer) = prompt_line(
            input,
            output,
            "Ready to output script? ([y]es/[n]o/[c]hange selection): ",
        )?
        else {
            return Ok(None);
        };

        match answer.to_lowercase().as_str() {
            "y" => return Ok(Some(ReadyChoice::Yes)),
            "n" => return Ok(Some(ReadyChoice::No)),
            "c" => return Ok(Some(ReadyChoice::ChangeSelection)),
            _ => {}
        }
    }
}

/// Reads a comma-separated selection, re-prompting after invalid tokens.
pub fn prompt_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<SelectionSet>> {
    loop {
        let Some(raw_input) = prompt_line(input, output, "Selected Commands: ")? else {
            return Ok(None);
        };

        match read_selection(&raw_input) {
            Ok(selection) => return Ok(Some(selection)),
            Err(e @ Error::InvalidSelection { .. }) => {
                writeln!(output, "{e}").map_err(Error::Stdio)?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Reads the script name. The name is used verbatim; only an empty name is
/// refused.
pub fn prompt_script_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    loop {
        let Some(name) = prompt_line(input, output, "Name the script: ")? else {
            return Ok(None);
        };

        if !name.is_empty() {
            return Ok(Some(name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run<'a, T>(
        input: &'a str,
        prompt: impl FnOnce(&mut Cursor<&'a [u8]>, &mut Vec<u8>) -> Result<T>,
    ) -> (T, String) {
        let mut input = Cursor::new(input.as_bytes());
        let mut output = Vec::new();
        let result = prompt(&mut input, &mut output).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_line_trims() {
        let (line, output) = run("  hello world \n", |i, o| prompt_line(i, o, "> "));
        assert_eq!(line, Some("hello world".to_string()));
        assert_eq!(output, "> ");
    }

    #[test]
    fn test_prompt_line_end_of_input() {
        let (line, _) = run("", |i, o| prompt_line(i, o, "> "));
        assert_eq!(line, None);
    }

    #[test]
    fn test_confirm_repeats_until_answered() {
        let (answer, output) = run("maybe\n\nY\n", |i, o| confirm(i, o, "Go?"));
        assert_eq!(answer, Some(true));
        assert_eq!(output.matches("Go? (y/n): ").count(), 3);
    }

    #[test]
    fn test_confirm_no() {
        let (answer, _) = run("n\n", |i, o| confirm(i, o, "Go?"));
        assert_eq!(answer, Some(false));
    }

    #[test]
    fn test_confirm_script_ready_choices() {
        let (yes, _) = run("y\n", confirm_script_ready);
        let (no, _) = run("N\n", confirm_script_ready);
        let (change, _) = run("x\nc\n", confirm_script_ready);

        assert_eq!(yes, Some(ReadyChoice::Yes));
        assert_eq!(no, Some(ReadyChoice::No));
        assert_eq!(change, Some(ReadyChoice::ChangeSelection));
    }

    #[test]
    fn test_prompt_selection_reprompts_on_invalid_token() {
        let (selection, output) = run("1,a\n1, 3,5\n", prompt_selection);

        assert_eq!(selection, Some(SelectionSet::from_iter([1, 3, 5])));
        assert!(output.contains("Invalid selection `a`"));
        assert_eq!(output.matches("Selected Commands: ").count(), 2);
    }

    #[test]
    fn test_prompt_selection_end_of_input() {
        let (selection, _) = run("oops\n", prompt_selection);
        assert_eq!(selection, None);
    }

    #[test]
    fn test_prompt_script_name_skips_empty() {
        let (name, output) = run("\n   \n../deploy me\n", prompt_script_name);
        assert_eq!(name, Some("../deploy me".to_string()));
        assert_eq!(output.matches("Name the script: ").count(), 3);
    }
}
