//! Integration tests for history-cuts-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use history_cuts_core::{
    error::Error,
    history::{FileHistorySource, HistorySource, ShellHistorySource},
    script::ScriptEmitter,
    selection::{read_selection, SelectionSet},
};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn example_commands() -> Vec<String> {
    vec![
        "ls -la".to_string(),
        "cd /tmp".to_string(),
        "echo hi".to_string(),
    ]
}

#[cfg(unix)]
fn mode_of(path: &std::path::Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).unwrap().permissions().mode()
}

/// Test writing a script from a parsed selection
#[test]
fn test_selection_to_script_workflow() {
    let temp_dir = tempfile::tempdir().unwrap();
    let emitter = ScriptEmitter::new(temp_dir.path(), "#!/bin/bash");

    let selection = read_selection("0,2").unwrap();
    let path = emitter
        .write_script("example", &selection, &example_commands())
        .unwrap();

    assert_eq!(path, temp_dir.path().join("example.sh"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "#!/bin/bash\nls -la\necho hi\n"
    );

    #[cfg(unix)]
    assert_eq!(mode_of(&path) & 0o100, 0o100);
}

/// Test that an empty selection still produces an executable script
#[test]
fn test_empty_selection_writes_shebang_only() {
    let temp_dir = tempfile::tempdir().unwrap();
    let emitter = ScriptEmitter::new(temp_dir.path(), "#!/bin/bash");

    let path = emitter
        .write_script("empty", &SelectionSet::new(), &example_commands())
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "#!/bin/bash\n");

    #[cfg(unix)]
    assert_eq!(mode_of(&path) & 0o100, 0o100);
}

/// Test that out-of-range indexes emit nothing and in-range ones keep their order
#[test]
fn test_out_of_range_selection_is_skipped() {
    let temp_dir = tempfile::tempdir().unwrap();
    let emitter = ScriptEmitter::new(temp_dir.path(), "#!/bin/bash");
    let commands = example_commands();

    let selection = read_selection("7, 1, 3, 0").unwrap();
    let path = emitter.write_script("partial", &selection, &commands).unwrap();
    let contents = fs::read_to_string(&path).unwrap();

    let (in_range, _) = selection.split_by_range(commands.len());
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), in_range.len() + 1);
    assert_eq!(lines, vec!["#!/bin/bash", "ls -la", "cd /tmp"]);
}

/// Test that writing twice gives identical content and keeps the execute bit
#[test]
fn test_write_script_is_idempotent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let emitter = ScriptEmitter::new(temp_dir.path(), "#!/bin/bash");
    let selection = SelectionSet::from_iter([1, 2]);

    let first_path = emitter
        .write_script("again", &selection, &example_commands())
        .unwrap();
    let first = fs::read(&first_path).unwrap();

    let second_path = emitter
        .write_script("again", &selection, &example_commands())
        .unwrap();
    let second = fs::read(&second_path).unwrap();

    assert_eq!(first_path, second_path);
    assert_eq!(first, second);

    #[cfg(unix)]
    assert_eq!(mode_of(&second_path) & 0o100, 0o100);
}

/// Test that a shorter script overwrites a longer one completely
#[test]
fn test_write_script_truncates_existing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let emitter = ScriptEmitter::new(temp_dir.path(), "#!/bin/bash");

    emitter
        .write_script("shrink", &SelectionSet::from_iter([0, 1, 2]), &example_commands())
        .unwrap();
    let path = emitter
        .write_script("shrink", &SelectionSet::from_iter([1]), &example_commands())
        .unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "#!/bin/bash\ncd /tmp\n");
}

/// Test that only the owner-execute bit is added to the existing mode
#[cfg(unix)]
#[test]
fn test_write_script_only_adds_owner_execute() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempfile::tempdir().unwrap();
    let emitter = ScriptEmitter::new(temp_dir.path(), "#!/bin/bash");
    let path = emitter.script_path("modes");

    fs::write(&path, "").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    emitter
        .write_script("modes", &SelectionSet::from_iter([0]), &example_commands())
        .unwrap();

    assert_eq!(mode_of(&path) & 0o777, 0o740);
}

/// Test that a missing output directory is reported as an IO error
#[test]
fn test_write_script_missing_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let emitter = ScriptEmitter::new(temp_dir.path().join("missing"), "#!/bin/bash");

    let result = emitter.write_script("nowhere", &SelectionSet::new(), &example_commands());

    match result {
        Err(Error::Io { path, .. }) => assert!(path.ends_with("nowhere.sh")),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

/// Test reading a bash history file with timestamp markers
#[test]
fn test_file_history_workflow() {
    let history = "#1700000000\nls -la\n#1700000005\ncd /tmp\n\n  echo hi  \n";

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{history}").unwrap();

    let source = FileHistorySource::new(temp_file.path(), 100);
    let commands = source.fetch_recent_commands().unwrap();

    assert_eq!(commands, example_commands());
}

/// Test that a history file keeps only the most recent commands
#[test]
fn test_file_history_limit() {
    let mut temp_file = NamedTempFile::new().unwrap();
    for i in 0..150 {
        writeln!(temp_file, "echo {i}").unwrap();
    }

    let source = FileHistorySource::new(temp_file.path(), 100);
    let commands = source.fetch_recent_commands().unwrap();

    assert_eq!(commands.len(), 100);
    assert_eq!(commands[0], "echo 50");
    assert_eq!(commands[99], "echo 149");
}

/// Test that a missing history file is reported with its path
#[test]
fn test_file_history_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("no_history");

    let result = FileHistorySource::new(&missing, 100).fetch_recent_commands();

    match result {
        Err(Error::Io {
            file_description, ..
        }) => assert_eq!(file_description, "history"),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

/// Test that non-UTF-8 bytes in a history file are replaced rather than fatal
#[test]
fn test_file_history_invalid_utf8() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"ls -la\necho caf\xe9\ncd /tmp\n").unwrap();

    let source = FileHistorySource::new(temp_file.path(), 100);
    let commands = source.fetch_recent_commands().unwrap();

    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], "ls -la");
    assert_eq!(commands[1], "echo caf\u{fffd}");
    assert_eq!(commands[2], "cd /tmp");
}

/// Test that a timestamp format in the environment does not reach the history shell
#[cfg(unix)]
#[test]
fn test_shell_history_ignores_timestamp_format() {
    std::env::set_var("HISTTIMEFORMAT", "%F %T ");

    let source = ShellHistorySource::new("sh", 100)
        .with_script("echo \"    1  ${HISTTIMEFORMAT:-}ls -la\"");
    let commands = source.fetch_recent_commands().unwrap();

    assert_eq!(commands, vec!["ls -la"]);
}

/// Test the shell source against `sh` printing history-formatted lines
#[cfg(unix)]
#[test]
fn test_shell_history_parses_subprocess_output() {
    let source = ShellHistorySource::new("sh", 2)
        .with_script("printf '    1  ls -la\\n    2  cd /tmp\\n    3  echo hi\\n'");

    let commands = source.fetch_recent_commands().unwrap();

    assert_eq!(commands, vec!["cd /tmp", "echo hi"]);
}

/// Test that a non-zero exit from the shell is an error
#[cfg(unix)]
#[test]
fn test_shell_history_non_zero_exit() {
    let source = ShellHistorySource::new("sh", 100).with_script("echo broken >&2; exit 3");

    let result = source.fetch_recent_commands();

    match result {
        Err(Error::SubProcessExit { shell, stderr, .. }) => {
            assert_eq!(shell, "sh");
            assert!(stderr.contains("broken"));
        }
        other => panic!("Expected SubProcessExit, got {other:?}"),
    }
}

/// Test that unparsable shell output is an error
#[cfg(unix)]
#[test]
fn test_shell_history_unparsable_output() {
    let source = ShellHistorySource::new("sh", 100).with_script("echo 'not history'");

    let result = source.fetch_recent_commands();

    assert!(matches!(result, Err(Error::HistoryLine { .. })));
}

/// Test that a shell which cannot be launched is an error
#[test]
fn test_shell_history_missing_shell() {
    let source = ShellHistorySource::new("history-cuts-no-such-shell", 100);

    let result = source.fetch_recent_commands();

    assert!(matches!(result, Err(Error::SubProcess(_))));
}
