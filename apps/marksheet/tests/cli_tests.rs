//! Integration tests for the Marksheet session runner.
//!
//! Uses tempfile for testing script-file sessions.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use marksheet::cli::{run_script, run_session};
use marksheet::config::{OutputFormat, SessionConfig};
use marksheet::error::CliError;
use marksheet_core::{Division, FormMode, ValidationError};
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a script file with the given commands.
fn create_script(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("session.txt");
    std::fs::write(&path, content).unwrap();
    path
}

fn quiet() -> SessionConfig {
    SessionConfig {
        quiet: true,
        ..SessionConfig::default()
    }
}

/// Run commands from a string and return the final state and output.
fn run(config: SessionConfig, commands: &str) -> (marksheet_core::AppState, String) {
    let mut out = Vec::new();
    let state = run_session(config, Cursor::new(commands.to_string()), &mut out).unwrap();
    (state, String::from_utf8(out).unwrap())
}

const THREE_STUDENTS: &str = "\
name Ajeet Yadav
age 21
marks 80 70 90 60 100
submit
name Meera
age 19
marks 40 40 40 40 40
submit
name Ravi Kumar
age 22
marks 10 10 10 10 10
submit
";

// =============================================================================
// SUBMIT TESTS
// =============================================================================

#[test]
fn test_submit_adds_graded_records() {
    let (state, output) = run(quiet(), THREE_STUDENTS);

    assert_eq!(state.store().len(), 3);
    let divisions: Vec<_> = state.store().iter().map(|r| r.division()).collect();
    assert_eq!(
        divisions,
        vec![
            Division::FirstDivision,
            Division::ThirdDivision,
            Division::Fail
        ]
    );
    assert_eq!(output.matches("Record added.").count(), 3);
}

#[test]
fn test_invalid_submit_reports_first_error() {
    let (state, output) = run(quiet(), "name Asha 2\nage 0\nmarks 1 1 1 1 1\nsubmit\n");

    assert!(state.store().is_empty());
    assert_eq!(state.error(), Some(ValidationError::InvalidName));
    assert!(output.contains("Error: Name should only contain letters and spaces."));
}

#[test]
fn test_fractional_marks_are_graded() {
    let script = "\
name Asha
age 20
marks 59.99 59.99 59.99 59.99 59.99
submit
name Bilal
age 21
marks 32.99 32.99 32.99 32.99 32.99
submit
";
    let (state, output) = run(quiet(), script);

    assert_eq!(output.matches("Record added.").count(), 2);
    let asha = state.store().get(0).unwrap();
    assert_eq!(asha.percentage().to_string(), "59.99");
    assert_eq!(asha.division(), Division::SecondDivision);
    let bilal = state.store().get(1).unwrap();
    assert_eq!(bilal.percentage().to_string(), "32.99");
    assert_eq!(bilal.division(), Division::Fail);
}

#[test]
fn test_invalid_age_and_marks_messages() {
    let (_, output) = run(quiet(), "name Asha\nage 10.5\nmarks 1 1 1 1 1\nsubmit\n");
    assert!(output.contains("Age should be a positive integer between 1 and 100."));

    let (_, output) = run(quiet(), "name Asha\nage 10\nmarks 1 1 1 1 101\nsubmit\n");
    assert!(output.contains("All marks must be between 0 and 100."));
}

// =============================================================================
// PREVIEW TESTS
// =============================================================================

#[test]
fn test_preview_printed_once_marks_complete() {
    let (_, output) = run(
        SessionConfig::default(),
        "mark 1 80\nmark 2 70\nmark 3 90\nmark 4 60\nmark 5 100\n",
    );

    assert_eq!(output.matches("Preview:").count(), 1);
    assert!(output.contains("Percentage 80.00%"));
    assert!(output.contains("[+] First Division"));
}

// =============================================================================
// EDIT / DELETE TESTS
// =============================================================================

#[test]
fn test_edit_replaces_record_in_place() {
    let script = format!("{THREE_STUDENTS}edit 2\nmarks 90 90 90 90 90\nupdate\n");
    let (state, output) = run(quiet(), &script);

    assert_eq!(state.store().len(), 3);
    let meera = state.store().get(1).unwrap();
    assert_eq!(meera.name(), "Meera");
    assert_eq!(meera.percentage().to_string(), "90.00");
    assert_eq!(meera.division(), Division::FirstDivision);
    assert_eq!(state.mode(), FormMode::Idle);
    assert!(output.contains("Record updated."));
}

#[test]
fn test_clear_cancels_edit() {
    let script = format!("{THREE_STUDENTS}edit 1\nclear\n");
    let (state, output) = run(quiet(), &script);

    assert_eq!(state.mode(), FormMode::Idle);
    assert!(state.fields().is_blank());
    assert!(output.contains("Form cleared."));
}

#[test]
fn test_delete_on_filtered_view_targets_visible_row() {
    // Row 1 of the Fail view is Ravi, the third record in the store.
    let script = format!("{THREE_STUDENTS}division fail\ndelete 1\ndivision all\n");
    let (state, _) = run(quiet(), &script);

    let names: Vec<_> = state.store().iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["Ajeet Yadav", "Meera"]);
}

#[test]
fn test_division_filter_accepts_joined_names() {
    let script =
        format!("{THREE_STUDENTS}division FirstDivision\ndelete 1\ndivision AllDivisions\n");
    let (state, output) = run(quiet(), &script);

    assert!(!output.contains("unknown division"));
    let names: Vec<_> = state.store().iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["Meera", "Ravi Kumar"]);
}

#[test]
fn test_edit_on_searched_view_targets_visible_row() {
    let script = format!("{THREE_STUDENTS}search ravi\nedit 1\nage 30\nupdate\n");
    let (state, _) = run(quiet(), &script);

    assert_eq!(state.store().get(2).map(|r| r.age()), Some(30));
    assert_eq!(state.store().get(0).map(|r| r.age()), Some(21));
}

#[test]
fn test_delete_unknown_row_keeps_store() {
    let script = format!("{THREE_STUDENTS}delete 9\n");
    let (state, output) = run(quiet(), &script);

    assert_eq!(state.store().len(), 3);
    assert!(output.contains("row 9 is not in the current view (3 rows shown)"));
}

// =============================================================================
// VIEW TESTS
// =============================================================================

#[test]
fn test_show_text_table() {
    let script = format!("{THREE_STUDENTS}search a\nshow\n");
    let (_, output) = run(quiet(), &script);

    assert!(output.contains("Student Records"));
    assert!(output.contains("Ajeet Yadav"));
    assert!(output.contains("Ravi Kumar"));
    assert!(output.contains("[Submit]"));
}

#[test]
fn test_show_empty_view() {
    let script = format!("{THREE_STUDENTS}search zz\nshow\n");
    let (_, output) = run(quiet(), &script);
    assert!(output.contains("No matching records found."));
}

#[test]
fn test_show_json_mode() {
    let config = SessionConfig {
        format: OutputFormat::Json,
        ..quiet()
    };
    let script = format!("{THREE_STUDENTS}division third\nshow\n");
    let (_, output) = run(config, &script);

    let start = output.find('{').unwrap();
    let value: serde_json::Value = serde_json::from_str(&output[start..]).unwrap();
    assert_eq!(value["total_records"], 3);
    assert_eq!(value["rows"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["rows"][0]["name"], "Meera");
    assert_eq!(value["rows"][0]["index"], 1);
    assert_eq!(value["rows"][0]["percentage"], "40.00");
}

// =============================================================================
// SESSION CONTROL TESTS
// =============================================================================

#[test]
fn test_quit_stops_reading() {
    let (state, _) = run(quiet(), "name Asha\nage 20\nmarks 5 5 5 5 5\nquit\nsubmit\n");
    assert!(state.store().is_empty());
}

#[test]
fn test_unknown_command_does_not_end_session() {
    let (state, output) = run(quiet(), "launch\nname Asha\nage 20\nmarks 5 5 5 5 5\nsubmit\n");

    assert!(output.contains("unknown command `launch`"));
    assert_eq!(state.store().len(), 1);
}

#[test]
fn test_prompt_only_when_interactive() {
    let (_, interactive) = run(SessionConfig::default(), "help\n");
    assert!(interactive.contains("marksheet> "));
    assert!(interactive.contains("Commands:"));

    let (_, silent) = run(quiet(), "help\n");
    assert!(!silent.contains("marksheet> "));
}

#[test]
fn test_eof_closes_prompt_line() {
    let (_, output) = run(SessionConfig::default(), "name Asha\n");
    assert!(output.ends_with("marksheet> \n"));

    let (_, empty) = run(SessionConfig::default(), "");
    assert!(empty.ends_with('\n'));
    assert!(!empty.ends_with("marksheet> "));
}

// =============================================================================
// SCRIPT FILE TESTS
// =============================================================================

#[test]
fn test_run_script_file() {
    let temp = create_temp_dir();
    let path = create_script(&temp, &format!("# roster\n{THREE_STUDENTS}"));

    let config = SessionConfig {
        script: Some(path.clone()),
        ..SessionConfig::default()
    };
    let mut out = Vec::new();
    let state = run_script(config, &path, &mut out).unwrap();

    assert_eq!(state.store().len(), 3);
    let output = String::from_utf8(out).unwrap();
    assert!(!output.contains("marksheet> "));
}

#[test]
fn test_run_missing_script_fails() {
    let temp = create_temp_dir();
    let path = temp.path().join("missing.txt");

    let mut out = Vec::new();
    let result = run_script(SessionConfig::default(), &path, &mut out);
    assert!(matches!(result, Err(CliError::Script { .. })));
}
