//! # Rendering
//!
//! Text and JSON views of the session state. Pure string building; the
//! shell decides where the output goes.

use marksheet_core::{
    AppState, BadgeTone, Division, DivisionFilter, FilteredRow, GradeResult, MARK_COUNT,
};
use serde::Serialize;

const RULE: &str = "────────────────────────────────────────";

/// Badge text for a division, marked by tone.
#[must_use]
pub fn badge(division: Division) -> String {
    let marker = match division.badge_tone() {
        BadgeTone::Success => '+',
        BadgeTone::Primary => '*',
        BadgeTone::Warning => '~',
        BadgeTone::Danger => '!',
    };
    format!("[{marker}] {division}")
}

/// One-line live preview, or `None` while the marks are incomplete.
#[must_use]
pub fn preview_line(preview: Option<GradeResult>) -> Option<String> {
    preview.map(|p| {
        format!(
            "Preview: Percentage {}% | Division {}",
            p.percentage,
            badge(p.division)
        )
    })
}

/// The form panel: fields, inline error, preview and the submit label.
#[must_use]
pub fn render_form(state: &AppState) -> String {
    let fields = state.fields();
    let mut out = String::new();

    out.push_str("Student Record\n");
    out.push_str(RULE);
    out.push('\n');
    if let Some(error) = state.error() {
        out.push_str(&format!("! {error}\n"));
    }
    out.push_str(&format!("Student Name : {}\n", fields.name));
    out.push_str(&format!("Age          : {}\n", fields.age));
    for (i, mark) in fields.marks.iter().enumerate() {
        out.push_str(&format!("Marks {}      : {}\n", i + 1, mark));
    }
    if let Some(line) = preview_line(state.preview()) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!("[{}] [Clear]\n", state.mode().submit_label()));
    out
}

/// The records table for the current filtered view.
#[must_use]
pub fn render_table(state: &AppState) -> String {
    let rows = state.visible_rows();
    let filter = state.filter();
    let mut out = String::new();

    out.push_str("Student Records\n");
    out.push_str(&format!(
        "Search: \"{}\" | {}",
        filter.name_pattern(),
        filter.division()
    ));
    if filter.is_active() {
        out.push_str(&format!(
            " (filtered: {} of {})",
            rows.len(),
            state.store().len()
        ));
    }
    out.push('\n');

    if rows.is_empty() {
        out.push_str("No matching records found.\n");
        return out;
    }

    let name_width = rows
        .iter()
        .map(|row| row.record.name().len())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut header = format!("{:>3}  {:<name_width$}  {:>3}", "#", "Name", "Age");
    for i in 1..=MARK_COUNT {
        header.push_str(&format!("  {:>5}", format!("M{i}")));
    }
    header.push_str(&format!("  {:>6}  Division", "%"));
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"─".repeat(header.chars().count() + 12));
    out.push('\n');

    for (position, row) in rows.iter().enumerate() {
        out.push_str(&render_row(position + 1, row, name_width));
        out.push('\n');
    }
    out.push_str(&format!("{} shown, {} passed\n", rows.len(), passed(&rows)));
    out
}

fn passed(rows: &[FilteredRow<'_>]) -> usize {
    rows.iter()
        .filter(|row| row.record.division().is_pass())
        .count()
}

fn render_row(number: usize, row: &FilteredRow<'_>, name_width: usize) -> String {
    let record = row.record;
    let mut line = format!(
        "{:>3}  {:<name_width$}  {:>3}",
        number,
        record.name(),
        record.age()
    );
    for mark in record.marks().as_array() {
        line.push_str(&format!("  {mark:>5}"));
    }
    line.push_str(&format!(
        "  {:>6}  {}",
        record.percentage().to_string(),
        badge(record.division())
    ));
    line
}

// =============================================================================
// JSON
// =============================================================================

#[derive(Serialize)]
struct FilterSnapshot<'a> {
    name: &'a str,
    division: String,
    active: bool,
}

#[derive(Serialize)]
struct ViewSnapshot<'a> {
    filter: FilterSnapshot<'a>,
    total_records: usize,
    passed: usize,
    rows: Vec<FilteredRow<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<GradeResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    editing_index: Option<usize>,
}

/// The filtered view as pretty JSON.
pub fn render_json(state: &AppState) -> Result<String, serde_json::Error> {
    let filter = state.filter();
    let division = match filter.division() {
        DivisionFilter::All => "All".to_string(),
        DivisionFilter::Only(division) => division.to_string(),
    };
    let rows = state.visible_rows();
    let snapshot = ViewSnapshot {
        filter: FilterSnapshot {
            name: filter.name_pattern(),
            division,
            active: filter.is_active(),
        },
        total_records: state.store().len(),
        passed: passed(&rows),
        rows,
        preview: state.preview(),
        error: state.error().map(|e| e.to_string()),
        editing_index: state.mode().editing_index(),
    };
    serde_json::to_string_pretty(&snapshot)
}
