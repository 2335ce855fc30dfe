//! # Form State Machine
//!
//! The whole session state as one explicit value, plus a pure transition
//! function over user actions.
//!
//! ```text
//!   Idle ──submit(valid)──► Idle            (record appended)
//!   Idle ──edit(i)────────► Editing(i)      (fields loaded from record i)
//!   Editing(i) ──submit(valid)──► Idle      (record i replaced)
//!   Editing(i) ──clear──────────► Idle
//!   any ──submit(invalid)──► same state, error message set
//! ```
//!
//! The live preview is not stored. It is recomputed from the mark fields
//! whenever it is asked for.

use crate::error::{FormError, StoreError, ValidationError};
use crate::filter::{DivisionFilter, FilteredRow, RecordFilter};
use crate::grade::{self, GradeResult};
use crate::primitives::MARK_COUNT;
use crate::record::StudentRecord;
use crate::store::RecordStore;
use crate::validator;

// =============================================================================
// FORM FIELDS
// =============================================================================

/// Raw text currently typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub age: String,
    pub marks: [String; MARK_COUNT],
}

impl FormFields {
    /// Fields pre-filled from an existing record, as the edit flow loads them.
    #[must_use]
    pub fn from_record(record: &StudentRecord) -> Self {
        let marks = *record.marks().as_array();
        Self {
            name: record.name().to_string(),
            age: record.age().to_string(),
            marks: marks.map(|m| m.to_string()),
        }
    }

    /// True when nothing has been typed.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.age.is_empty() && self.marks.iter().all(String::is_empty)
    }
}

/// Whether a submit appends or replaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    /// Editing the record at this store index.
    Editing(usize),
}

impl FormMode {
    /// Label of the submit button in this mode.
    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Idle => "Submit",
            FormMode::Editing(_) => "Update",
        }
    }

    #[must_use]
    pub fn editing_index(self) -> Option<usize> {
        match self {
            FormMode::Idle => None,
            FormMode::Editing(index) => Some(index),
        }
    }
}

// =============================================================================
// ACTIONS AND OUTCOMES
// =============================================================================

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetName(String),
    SetAge(String),
    /// Set one mark field; `field` is zero-based.
    SetMark { field: usize, value: String },
    SetMarks([String; MARK_COUNT]),
    Submit,
    Clear,
    /// Load the record at this store index into the form.
    Edit(usize),
    /// Delete the record at this store index.
    Delete(usize),
    SetNameFilter(String),
    SetDivisionFilter(DivisionFilter),
}

/// What an action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    FieldUpdated,
    FilterUpdated,
    Added { index: usize },
    Replaced { index: usize },
    Removed { index: usize },
    EditStarted { index: usize },
    Cleared,
    /// The action was refused. The store is unchanged.
    Rejected(FormError),
}

/// Result of applying an action: the next state and what happened.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub outcome: Outcome,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Everything the session knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    fields: FormFields,
    mode: FormMode,
    store: RecordStore,
    filter: RecordFilter,
    error: Option<ValidationError>,
}

impl AppState {
    /// Fresh session with an empty form and an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    #[must_use]
    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    /// Message from the last rejected submit, if it has not been cleared.
    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Live preview for the current mark fields.
    #[must_use]
    pub fn preview(&self) -> Option<GradeResult> {
        grade::preview(&self.fields.marks)
    }

    /// The filtered view shown in the table.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<FilteredRow<'_>> {
        self.store.filter(&self.filter)
    }

    /// Store index of the record shown at `position` (zero-based) in the
    /// filtered view.
    #[must_use]
    pub fn row_index(&self, position: usize) -> Option<usize> {
        self.visible_rows().get(position).map(|row| row.index)
    }

    /// Apply one action and return the next state.
    #[must_use]
    pub fn apply(mut self, action: Action) -> Transition {
        let outcome = match action {
            Action::SetName(name) => {
                self.fields.name = name;
                Outcome::FieldUpdated
            }
            Action::SetAge(age) => {
                self.fields.age = age;
                Outcome::FieldUpdated
            }
            Action::SetMark { field, value } => match self.fields.marks.get_mut(field) {
                Some(slot) => {
                    *slot = value;
                    Outcome::FieldUpdated
                }
                None => Outcome::Rejected(FormError::NoSuchMarkField(field)),
            },
            Action::SetMarks(marks) => {
                self.fields.marks = marks;
                Outcome::FieldUpdated
            }
            Action::Submit => self.submit(),
            Action::Clear => {
                self.reset_form();
                Outcome::Cleared
            }
            Action::Edit(index) => self.start_edit(index),
            Action::Delete(index) => self.delete(index),
            Action::SetNameFilter(pattern) => {
                self.filter = self.filter.with_name_pattern(pattern);
                Outcome::FilterUpdated
            }
            Action::SetDivisionFilter(division) => {
                self.filter = self.filter.with_division(division);
                Outcome::FilterUpdated
            }
        };
        Transition {
            state: self,
            outcome,
        }
    }

    fn submit(&mut self) -> Outcome {
        let fields = &self.fields;
        let input = match validator::validate(&fields.name, &fields.age, &fields.marks) {
            Ok(input) => input,
            Err(err) => {
                self.error = Some(err);
                return Outcome::Rejected(err.into());
            }
        };
        let record = StudentRecord::from_input(input);

        let outcome = match self.mode {
            FormMode::Idle => Outcome::Added {
                index: self.store.add(record),
            },
            FormMode::Editing(index) => match self.store.replace_at(index, record) {
                Ok(_) => Outcome::Replaced { index },
                Err(err) => return Outcome::Rejected(err.into()),
            },
        };
        self.reset_form();
        outcome
    }

    fn start_edit(&mut self, index: usize) -> Outcome {
        let Some(record) = self.store.get(index) else {
            let len = self.store.len();
            return Outcome::Rejected(StoreError::IndexOutOfRange { index, len }.into());
        };
        self.fields = FormFields::from_record(record);
        self.mode = FormMode::Editing(index);
        self.error = None;
        Outcome::EditStarted { index }
    }

    fn delete(&mut self, index: usize) -> Outcome {
        if let Err(err) = self.store.remove_at(index) {
            return Outcome::Rejected(err.into());
        }
        // Keep the edit target pointing at the same record.
        self.mode = match self.mode {
            FormMode::Editing(editing) if editing == index => FormMode::Idle,
            FormMode::Editing(editing) if editing > index => {
                FormMode::Editing(editing.saturating_sub(1))
            }
            mode => mode,
        };
        Outcome::Removed { index }
    }

    fn reset_form(&mut self) {
        self.fields = FormFields::default();
        self.mode = FormMode::Idle;
        self.error = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================
