//! # Marksheet Core
//!
//! The deterministic engine behind the student record sheet.
//!
//! ```text
//!   raw input ──► Validator ──► GradeCalculator ──► RecordStore
//!                                                      │
//!                              filtered view ◄─── RecordFilter
//! ```
//!
//! - [`validator`] checks raw name, age and mark text.
//! - [`grade`] turns marks into a percentage and a division.
//! - [`store`] keeps accepted records in order.
//! - [`filter`] projects the store by name and division.
//! - [`form`] ties them together as one explicit session state with a pure
//!   transition function.
//!
//! Nothing here performs I/O, and all grading arithmetic is exact decimal.

pub mod error;
pub mod filter;
pub mod form;
pub mod grade;
pub mod primitives;
pub mod record;
pub mod store;
pub mod validator;

pub use error::{FormError, StoreError, StoreResult, ValidationError};
pub use filter::{DivisionFilter, FilteredRow, RecordFilter, filter};
pub use form::{Action, AppState, FormFields, FormMode, Outcome, Transition};
pub use grade::{
    BadgeTone, Division, GradeResult, Mark, Marks, ParseDivisionError, Percentage, compute, preview,
};
pub use primitives::{MARK_COUNT, MAX_AGE, MAX_MARK, MIN_AGE};
pub use record::StudentRecord;
pub use store::RecordStore;
pub use validator::{ValidatedInput, validate};
