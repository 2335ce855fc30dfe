//! # Validator
//!
//! Checks the raw text of a candidate record.
//!
//! Validation is pure: it takes the strings exactly as typed and either
//! returns typed values or the first rule that failed. Rules run in a fixed
//! order (name, age, marks).

use crate::error::ValidationError;
use crate::grade::{Mark, Marks};
use crate::primitives::{MARK_COUNT, MAX_AGE, MIN_AGE};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// Input that passed every rule, ready to become a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    name: String,
    age: u8,
    marks: Marks,
}

impl ValidatedInput {
    /// Trimmed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> u8 {
        self.age
    }

    pub(crate) fn into_parts(self) -> (String, u8, Marks) {
        (self.name, self.age, self.marks)
    }
}

/// Validate a full submission.
pub fn validate<S: AsRef<str>>(
    raw_name: &str,
    raw_age: &str,
    raw_marks: &[S; MARK_COUNT],
) -> Result<ValidatedInput, ValidationError> {
    let name = validate_name(raw_name)?;
    let age = validate_age(raw_age)?;
    let marks = parse_marks(raw_marks)?;
    Ok(ValidatedInput { name, age, marks })
}

/// Name must be ASCII letters and spaces once surrounding whitespace is
/// trimmed, and must not be empty.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let well_formed = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == ' ');
    if well_formed {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidName)
    }
}

/// Age must be a whole number from 1 to 100.
pub fn validate_age(raw: &str) -> Result<u8, ValidationError> {
    parse_number(raw)
        .filter(|age| age.fract().is_zero())
        .and_then(|age| age.to_u8())
        .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
        .ok_or(ValidationError::InvalidAge)
}

/// All five marks must be numbers from 0 to 100. Fractions are allowed.
pub fn parse_marks<S: AsRef<str>>(raw: &[S; MARK_COUNT]) -> Result<Marks, ValidationError> {
    let mut marks = Vec::with_capacity(MARK_COUNT);
    for field in raw {
        let mark = parse_number(field.as_ref()).and_then(Mark::new);
        marks.push(mark.ok_or(ValidationError::InvalidMarks)?);
    }
    let marks: [Mark; MARK_COUNT] = marks
        .try_into()
        .map_err(|_| ValidationError::InvalidMarks)?;
    Ok(Marks::new(marks))
}

/// Parse a plain decimal number, tolerating surrounding whitespace and a
/// leading sign (`"21"`, `" 80.5 "`, `"+7"`, `"21."`).
fn parse_number(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !digits(integer) || !digits(fraction) {
        return None;
    }

    let magnitude = if fraction.is_empty() {
        Decimal::from_str(integer)
    } else {
        Decimal::from_str(&format!("{integer}.{fraction}"))
    }
    .ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// TESTS
// =============================================================================
