//! # Grade Calculator
//!
//! Turns five subject marks into a percentage and a division.
//!
//! Marks and percentages are exact decimals (`rust_decimal`), so `80.5` or
//! `59.99` never pass through a float. The percentage is `total / 500 * 100`
//! rounded half-up to two decimals, and the division is read off that
//! rounded value.

use crate::primitives::{
    FIRST_DIVISION_MIN, MARK_COUNT, MAX_MARK, MAX_TOTAL, PERCENTAGE_SCALE, SECOND_DIVISION_MIN,
    THIRD_DIVISION_MIN,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// MARKS
// =============================================================================

/// One subject mark, guaranteed to be within `0..=100`.
///
/// Stored without trailing zeros, so `"80.50"` and `"80.5"` are the same mark
/// and both display as `80.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark(Decimal);

impl Mark {
    /// Returns `None` if `value` is negative or above the maximum.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        (value >= Decimal::ZERO && value <= MAX_MARK).then(|| Self(value.normalize()))
    }

    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

/// Whole marks serialize as JSON integers, fractional ones as floats.
impl Serialize for Mark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_u64().filter(|_| self.0.fract().is_zero()) {
            Some(whole) => serializer.serialize_u64(whole),
            None => serializer.serialize_f64(self.0.to_f64().unwrap_or_default()),
        }
    }
}

/// Five subject marks in subject order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Marks([Mark; MARK_COUNT]);

impl Marks {
    #[must_use]
    pub const fn new(marks: [Mark; MARK_COUNT]) -> Self {
        Self(marks)
    }

    /// The individual marks in subject order.
    #[must_use]
    pub fn as_array(&self) -> &[Mark; MARK_COUNT] {
        &self.0
    }

    /// Sum of all marks.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.0.iter().map(|m| m.value()).sum()
    }
}

// =============================================================================
// PERCENTAGE
// =============================================================================

/// A percentage rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percentage(Decimal);

impl Percentage {
    /// Create from a raw hundredths value (`4550` is `45.50%`).
    #[must_use]
    pub fn from_hundredths(hundredths: u32) -> Self {
        Self(Decimal::new(i64::from(hundredths), PERCENTAGE_SCALE))
    }

    /// Percentage of `total` out of the maximum possible total, rounded
    /// half-up to two decimals.
    #[must_use]
    pub fn from_total(total: Decimal) -> Self {
        let exact = total * Decimal::ONE_HUNDRED / MAX_TOTAL;
        let mut rounded =
            exact.round_dp_with_strategy(PERCENTAGE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(PERCENTAGE_SCALE);
        Self(rounded)
    }

    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// DIVISION
// =============================================================================

/// Categorical outcome derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Division {
    #[serde(rename = "First Division")]
    FirstDivision,
    #[serde(rename = "Second Division")]
    SecondDivision,
    #[serde(rename = "Third Division")]
    ThirdDivision,
    #[serde(rename = "Fail")]
    Fail,
}

/// Visual tone used when a division is shown as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Primary,
    Warning,
    Danger,
}

impl Division {
    /// All divisions from best to worst.
    pub const ALL: [Division; 4] = [
        Division::FirstDivision,
        Division::SecondDivision,
        Division::ThirdDivision,
        Division::Fail,
    ];

    /// Classify a percentage. Thresholds are checked high to low.
    #[must_use]
    pub fn from_percentage(percentage: Percentage) -> Self {
        match percentage.value() {
            p if p >= FIRST_DIVISION_MIN => Division::FirstDivision,
            p if p >= SECOND_DIVISION_MIN => Division::SecondDivision,
            p if p >= THIRD_DIVISION_MIN => Division::ThirdDivision,
            _ => Division::Fail,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Division::FirstDivision => "First Division",
            Division::SecondDivision => "Second Division",
            Division::ThirdDivision => "Third Division",
            Division::Fail => "Fail",
        }
    }

    #[must_use]
    pub fn badge_tone(self) -> BadgeTone {
        match self {
            Division::FirstDivision => BadgeTone::Success,
            Division::SecondDivision => BadgeTone::Primary,
            Division::ThirdDivision => BadgeTone::Warning,
            Division::Fail => BadgeTone::Danger,
        }
    }

    /// Whether this division is a pass.
    #[must_use]
    pub fn is_pass(self) -> bool {
        self != Division::Fail
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a division name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown division: {0}")]
pub struct ParseDivisionError(pub String);

impl FromStr for Division {
    type Err = ParseDivisionError;

    /// Case and whitespace are ignored, so `First Division`,
    /// `FirstDivision` and `first division` are the same name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match compact.as_str() {
            "firstdivision" | "first" | "1" => Ok(Division::FirstDivision),
            "seconddivision" | "second" | "2" => Ok(Division::SecondDivision),
            "thirddivision" | "third" | "3" => Ok(Division::ThirdDivision),
            "fail" => Ok(Division::Fail),
            _ => Err(ParseDivisionError(s.trim().to_string())),
        }
    }
}

// =============================================================================
// CALCULATION
// =============================================================================

/// Output of the grade calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeResult {
    pub total: Decimal,
    pub percentage: Percentage,
    pub division: Division,
}

/// Compute total, percentage and division for a mark set.
#[must_use]
pub fn compute(marks: &Marks) -> GradeResult {
    let total = marks.total();
    let percentage = Percentage::from_total(total);
    GradeResult {
        total,
        percentage,
        division: Division::from_percentage(percentage),
    }
}

/// Best-effort live preview over raw mark fields.
///
/// Returns `None` while any field is empty, unparsable or out of range.
#[must_use]
pub fn preview<S: AsRef<str>>(raw_marks: &[S; MARK_COUNT]) -> Option<GradeResult> {
    crate::validator::parse_marks(raw_marks)
        .ok()
        .map(|marks| compute(&marks))
}

// =============================================================================
// TESTS
// =============================================================================
