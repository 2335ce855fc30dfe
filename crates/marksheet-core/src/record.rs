//! # Student Record
//!
//! The immutable value held by the store. Percentage and division are
//! derived from the marks when the record is built and cannot be set any
//! other way.

use crate::grade::{self, Division, Marks, Percentage};
use crate::validator::ValidatedInput;
use serde::Serialize;

/// A graded student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    name: String,
    age: u8,
    marks: Marks,
    percentage: Percentage,
    division: Division,
}

impl StudentRecord {
    /// Grade validated input and freeze it into a record.
    #[must_use]
    pub fn from_input(input: ValidatedInput) -> Self {
        let (name, age, marks) = input.into_parts();
        let result = grade::compute(&marks);
        Self {
            name,
            age,
            marks,
            percentage: result.percentage,
            division: result.division,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> u8 {
        self.age
    }

    #[must_use]
    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    #[must_use]
    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    #[must_use]
    pub fn division(&self) -> Division {
        self.division
    }
}

impl From<ValidatedInput> for StudentRecord {
    fn from(input: ValidatedInput) -> Self {
        Self::from_input(input)
    }
}
