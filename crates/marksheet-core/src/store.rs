//! # Record Store
//!
//! Ordered, session-scoped storage for accepted records.
//!
//! Insertion order is preserved. Replacing keeps the position; removing
//! shifts every later record down by one. Index misuse is reported as
//! `StoreError`, never a panic.

use crate::error::{StoreError, StoreResult};
use crate::filter::{FilteredRow, RecordFilter};
use crate::record::StudentRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its index. Duplicates are allowed.
    pub fn add(&mut self, record: StudentRecord) -> usize {
        self.records.push(record);
        self.records.len().saturating_sub(1)
    }

    /// Replace the record at `index`, returning the previous value.
    pub fn replace_at(&mut self, index: usize, record: StudentRecord) -> StoreResult<StudentRecord> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, record))
    }

    /// Remove the record at `index`, returning it.
    pub fn remove_at(&mut self, index: usize) -> StoreResult<StudentRecord> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    /// Record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in store order.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    /// Filtered, non-owning view. Each row keeps its index into this store.
    #[must_use]
    pub fn filter(&self, filter: &RecordFilter) -> Vec<FilteredRow<'_>> {
        filter.apply(self)
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate;

    fn record(name: &str, marks: [&str; 5]) -> StudentRecord {
        StudentRecord::from_input(validate(name, "20", &marks).expect("valid record"))
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());

        assert_eq!(store.add(record("Asha", ["50"; 5])), 0);
        assert_eq!(store.add(record("Bilal", ["60"; 5])), 1);
        assert_eq!(store.add(record("Asha", ["50"; 5])), 2);

        let names: Vec<_> = store.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Asha", "Bilal", "Asha"]);
    }

    #[test]
    fn replace_keeps_position_and_length() {
        let mut store = RecordStore::new();
        store.add(record("Asha", ["50"; 5]));
        store.add(record("Bilal", ["60"; 5]));

        let edited = record("Bilal Khan", ["90"; 5]);
        let previous = store.replace_at(1, edited.clone());

        assert_eq!(previous.map(|r| r.name().to_string()), Ok("Bilal".to_string()));
        assert_eq!(store.get(1), Some(&edited));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_shifts_later_records() {
        let mut store = RecordStore::new();
        store.add(record("Asha", ["50"; 5]));
        store.add(record("Bilal", ["60"; 5]));
        store.add(record("Chen", ["70"; 5]));

        let removed = store.remove_at(0);
        assert_eq!(removed.map(|r| r.name().to_string()), Ok("Asha".to_string()));
        assert_eq!(store.get(0).map(|r| r.name()), Some("Bilal"));
        assert_eq!(store.get(1).map(|r| r.name()), Some("Chen"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut store = RecordStore::new();
        store.add(record("Asha", ["50"; 5]));

        assert_eq!(
            store.remove_at(1),
            Err(StoreError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            store.replace_at(5, record("Bilal", ["60"; 5])),
            Err(StoreError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(store.len(), 1);
    }
}
