//! Expand/collapse state for a rendered list of records.
//!
//! Each record owns an `expanded` flag flipped by [`RecordList::toggle_one`].
//! [`RecordList::toggle_all`] drives a separate list-wide flag: every call
//! negates the value used by the previous call and applies it to all
//! records, regardless of individual toggles made in between.

use crate::record::Record;
use serde::Serialize;

/// Records plus the list-wide "all expanded" flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordList {
    records: Vec<Record>,
    all_expanded: bool,
}

impl RecordList {
    /// Wrap freshly parsed records; the list-wide flag starts `false`.
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            all_expanded: false,
        }
    }

    /// Records in source order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Value applied by the most recent [`RecordList::toggle_all`].
    #[must_use]
    pub const fn all_expanded(&self) -> bool {
        self.all_expanded
    }

    /// Flip the record with `id`. Returns `false` if no record has that id.
    pub fn toggle_one(&mut self, id: usize) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.expanded = !record.expanded;
                true
            },
            None => false,
        }
    }

    /// Set every record to the negation of the previous toggle-all value and
    /// return the value applied.
    pub fn toggle_all(&mut self) -> bool {
        let expand = !self.all_expanded;
        for record in &mut self.records {
            record.expanded = expand;
        }
        self.all_expanded = expand;
        expand
    }

    /// Replace the records after a re-parse. Every record starts collapsed.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
        for record in &mut self.records {
            record.expanded = false;
        }
    }

    /// Replace the records, keeping `expanded` for records whose id and
    /// content are unchanged.
    pub fn replace_preserving(&mut self, records: Vec<Record>) {
        let previous = std::mem::replace(&mut self.records, records);
        for record in &mut self.records {
            record.expanded = previous
                .iter()
                .find(|old| old.same_content(record))
                .is_some_and(|old| old.expanded);
        }
    }

    /// Ids of expanded records, in order.
    #[must_use]
    pub fn expanded_ids(&self) -> Vec<usize> {
        self.records
            .iter()
            .filter(|record| record.expanded)
            .map(|record| record.id)
            .collect()
    }
}

impl From<Vec<Record>> for RecordList {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
