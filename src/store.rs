use std::collections::HashSet;

use crate::model::Record;

/// Immutable name/gender/year/count table, loaded once and shared by all queries.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    year_range: Option<(i32, i32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSummary {
    pub records: usize,
    pub distinct_names: usize,
    pub year_range: Option<(i32, i32)>,
}

impl RecordStore {
    pub fn from_records(records: Vec<Record>) -> Self {
        let year_range = records.iter().fold(None, |acc, r| match acc {
            None => Some((r.year, r.year)),
            Some((lo, hi)) => Some((i32::min(lo, r.year), i32::max(hi, r.year))),
        });
        Self {
            records,
            year_range,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest year present, `None` for an empty store.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        self.year_range
    }

    pub fn summary(&self) -> StoreSummary {
        let distinct: HashSet<(&str, _)> = self
            .records
            .iter()
            .map(|r| (r.name.as_str(), r.gender))
            .collect();
        StoreSummary {
            records: self.records.len(),
            distinct_names: distinct.len(),
            year_range: self.year_range,
        }
    }
}
