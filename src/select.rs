use log::debug;
use serde::Serialize;

use crate::aggregate::Aggregation;
use crate::model::{AggregatedRecord, GenderFilter};
use crate::quantile::quantile;

/// Rows chosen by one query, ascending by count, with the threshold they passed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    pub rows: Vec<AggregatedRecord>,
    pub min_count: u64,
    /// Quantile target the rows were ranked against; `None` when nothing passed the threshold.
    pub target: Option<f64>,
}

impl ResultSet {
    pub fn empty(min_count: u64) -> Self {
        Self {
            rows: Vec::new(),
            min_count,
            target: None,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn max_count(&self) -> Option<u64> {
        self.rows.iter().map(|r| r.count).max()
    }
}

pub fn select(
    aggregated: &Aggregation<'_>,
    gender: GenderFilter,
    min_count: u64,
    popularity: f64,
    view_size: usize,
) -> ResultSet {
    let candidates: Vec<_> = aggregated
        .iter()
        .filter(|&(_, g, _)| gender.matches(g))
        .filter(|&(_, _, count)| count > min_count)
        .collect();
    debug!(
        "{} of {} aggregated names pass gender {} and count > {}",
        candidates.len(),
        aggregated.len(),
        gender.code(),
        min_count
    );
    let counts: Vec<u64> = candidates.iter().map(|&(_, _, c)| c).collect();
    // No candidates, no target.
    let Some(target) = quantile(&counts, popularity) else {
        return ResultSet::empty(min_count);
    };

    // Stable: equal distances keep candidate order.
    let mut ranked: Vec<(f64, usize)> = counts
        .iter()
        .enumerate()
        .map(|(idx, &c)| ((c as f64 - target).abs(), idx))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.truncate(view_size);

    let mut rows: Vec<AggregatedRecord> = ranked
        .into_iter()
        .map(|(_, idx)| {
            let (name, g, count) = candidates[idx];
            AggregatedRecord::new(name, g, count)
        })
        .collect();
    rows.sort_by_key(|r| r.count);

    ResultSet {
        rows,
        min_count,
        target: Some(target),
    }
}
