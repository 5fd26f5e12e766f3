use log::{debug, warn};
use std::time::Instant;
use thiserror::Error;

use crate::aggregate::aggregate;
use crate::model::{GenderFilter, QueryParameters};
use crate::select::{select, ResultSet};
use crate::store::RecordStore;

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

fn invalid(name: &'static str, reason: impl Into<String>) -> QueryError {
    QueryError::InvalidParameter {
        name,
        reason: reason.into(),
    }
}

impl QueryParameters {
    /// Parameters with the default threshold and view size, spanning every year in `store`.
    pub fn defaults_for(store: &RecordStore, gender: GenderFilter, popularity: f64) -> Self {
        let (earliest_year, latest_year) = store.year_range().unwrap_or((0, 0));
        Self {
            gender,
            popularity,
            view_size: crate::config::DEFAULT_VIEW_SIZE,
            min_count: crate::config::DEFAULT_MIN_COUNT,
            earliest_year,
            latest_year,
        }
    }

    pub fn validate(&self) -> Result<(), QueryError> {
        if !(0.0..=1.0).contains(&self.popularity) {
            return Err(invalid(
                "popularity",
                format!("{} is not within [0, 1]", self.popularity),
            ));
        }
        if self.view_size == 0 {
            return Err(invalid("view_size", "must be at least 1"));
        }
        Ok(())
    }
}

/// Query engine over an owned, read-only record store.
///
/// Every call allocates its own aggregation, so a shared `&NameStats` can
/// serve queries from several threads at once.
#[derive(Debug)]
pub struct NameStats {
    store: RecordStore,
}

impl NameStats {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query(&self, params: &QueryParameters) -> Result<ResultSet, QueryError> {
        params.validate()?;
        if params.earliest_year > params.latest_year {
            warn!(
                "earliest year {} is after latest year {}, no records can match",
                params.earliest_year, params.latest_year
            );
            return Ok(ResultSet::empty(params.min_count));
        }

        let t0 = Instant::now();
        let aggregated = aggregate(
            self.store.records(),
            params.earliest_year,
            params.latest_year,
        );
        debug!(
            "aggregated {} names for {}..={} in {:.3}s",
            aggregated.len(),
            params.earliest_year,
            params.latest_year,
            t0.elapsed().as_secs_f64()
        );

        Ok(select(
            &aggregated,
            params.gender,
            params.min_count,
            params.popularity,
            params.view_size,
        ))
    }
}
