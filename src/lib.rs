//! Aggregation-and-selection engine over a birth-name table: sum counts per
//! (name, gender) within a year range, then pick the names nearest a
//! popularity percentile.

pub mod aggregate;
pub mod args;
pub mod config;
pub mod engine;
pub mod io_utils;
pub mod loader;
pub mod model;
pub mod quantile;
pub mod report;
pub mod select;
pub mod store;

pub use engine::{NameStats, QueryError};
pub use model::{AggregatedRecord, Gender, GenderFilter, QueryParameters, Record};
pub use select::ResultSet;
pub use store::RecordStore;
