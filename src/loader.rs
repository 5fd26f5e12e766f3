use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{profile_enabled, worker_count};
use crate::io_utils::{
    file_name_of, is_archive, is_csv, load_records_from_archive, load_records_from_path,
    scan_sources,
};
use crate::model::Record;
use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Table(PathBuf),
    Archive(PathBuf),
}

impl DataSource {
    pub fn path(&self) -> &Path {
        match self {
            DataSource::Table(p) | DataSource::Archive(p) => p,
        }
    }
}

fn load_source(source: &DataSource) -> Result<Vec<Record>> {
    match source {
        DataSource::Table(p) => load_records_from_path(p),
        DataSource::Archive(p) => load_records_from_archive(p),
    }
}

/// Resolves a data path to its sources: the file itself, or every table and
/// archive found beneath a directory (tables first, each group path-sorted).
pub fn collect_sources(data_path: &Path) -> Result<Vec<DataSource>> {
    if data_path.is_file() {
        if is_archive(data_path) {
            return Ok(vec![DataSource::Archive(data_path.to_path_buf())]);
        }
        if is_csv(data_path) {
            return Ok(vec![DataSource::Table(data_path.to_path_buf())]);
        }
        return Err(anyhow!(
            "unsupported data file {} (expected .csv or .7z)",
            data_path.display()
        ));
    }
    if !data_path.is_dir() {
        return Err(anyhow!("data path not found: {}", data_path.display()));
    }

    let (tables, archives) = scan_sources(data_path)?;
    if tables.is_empty() && archives.is_empty() {
        return Err(anyhow!(
            "No name tables found under: {} (expected .csv files or .7z archives)",
            data_path.display()
        ));
    }

    let mut sources = Vec::with_capacity(tables.len() + archives.len());
    sources.extend(tables.into_iter().map(DataSource::Table));
    sources.extend(archives.into_iter().map(DataSource::Archive));
    Ok(sources)
}

/// Loads every source under `data_path` into one store, preserving source order.
pub fn load_store(data_path: &Path) -> Result<RecordStore> {
    let t0 = Instant::now();
    let sources = collect_sources(data_path)?;
    let workers = worker_count(sources.len());
    debug!("loading {} sources with {} workers", sources.len(), workers);

    let per_source: Vec<Vec<Record>> = if workers == 1 {
        sources.iter().map(load_source).collect::<Result<Vec<_>>>()?
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .context("build loader thread pool")?;
        pool.install(|| sources.par_iter().map(load_source).collect::<Result<Vec<_>>>())?
    };

    for (source, records) in sources.iter().zip(&per_source) {
        info!("loaded {} records from {}", records.len(), file_name_of(source.path()));
    }
    let records: Vec<Record> = per_source.into_iter().flatten().collect();
    let store = RecordStore::from_records(records);

    let summary = store.summary();
    match summary.year_range {
        Some((lo, hi)) => info!(
            "{} records, {} distinct names, years {}..={}",
            summary.records, summary.distinct_names, lo, hi
        ),
        None => info!("no records loaded from {}", data_path.display()),
    }
    if profile_enabled() {
        info!("[profile] load_store: {:.3}s", t0.elapsed().as_secs_f64());
    }
    Ok(store)
}
