use anyhow::{Context, Result};
use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::model::{Gender, PopularityPreset, QueryParameters};
use crate::select::ResultSet;

/// A display row: the selected record plus its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub rank: usize,
    pub name: String,
    pub gender: Gender,
    pub count: u64,
}

pub fn format(result_set: &ResultSet) -> Vec<OutputRow> {
    result_set
        .rows
        .iter()
        .enumerate()
        .map(|(idx, r)| OutputRow {
            rank: idx + 1,
            name: r.name.clone(),
            gender: r.gender,
            count: r.count,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct QueryReport<'a> {
    pub gender: &'static str,
    pub popularity: f64,
    pub view_size: usize,
    pub earliest_year: i32,
    pub latest_year: i32,
    pub min_count: u64,
    pub target: Option<f64>,
    pub rows: &'a [OutputRow],
}

pub fn build_title(params: &QueryParameters) -> String {
    let popularity = match PopularityPreset::for_q(params.popularity) {
        Some(p) => format!("{} ({:.2})", p.name(), params.popularity),
        None => format!("{:.2}", params.popularity),
    };
    format!(
        "{} names, {}, {}..={}, count > {}",
        params.gender.label(),
        popularity,
        params.earliest_year,
        params.latest_year,
        params.min_count
    )
}

pub fn build_table(rows: &[OutputRow]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("Rank"),
        Cell::new("Name"),
        Cell::new("Gender"),
        Cell::new("Count"),
    ]));
    for r in rows {
        table.add_row(Row::new(vec![
            Cell::new(&r.rank.to_string()),
            Cell::new(&r.name),
            Cell::new(r.gender.code()),
            Cell::new(&r.count.to_string()),
        ]));
    }
    table
}

pub fn render_json(
    params: &QueryParameters,
    result_set: &ResultSet,
    rows: &[OutputRow],
) -> Result<String> {
    let report = QueryReport {
        gender: params.gender.code(),
        popularity: params.popularity,
        view_size: params.view_size,
        earliest_year: params.earliest_year,
        latest_year: params.latest_year,
        min_count: result_set.min_count,
        target: result_set.target,
        rows,
    };
    serde_json::to_string_pretty(&report).context("serialize query report")
}
