use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::time::Instant;

use name_popularity::args::{Args, OutputFormat};
use name_popularity::config::profile_enabled;
use name_popularity::loader::load_store;
use name_popularity::report::{build_table, build_title, format, render_json};
use name_popularity::{GenderFilter, NameStats, QueryParameters};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let profile = profile_enabled();
    let t0 = Instant::now();

    let args = Args::parse();
    let engine = NameStats::new(load_store(&args.data_path)?);

    let gender = GenderFilter::from(args.gender);
    let mut params = QueryParameters::defaults_for(engine.store(), gender, args.popularity());
    params.min_count = args.min_count;
    params.view_size = args.view_size;
    if let Some(y) = args.earliest {
        params.earliest_year = y;
    }
    if let Some(y) = args.latest {
        params.latest_year = y;
    }

    let t_query = Instant::now();
    let result_set = engine.query(&params).context("run name query")?;
    if profile {
        info!("[profile] query: {:.3}s", t_query.elapsed().as_secs_f64());
    }

    let rows = format(&result_set);
    match args.format {
        OutputFormat::Table => {
            println!("{}", build_title(&params));
            match result_set.target {
                Some(t) => println!("target count {:.1}, {} names", t, rows.len()),
                None => println!("no names above the minimum count"),
            }
            build_table(&rows).printstd();
        }
        OutputFormat::Json => println!("{}", render_json(&params, &result_set, &rows)?),
    }

    if profile {
        info!("[profile] total main: {:.3}s", t0.elapsed().as_secs_f64());
    }
    Ok(())
}
