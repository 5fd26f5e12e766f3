use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{DEFAULT_MIN_COUNT, DEFAULT_VIEW_SIZE};
use crate::model::{Gender, GenderFilter, PopularityPreset};

#[derive(Parser, Debug)]
#[command(about = "Find the baby names whose total count sits nearest a popularity percentile")]
pub struct Args {
    /// Name table (.csv), .7z archive holding one, or a directory of either
    #[arg(short = 'd', long = "data-path")]
    pub data_path: PathBuf,

    #[arg(short = 'g', long = "gender", value_enum, default_value_t = GenderArg::B)]
    pub gender: GenderArg,

    /// Popularity fraction in [0, 1]; 1 is the most popular
    #[arg(short = 'p', long = "popularity", conflicts_with = "preset")]
    pub popularity: Option<f64>,

    #[arg(long = "preset", value_enum)]
    pub preset: Option<PresetArg>,

    /// Only names with a total count above this are eligible
    #[arg(short = 'm', long = "min-count", default_value_t = DEFAULT_MIN_COUNT)]
    pub min_count: u64,

    #[arg(short = 'n', long = "view-size", default_value_t = DEFAULT_VIEW_SIZE)]
    pub view_size: usize,

    /// First year included (defaults to the earliest year in the data)
    #[arg(long = "earliest")]
    pub earliest: Option<i32>,

    /// Last year included (defaults to the latest year in the data)
    #[arg(long = "latest")]
    pub latest: Option<i32>,

    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    #[value(alias = "both")]
    B,
    #[value(alias = "female")]
    F,
    #[value(alias = "male")]
    M,
}

impl From<GenderArg> for GenderFilter {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::B => GenderFilter::Both,
            GenderArg::F => GenderFilter::Only(Gender::Female),
            GenderArg::M => GenderFilter::Only(Gender::Male),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    MostPopular,
    Top10,
    Top25,
    Middle50,
    Bottom25,
    Bottom10,
    LeastPopular,
}

impl From<PresetArg> for PopularityPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::MostPopular => PopularityPreset::MostPopular,
            PresetArg::Top10 => PopularityPreset::Top10,
            PresetArg::Top25 => PopularityPreset::Top25,
            PresetArg::Middle50 => PopularityPreset::Middle50,
            PresetArg::Bottom25 => PopularityPreset::Bottom25,
            PresetArg::Bottom10 => PopularityPreset::Bottom10,
            PresetArg::LeastPopular => PopularityPreset::LeastPopular,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Args {
    /// Explicit fraction, else the preset's, else least popular.
    pub fn popularity(&self) -> f64 {
        match (self.popularity, self.preset) {
            (Some(p), _) => p,
            (None, Some(preset)) => PopularityPreset::from(preset).q(),
            (None, None) => PopularityPreset::LeastPopular.q(),
        }
    }
}
