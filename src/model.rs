use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Gender {
    pub fn code(self) -> &'static str {
        match self {
            Gender::Female => "F",
            Gender::Male => "M",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenderFilter {
    #[default]
    Both,
    Only(Gender),
}

impl GenderFilter {
    pub fn matches(self, gender: Gender) -> bool {
        match self {
            GenderFilter::Both => true,
            GenderFilter::Only(g) => g == gender,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            GenderFilter::Both => "B",
            GenderFilter::Only(g) => g.code(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenderFilter::Both => "Both",
            GenderFilter::Only(Gender::Female) => "Female",
            GenderFilter::Only(Gender::Male) => "Male",
        }
    }
}

/// One row of the source table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Count")]
    pub count: u64,
}

impl Record {
    pub fn new(name: impl Into<String>, gender: Gender, year: i32, count: u64) -> Self {
        Self {
            name: name.into(),
            gender,
            year,
            count,
        }
    }
}

/// A (name, gender) pair with its counts summed over the active year range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedRecord {
    pub name: String,
    pub gender: Gender,
    pub count: u64,
}

impl AggregatedRecord {
    pub fn new(name: impl Into<String>, gender: Gender, count: u64) -> Self {
        Self {
            name: name.into(),
            gender,
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryParameters {
    pub gender: GenderFilter,
    pub popularity: f64,
    pub view_size: usize,
    pub min_count: u64,
    pub earliest_year: i32,
    pub latest_year: i32,
}

/// Named popularity fractions offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopularityPreset {
    MostPopular,
    Top10,
    Top25,
    Middle50,
    Bottom25,
    Bottom10,
    LeastPopular,
}

impl PopularityPreset {
    pub fn all_in_order() -> &'static [PopularityPreset] {
        use PopularityPreset::*;
        &[MostPopular, Top10, Top25, Middle50, Bottom25, Bottom10, LeastPopular]
    }

    pub fn name(self) -> &'static str {
        match self {
            PopularityPreset::MostPopular => "Most popular",
            PopularityPreset::Top10 => "Top 10%",
            PopularityPreset::Top25 => "Top 25%",
            PopularityPreset::Middle50 => "Middle 50%",
            PopularityPreset::Bottom25 => "Bottom 25%",
            PopularityPreset::Bottom10 => "Bottom 10%",
            PopularityPreset::LeastPopular => "Least popular",
        }
    }

    pub fn q(self) -> f64 {
        match self {
            PopularityPreset::MostPopular => 1.0,
            PopularityPreset::Top10 => 0.9,
            PopularityPreset::Top25 => 0.75,
            PopularityPreset::Middle50 => 0.5,
            PopularityPreset::Bottom25 => 0.25,
            PopularityPreset::Bottom10 => 0.1,
            PopularityPreset::LeastPopular => 0.0,
        }
    }

    /// Preset whose fraction matches `q` to two decimals, if any.
    pub fn for_q(q: f64) -> Option<PopularityPreset> {
        Self::all_in_order()
            .iter()
            .copied()
            .find(|p| (p.q() - q).abs() < 0.005)
    }
}
