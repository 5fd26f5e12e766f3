use indexmap::IndexMap;

use crate::model::{Gender, Record};

/// Summed counts per (name, gender), iterated in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation<'a> {
    sums: IndexMap<(&'a str, Gender), u64>,
}

impl<'a> Aggregation<'a> {
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    pub fn get(&self, name: &str, gender: Gender) -> Option<u64> {
        self.sums.get(&(name, gender)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Gender, u64)> + '_ {
        self.sums.iter().map(|(&(name, gender), &count)| (name, gender, count))
    }

    /// Folds (name, gender, count) triples into per-key sums, saturating at `u64::MAX`.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Gender, u64)>,
    {
        let mut sums: IndexMap<(&'a str, Gender), u64> = IndexMap::new();
        for (name, gender, count) in triples {
            let sum = sums.entry((name, gender)).or_insert(0);
            *sum = sum.saturating_add(count);
        }
        Self { sums }
    }

    /// Sums again by key; a no-op on an already grouped mapping.
    pub fn regroup(&self) -> Self {
        Self::from_triples(self.iter())
    }
}

/// Sums counts per (name, gender) over records with `earliest <= year <= latest`.
pub fn aggregate(records: &[Record], earliest: i32, latest: i32) -> Aggregation<'_> {
    Aggregation::from_triples(
        records
            .iter()
            .filter(|r| r.year >= earliest && r.year <= latest)
            .map(|r| (r.name.as_str(), r.gender, r.count)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Alice", Gender::Female, 1990, 500),
            Record::new("Alice", Gender::Female, 1991, 600),
            Record::new("Bob", Gender::Male, 1990, 1200),
            Record::new("Carol", Gender::Female, 1990, 50),
            Record::new("Carol", Gender::Female, 1992, 70),
        ]
    }

    #[test]
    fn test_sums_within_range() {
        let records = sample();
        let agg = aggregate(&records, 1990, 1991);
        assert_eq!(agg.len(), 3);
        assert_eq!(agg.get("Alice", Gender::Female), Some(1100));
        assert_eq!(agg.get("Bob", Gender::Male), Some(1200));
        assert_eq!(agg.get("Carol", Gender::Female), Some(50));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let records = sample();
        let agg = aggregate(&records, 1991, 1992);
        assert_eq!(agg.get("Alice", Gender::Female), Some(600));
        assert_eq!(agg.get("Carol", Gender::Female), Some(70));
        assert_eq!(agg.get("Bob", Gender::Male), None);
    }

    #[test]
    fn test_same_name_different_gender_is_distinct() {
        let records = vec![
            Record::new("Jordan", Gender::Female, 2000, 10),
            Record::new("Jordan", Gender::Male, 2000, 30),
        ];
        let agg = aggregate(&records, 2000, 2000);
        assert_eq!(agg.get("Jordan", Gender::Female), Some(10));
        assert_eq!(agg.get("Jordan", Gender::Male), Some(30));
    }

    #[test]
    fn test_first_appearance_order() {
        let records = vec![
            Record::new("Zed", Gender::Male, 1990, 1),
            Record::new("Amy", Gender::Female, 1990, 1),
            Record::new("Zed", Gender::Male, 1991, 1),
        ];
        let agg = aggregate(&records, 1990, 1991);
        let names: Vec<&str> = agg.iter().map(|(n, _, _)| n).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_empty_and_inverted_range() {
        let records = sample();
        assert!(aggregate(&records, 2050, 2060).is_empty());
        assert!(aggregate(&records, 1991, 1990).is_empty());
    }

    #[test]
    fn test_sum_saturates() {
        let records = vec![
            Record::new("Max", Gender::Male, 2000, u64::MAX - 1),
            Record::new("Max", Gender::Male, 2001, 5),
        ];
        let agg = aggregate(&records, 2000, 2001);
        assert_eq!(agg.get("Max", Gender::Male), Some(u64::MAX));
    }

    #[test]
    fn test_regroup_is_idempotent() {
        let records = sample();
        let agg = aggregate(&records, 1980, 2000);
        assert_eq!(agg.regroup(), agg);
    }
}
