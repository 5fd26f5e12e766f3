use proptest::prelude::*;
use std::collections::HashMap;

use name_popularity::aggregate::aggregate;
use name_popularity::quantile::quantile;
use name_popularity::select::select;
use name_popularity::{Gender, GenderFilter, Record};

const NAMES: [&str; 6] = ["Ada", "Bea", "Cy", "Dee", "Eli", "Fay"];

fn record_strategy() -> impl Strategy<Value = Record> {
    (0..NAMES.len(), any::<bool>(), 1990i32..2000, 0u64..5000).prop_map(|(n, male, year, count)| {
        let gender = if male { Gender::Male } else { Gender::Female };
        Record::new(NAMES[n], gender, year, count)
    })
}

fn filter_strategy() -> impl Strategy<Value = GenderFilter> {
    prop_oneof![
        Just(GenderFilter::Both),
        Just(GenderFilter::Only(Gender::Female)),
        Just(GenderFilter::Only(Gender::Male)),
    ]
}

proptest! {
    #[test]
    fn aggregate_matches_naive_sum(
        records in prop::collection::vec(record_strategy(), 0..60),
        a in 1988i32..2002,
        b in 1988i32..2002,
    ) {
        let (lo, hi) = (a.min(b), a.max(b));
        let mut expected: HashMap<(&str, Gender), u64> = HashMap::new();
        for r in records.iter().filter(|r| r.year >= lo && r.year <= hi) {
            *expected.entry((r.name.as_str(), r.gender)).or_insert(0) += r.count;
        }

        let agg = aggregate(&records, lo, hi);
        prop_assert_eq!(agg.len(), expected.len());
        for (name, gender, count) in agg.iter() {
            prop_assert_eq!(expected.get(&(name, gender)).copied(), Some(count));
        }
        prop_assert_eq!(agg.regroup(), agg);
    }

    #[test]
    fn selection_invariants(
        records in prop::collection::vec(record_strategy(), 0..60),
        gender in filter_strategy(),
        min_count in 0u64..8000,
        popularity in 0.0f64..=1.0,
        view_size in 1usize..8,
    ) {
        let agg = aggregate(&records, 1990, 1999);
        let rs = select(&agg, gender, min_count, popularity, view_size);

        let eligible = agg
            .iter()
            .filter(|&(_, g, c)| gender.matches(g) && c > min_count)
            .count();
        prop_assert_eq!(rs.len(), eligible.min(view_size));
        prop_assert_eq!(rs.min_count, min_count);
        prop_assert!(rs.rows.iter().all(|r| r.count > min_count && gender.matches(r.gender)));
        prop_assert!(rs.rows.windows(2).all(|w| w[0].count <= w[1].count));
    }

    #[test]
    fn extreme_popularity_targets_extreme_counts(
        records in prop::collection::vec(record_strategy(), 1..60),
    ) {
        let agg = aggregate(&records, 1990, 1999);
        let counts: Vec<u64> = agg.iter().map(|(_, _, c)| c).filter(|&c| c > 0).collect();
        prop_assume!(!counts.is_empty());
        let lo = *counts.iter().min().unwrap();
        let hi = *counts.iter().max().unwrap();

        let least = select(&agg, GenderFilter::Both, 0, 0.0, 1);
        prop_assert_eq!(least.rows[0].count, lo);
        let most = select(&agg, GenderFilter::Both, 0, 1.0, 1);
        prop_assert_eq!(most.rows[0].count, hi);
    }

    #[test]
    fn quantile_stays_within_bounds(
        values in prop::collection::vec(0u64..100_000, 1..40),
        q in 0.0f64..=1.0,
    ) {
        let v = quantile(&values, q).unwrap();
        let lo = *values.iter().min().unwrap() as f64;
        let hi = *values.iter().max().unwrap() as f64;
        prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
    }
}
