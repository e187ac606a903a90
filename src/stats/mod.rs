//! Statistics reporters over the filtered trip table.
//!
//! Each reporter is split into a pure `compute` function (unit-testable,
//! returns `None` or a flagged variant on empty input) and a `report`
//! function that prints the section to stdout with the elapsed wall-clock
//! diagnostic.
//!
//! Mode tie-break rule, used everywhere in this crate: when several values
//! share the maximum frequency, the smallest value wins (lexicographically
//! first for strings, numerically first for numbers). Counting goes through
//! a `BTreeMap` and the running best is only replaced on a strictly greater
//! count, so the rule holds by construction.

use std::collections::BTreeMap;
use std::time::Instant;

pub mod duration;
pub mod station;
pub mod time;
pub mod users;

pub(crate) const NO_DATA: &str = "No data available for the selected filters.";

/// Most frequent value; ties resolve to the smallest value.
pub(crate) fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// All distinct values with their counts, ordered by descending count and
/// ascending value on ties.
pub(crate) fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Stable sort on count alone keeps the BTreeMap's ascending value order
    // within each count bucket.
    let mut pairs: Vec<(T, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}

/// Close a report section: elapsed diagnostic plus a rule.
pub(crate) fn finish_section(started: Instant) {
    println!("\nThis took {:.4} seconds.", started.elapsed().as_secs_f64());
    println!("{}", "-".repeat(40));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_of_empty_input_is_none() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn mode_picks_the_most_frequent_value() {
        assert_eq!(mode(vec![3, 1, 3, 2, 3]), Some(3));
        assert_eq!(mode(vec!["b", "a", "b"]), Some("b"));
    }

    #[test]
    fn mode_ties_resolve_to_the_smallest_value() {
        assert_eq!(mode(vec!["b", "a", "b", "a"]), Some("a"));
        assert_eq!(mode(vec![9, 2, 9, 2, 5]), Some(2));
    }

    #[test]
    fn value_counts_orders_by_count_then_value() {
        let counts = value_counts(vec!["c", "a", "b", "a", "c", "a", "b"]);
        assert_eq!(counts, vec![("a", 3), ("b", 2), ("c", 2)]);
    }
}
