//! Tag-frequency aggregation per rating bucket.
//!
//! Pure functions over the fetched problem list; no I/O. The tally is built
//! fresh on every run and threaded by reference through reporting and
//! charting.

use indexmap::IndexMap;

use crate::domain::{Problem, bucket_label};

/// Tag → occurrence count for one bucket.
///
/// `IndexMap` preserves first-insertion order, which is what breaks ties when
/// selecting top tags: two tags with equal counts rank by whichever was seen
/// first during aggregation.
pub type TagCounts = IndexMap<String, u64>;

/// Bucket label → tag counts. Buckets that received no classified problems
/// have no entry and are treated as empty by consumers.
#[derive(Debug, Clone, Default)]
pub struct TagTally {
    per_bucket: IndexMap<&'static str, TagCounts>,
}

impl TagTally {
    pub fn counts_for(&self, label: &str) -> Option<&TagCounts> {
        self.per_bucket.get(label)
    }

    /// Total tag occurrences recorded for a bucket (0 when absent).
    pub fn occurrences(&self, label: &str) -> u64 {
        self.counts_for(label)
            .map(|c| c.values().sum())
            .unwrap_or(0)
    }

    /// Number of distinct tags recorded for a bucket (0 when absent).
    pub fn unique_tags(&self, label: &str) -> usize {
        self.counts_for(label).map(|c| c.len()).unwrap_or(0)
    }
}

/// Classify each problem's rating and count every tag occurrence within the
/// matched bucket. Problems with a missing or out-of-range rating contribute
/// nothing.
pub fn tally_problems(problems: &[Problem]) -> TagTally {
    let mut tally = TagTally::default();

    for problem in problems {
        let Some(label) = bucket_label(problem.rating) else {
            continue;
        };
        let counts = tally.per_bucket.entry(label).or_default();
        for tag in &problem.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    tally
}

/// Top `n` tags by descending count, ties broken by first-insertion order.
pub fn top_tags(counts: &TagCounts, n: usize) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = counts.iter().map(|(t, &c)| (t.as_str(), c)).collect();
    // Stable sort keeps insertion order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(rating: Option<i64>, tags: &[&str]) -> Problem {
        Problem {
            rating,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn tags_land_in_exactly_one_bucket() {
        let tally = tally_problems(&[problem(Some(1500), &["dp", "greedy"])]);

        let counts = tally.counts_for("1300-1600").unwrap();
        assert_eq!(counts.get("dp"), Some(&1));
        assert_eq!(counts.get("greedy"), Some(&1));

        for label in ["0-1000", "1000-1300", "1600-1900", "1900-2100"] {
            assert!(tally.counts_for(label).is_none());
        }
    }

    #[test]
    fn unrated_problems_contribute_nothing() {
        let tally = tally_problems(&[
            problem(None, &["dp"]),
            problem(Some(2500), &["fft"]),
        ]);
        assert_eq!(tally.occurrences("0-1000"), 0);
        assert_eq!(tally.occurrences("1900-2100"), 0);
    }

    #[test]
    fn aggregation_is_order_independent() {
        let problems = vec![
            problem(Some(100), &["math", "implementation"]),
            problem(Some(999), &["math"]),
            problem(Some(1200), &["greedy"]),
            problem(Some(2100), &["dp", "trees"]),
        ];
        let mut reversed = problems.clone();
        reversed.reverse();

        let a = tally_problems(&problems);
        let b = tally_problems(&reversed);

        for label in ["0-1000", "1000-1300", "1900-2100"] {
            assert_eq!(a.occurrences(label), b.occurrences(label));
            assert_eq!(a.unique_tags(label), b.unique_tags(label));
        }
        assert_eq!(a.counts_for("0-1000").unwrap().get("math"), Some(&2));
        assert_eq!(b.counts_for("0-1000").unwrap().get("math"), Some(&2));
    }

    #[test]
    fn duplicate_tags_on_one_problem_count_each_occurrence() {
        let tally = tally_problems(&[problem(Some(500), &["dp", "dp"])]);
        assert_eq!(tally.counts_for("0-1000").unwrap().get("dp"), Some(&2));
    }

    #[test]
    fn top_tags_breaks_ties_by_insertion_order() {
        let tally = tally_problems(&[
            problem(Some(500), &["dp", "math", "greedy"]),
            problem(Some(600), &["dp", "math"]),
            problem(Some(700), &["dp", "math", "greedy"]),
            problem(Some(800), &["dp", "math", "greedy"]),
            problem(Some(900), &["dp", "math"]),
        ]);

        let counts = tally.counts_for("0-1000").unwrap();
        let top = top_tags(counts, 2);
        // dp and math are tied at 5; dp was inserted first.
        assert_eq!(top, vec![("dp", 5), ("math", 5)]);

        let all = top_tags(counts, 10);
        assert_eq!(all, vec![("dp", 5), ("math", 5), ("greedy", 3)]);
    }

    #[test]
    fn top_tags_caps_at_n() {
        let tally = tally_problems(&[problem(Some(500), &["a", "b", "c", "d"])]);
        let counts = tally.counts_for("0-1000").unwrap();
        assert_eq!(top_tags(counts, 2).len(), 2);
    }
}
