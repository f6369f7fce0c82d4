//! Formatted terminal output for bucket summaries.
//!
//! We keep formatting code in one place so:
//! - the aggregation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::aggregate::{TagCounts, TagTally, top_tags};
use crate::domain::RATING_BUCKETS;

/// How many tags to list per bucket in the console summary.
const SUMMARY_TOP: usize = 10;

/// Format the full report: one block per bucket, in canonical ascending
/// order, including buckets that received no problems.
pub fn format_report(tally: &TagTally) -> String {
    let mut out = String::new();
    for bucket in &RATING_BUCKETS {
        out.push('\n');
        out.push_str(&format_bucket_summary(bucket.label, tally));
    }
    out
}

/// Format one bucket's block: the headline counts plus its top tags.
///
/// An absent bucket is reported as empty rather than skipped, so the report
/// always shows all five buckets.
pub fn format_bucket_summary(label: &str, tally: &TagTally) -> String {
    let empty = TagCounts::new();
    let counts = tally.counts_for(label).unwrap_or(&empty);

    let occurrences: u64 = counts.values().sum();
    let mut out = format!(
        "Bucket {label}: {occurrences} tag occurrences across {} unique tags\n",
        counts.len()
    );

    for (tag, freq) in top_tags(counts, SUMMARY_TOP) {
        out.push_str(&format!("  {tag:<25} {freq}\n"));
    }

    out
}
