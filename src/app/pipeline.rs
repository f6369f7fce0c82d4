//! Shared pipeline logic: fetch -> aggregate.
//!
//! Keeping this in one place avoids duplicating the core workflow and lets
//! the presentation layer (report printing, chart viewing) be exercised
//! against pre-fetched data in tests.

use crate::aggregate::{TagTally, tally_problems};
use crate::data::CfClient;
use crate::domain::Problem;
use crate::error::AppError;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub problem_count: usize,
    pub tally: TagTally,
}

/// Execute the fetch + aggregation pipeline.
///
/// Fails fast: a fetch error aborts the run before any tally exists.
pub fn run() -> Result<RunOutput, AppError> {
    let client = CfClient::new();
    let problems = client.fetch_problems()?;
    Ok(run_with_problems(&problems))
}

/// Aggregate a pre-fetched problem list.
pub fn run_with_problems(problems: &[Problem]) -> RunOutput {
    let tally = tally_problems(problems);
    RunOutput {
        problem_count: problems.len(),
        tally,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_with_problems_tallies_rated_problems_only() {
        let problems = vec![
            Problem {
                rating: Some(1500),
                tags: vec!["dp".to_string()],
            },
            Problem {
                rating: None,
                tags: vec!["math".to_string()],
            },
        ];

        let out = run_with_problems(&problems);
        assert_eq!(out.problem_count, 2);
        assert_eq!(out.tally.occurrences("1300-1600"), 1);
        assert_eq!(out.tally.occurrences("0-1000"), 0);
    }
}
