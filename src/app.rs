//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - fetches the problemset
//! - aggregates tag frequencies per rating bucket
//! - prints the per-bucket report
//! - shows the bar charts

use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cftags` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::init();

    println!("Fetching problems from Codeforces API...");
    let run = pipeline::run()?;
    println!("Fetched {} problems", run.problem_count);
    log::debug!("aggregated tag frequencies for {} problems", run.problem_count);

    print!("{}", crate::report::format_report(&run.tally));

    println!("\nGenerating bar charts...");
    crate::tui::show_charts(&run.tally, crate::tui::DEFAULT_TOP_N)
}
