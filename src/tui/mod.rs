//! Terminal chart viewer.
//!
//! Shows one bar chart per non-empty bucket, in canonical bucket order.
//! Each chart takes over the terminal and blocks until a key press dismisses
//! it, mirroring a sequential "one window at a time" viewing flow.

use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::aggregate::{TagTally, top_tags};
use crate::domain::RATING_BUCKETS;
use crate::error::AppError;

mod bar_chart;

use bar_chart::TagBarChart;

/// How many tags each chart shows.
pub const DEFAULT_TOP_N: usize = 15;

/// Show one chart per non-empty bucket, blocking on each until dismissed.
///
/// Empty buckets get a skip diagnostic instead of an empty chart. Esc or `q`
/// dismisses the remaining charts as well.
pub fn show_charts(tally: &TagTally, top_n: usize) -> Result<(), AppError> {
    for bucket in &RATING_BUCKETS {
        let Some(counts) = tally.counts_for(bucket.label).filter(|c| !c.is_empty()) else {
            println!("No data for bucket {}, skipping chart.", bucket.label);
            continue;
        };

        let ranked = top_tags(counts, top_n);
        if !show_one(bucket.label, top_n, &ranked)? {
            log::info!("chart viewing stopped early by user");
            break;
        }
    }
    Ok(())
}

/// Display a single bucket's chart until a key press.
///
/// Returns `false` when the user asked to stop viewing charts altogether.
fn show_one(label: &str, top_n: usize, ranked: &[(&str, u64)]) -> Result<bool, AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::render(format!("Failed to initialize terminal: {e}")))?;

    let labels: Vec<&str> = ranked.iter().map(|(t, _)| *t).collect();
    let values: Vec<u64> = ranked.iter().map(|(_, c)| *c).collect();
    let title = format!("Top {top_n} tags — bucket {label}");

    loop {
        terminal
            .draw(|frame| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(1)])
                    .split(frame.area());

                let block = Block::default().title(title.as_str()).borders(Borders::ALL);
                let inner = block.inner(chunks[0]);
                frame.render_widget(block, chunks[0]);
                frame.render_widget(
                    TagBarChart {
                        labels: &labels,
                        values: &values,
                    },
                    inner,
                );

                let hint = Paragraph::new("any key: next chart  |  q/Esc: stop")
                    .style(Style::default().fg(Color::Gray));
                frame.render_widget(hint, chunks[1]);
            })
            .map_err(|e| AppError::render(format!("Terminal draw error: {e}")))?;

        match event::read().map_err(|e| AppError::render(format!("Event read error: {e}")))? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(!matches!(key.code, KeyCode::Char('q') | KeyCode::Esc));
            }
            Event::Resize(_, _) => continue,
            _ => continue,
        }
    }
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::render(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::render(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
