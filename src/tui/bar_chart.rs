//! Plotters-powered tag bar chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `BarChart` widget?
//! - nicer axis + tick rendering
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Longest tag label drawn under a bar before truncation.
const LABEL_MAX: usize = 12;

/// A lightweight, render-only bar chart description.
///
/// The widget is intentionally data-driven: the ranked tags and their counts
/// are computed outside the render call. This keeps `render()` focused on
/// drawing and makes the data prep testable separately.
pub struct TagBarChart<'a> {
    /// Tag labels, ordered by descending frequency.
    pub labels: &'a [&'a str],
    /// Occurrence counts, parallel to `labels`.
    pub values: &'a [u64],
}

impl Widget for TagBarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let n = self.labels.len().min(self.values.len());
        if n == 0 {
            return;
        }

        let y_max = self.values.iter().copied().max().unwrap_or(0) as f64;
        if y_max <= 0.0 {
            return;
        }
        // Headroom so the tallest bar doesn't touch the frame.
        let y_top = y_max * 1.05;

        let labels: Vec<String> = self.labels[..n].iter().map(|l| truncate(l)).collect();
        let values: Vec<u64> = self.values[..n].to_vec();

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d((0..n).into_segmented(), 0.0..y_top)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc("tag")
                .y_desc("frequency")
                .x_labels(n)
                .y_labels(5)
                .x_label_formatter(&|seg| match seg {
                    SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => labels
                        .get(*i)
                        .cloned()
                        .unwrap_or_default(),
                    SegmentValue::Last => String::new(),
                })
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // High-contrast bars read well in terminal rendering.
            let bar_color = RGBColor(0, 255, 255); // cyan

            chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
                let x0 = SegmentValue::Exact(i);
                let x1 = SegmentValue::Exact(i + 1);
                let mut bar = Rectangle::new([(x0, 0.0), (x1, v as f64)], bar_color.filled());
                bar.set_margin(0, 0, 1, 1);
                bar
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

fn truncate(s: &str) -> String {
    if s.chars().count() <= LABEL_MAX {
        return s.to_string();
    }
    let mut out: String = s.chars().take(LABEL_MAX - 1).collect();
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_labels_intact() {
        assert_eq!(truncate("dp"), "dp");
        assert_eq!(truncate("implementation"), "implementati.");
    }
}
