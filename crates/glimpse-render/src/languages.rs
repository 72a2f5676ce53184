//! Per-project language pie charts.
//!
//! Each project gets a braille-canvas pie with a colored legend that
//! carries the percentage annotations. Projects without language data
//! get a text fallback in their grid cell instead of a chart.

use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};

use glimpse_core::gitlab::LanguageBreakdown;

/// Only the first 9 projects get per-project language detail; later
/// projects are silently omitted.
pub const LANGUAGE_CHART_CAP: usize = 9;

/// Pie charts are laid out in a fixed 3-column grid, row-major.
pub const GRID_COLUMNS: usize = 3;

/// Height of the pie canvas itself, borders included.
const PIE_CANVAS_HEIGHT: u16 = 13;

/// At most this many legend lines per cell; rarer languages are
/// clipped from the legend (the pie still includes them).
const LEGEND_MAX: usize = 6;

/// Angular step used to fill slices with radial lines.
const FILL_STEP: f64 = 0.01;

const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Red,
    Color::LightCyan,
    Color::LightYellow,
];

/// One labeled pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Language name
    pub label: String,
    /// Share of the project's code, 0-100
    pub percentage: f64,
}

/// Turns a breakdown into slices sorted by descending percentage
/// (name as tie-break, for a deterministic layout).
pub fn pie_slices(breakdown: &LanguageBreakdown) -> Vec<PieSlice> {
    let mut slices: Vec<PieSlice> = breakdown
        .iter()
        .map(|(label, percentage)| PieSlice {
            label: label.clone(),
            percentage: *percentage,
        })
        .collect();
    slices.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    slices
}

/// Color assigned to the slice at `index`.
pub fn slice_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Viewport height needed for one grid row of cells.
pub fn row_height(cells: &[(String, LanguageBreakdown)]) -> u16 {
    let legend_lines = cells
        .iter()
        .map(|(_, breakdown)| breakdown.len().min(LEGEND_MAX))
        .max()
        .unwrap_or(0);
    PIE_CANVAS_HEIGHT + legend_lines as u16
}

/// Draws one row of up to three language cells across the frame.
pub fn draw_language_row(frame: &mut Frame<'_>, cells: &[(String, LanguageBreakdown)]) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(frame.size());

    for (index, (name, breakdown)) in cells.iter().take(GRID_COLUMNS).enumerate() {
        draw_language_cell(frame, columns[index], name, breakdown);
    }
}

/// Draws one project's cell: a pie with legend, or the text fallback.
fn draw_language_cell(
    frame: &mut Frame<'_>,
    area: Rect,
    name: &str,
    breakdown: &LanguageBreakdown,
) {
    let slices = pie_slices(breakdown);
    if slices.is_empty() {
        let fallback = Paragraph::new("No language data available.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(name.to_string()));
        frame.render_widget(fallback, area);
        return;
    }

    let legend_lines = slices.len().min(LEGEND_MAX);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PIE_CANVAS_HEIGHT),
            Constraint::Length(legend_lines as u16),
        ])
        .split(area);

    let pie = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(name.to_string()))
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            // Slices start at 12 o'clock and proceed counterclockwise.
            let mut start = FRAC_PI_2;
            for (index, slice) in slices.iter().enumerate() {
                let sweep = slice.percentage.clamp(0.0, 100.0) / 100.0 * TAU;
                let color = slice_color(index);
                let mut angle = start;
                while angle < start + sweep {
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: angle.cos(),
                        y2: angle.sin(),
                        color,
                    });
                    angle += FILL_STEP;
                }
                start += sweep;
            }
        });
    frame.render_widget(pie, parts[0]);

    let legend: Vec<Line<'_>> = slices
        .iter()
        .take(legend_lines)
        .enumerate()
        .map(|(index, slice)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(slice_color(index))),
                Span::raw(format!("{} {:.1}%", slice.label, slice.percentage)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(legend), parts[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn breakdown(entries: &[(&str, f64)]) -> LanguageBreakdown {
        entries
            .iter()
            .map(|(name, pct)| (name.to_string(), *pct))
            .collect()
    }

    #[test]
    fn test_slices_sorted_by_descending_percentage() {
        let slices = pie_slices(&breakdown(&[
            ("Shell", 5.0),
            ("Rust", 61.2),
            ("Dockerfile", 33.8),
        ]));

        let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Rust", "Dockerfile", "Shell"]);
        assert_eq!(slices[0].percentage, 61.2);
    }

    #[test]
    fn test_equal_percentages_tie_break_on_name() {
        let slices = pie_slices(&breakdown(&[("B", 50.0), ("A", 50.0)]));
        assert_eq!(slices[0].label, "A");
    }

    #[test]
    fn test_empty_breakdown_yields_no_slices() {
        assert!(pie_slices(&LanguageBreakdown::new()).is_empty());
    }

    #[test]
    fn test_slice_colors_cycle() {
        assert_eq!(slice_color(0), slice_color(PALETTE.len()));
        assert_ne!(slice_color(0), slice_color(1));
    }

    fn rendered_text(cells: &[(String, LanguageBreakdown)]) -> String {
        let backend = TestBackend::new(90, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_language_row(frame, cells))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_breakdown_renders_text_fallback() {
        let cells = vec![("demo".to_string(), LanguageBreakdown::new())];
        let text = rendered_text(&cells);
        assert!(text.contains("No language data available."));
        assert!(text.contains("demo"));
    }

    #[test]
    fn test_breakdown_renders_legend_with_percentages() {
        let cells = vec![(
            "demo".to_string(),
            breakdown(&[("Rust", 61.2), ("Shell", 38.8)]),
        )];
        let text = rendered_text(&cells);
        assert!(text.contains("Rust 61.2%"));
        assert!(text.contains("Shell 38.8%"));
    }

    #[test]
    fn test_row_draws_at_most_three_cells() {
        let cells: Vec<(String, LanguageBreakdown)> = (0..5)
            .map(|i| (format!("cell{i}"), breakdown(&[("Rust", 100.0)])))
            .collect();
        let text = rendered_text(&cells);
        assert!(text.contains("cell0"));
        assert!(text.contains("cell2"));
        assert!(!text.contains("cell3"));
    }

    #[test]
    fn test_row_height_tracks_largest_legend() {
        let cells = vec![
            ("one".to_string(), breakdown(&[("Rust", 100.0)])),
            (
                "two".to_string(),
                breakdown(&[
                    ("A", 20.0),
                    ("B", 20.0),
                    ("C", 20.0),
                    ("D", 20.0),
                    ("E", 10.0),
                    ("F", 5.0),
                    ("G", 5.0),
                ]),
            ),
        ];
        // Legend is capped at LEGEND_MAX lines
        assert_eq!(row_height(&cells), PIE_CANVAS_HEIGHT + LEGEND_MAX as u16);

        let empty: Vec<(String, LanguageBreakdown)> = Vec::new();
        assert_eq!(row_height(&empty), PIE_CANVAS_HEIGHT);
    }
}
