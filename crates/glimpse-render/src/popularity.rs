//! Grouped popularity bar chart.
//!
//! One bar group per project across three series: stars, forks, and
//! commits. The chart always covers the full project listing, not just
//! the projects that get per-project language detail.

use ratatui::Frame;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};

use glimpse_core::gitlab::Project;

/// Viewport height of the popularity chart, borders included.
pub const BAR_CHART_HEIGHT: u16 = 18;

const SERIES: [(&str, Color); 3] = [
    ("★", Color::Yellow),
    ("⑂", Color::Cyan),
    ("●", Color::Green),
];

/// One bar group of the popularity chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularityBars {
    /// Project name (group label)
    pub name: String,
    /// Star count
    pub stars: u64,
    /// Fork count
    pub forks: u64,
    /// Commit count, 0 when statistics are missing or malformed
    pub commits: u64,
}

/// Extracts the three numeric series for every project, in input order.
pub fn popularity_series(projects: &[Project]) -> Vec<PopularityBars> {
    projects
        .iter()
        .map(|project| PopularityBars {
            name: project.name.clone(),
            stars: project.star_count,
            forks: project.forks_count,
            commits: project.commit_count(),
        })
        .collect()
}

/// Group labels stay readable under narrow bars.
fn short_name(name: &str) -> String {
    const MAX: usize = 12;
    if name.chars().count() <= MAX {
        name.to_string()
    } else {
        let head: String = name.chars().take(MAX - 1).collect();
        format!("{head}…")
    }
}

/// Draws the grouped bar chart over the whole frame.
pub fn draw_popularity(frame: &mut Frame<'_>, series: &[PopularityBars]) {
    let title = Line::from(vec![
        Span::raw("Project Popularity & Activity  "),
        Span::styled("★ stars  ", Style::default().fg(Color::Yellow)),
        Span::styled("⑂ forks  ", Style::default().fg(Color::Cyan)),
        Span::styled("● commits", Style::default().fg(Color::Green)),
    ]);

    let groups: Vec<(Line<'_>, Vec<Bar<'_>>)> = series
        .iter()
        .map(|group| {
            let bars = [group.stars, group.forks, group.commits]
                .into_iter()
                .zip(SERIES)
                .map(|(value, (symbol, color))| {
                    Bar::default()
                        .value(value)
                        .label(Line::from(symbol))
                        .style(Style::default().fg(color))
                })
                .collect();
            (Line::from(short_name(&group.name)), bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .bar_width(6)
        .bar_gap(1)
        .group_gap(3);
    for (label, bars) in &groups {
        chart = chart.data(BarGroup::default().label(label.clone()).bars(bars));
    }

    frame.render_widget(chart, frame.size());
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimpse_core::gitlab::ProjectStatistics;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn project(name: &str, stars: u64, forks: u64, commits: Option<u64>) -> Project {
        Project {
            id: 1,
            name: name.to_string(),
            star_count: stars,
            forks_count: forks,
            statistics: commits.map(|commit_count| ProjectStatistics { commit_count }),
        }
    }

    #[test]
    fn test_series_covers_all_projects_in_order() {
        let projects: Vec<Project> = (0..15)
            .map(|i| project(&format!("p{i}"), i, 0, None))
            .collect();

        let series = popularity_series(&projects);

        assert_eq!(series.len(), 15);
        assert_eq!(series[0].name, "p0");
        assert_eq!(series[14].name, "p14");
        assert_eq!(series[14].stars, 14);
    }

    #[test]
    fn test_missing_statistics_read_as_zero_commits() {
        let series = popularity_series(&[project("demo", 3, 1, None)]);
        assert_eq!(series[0].commits, 0);

        let series = popularity_series(&[project("demo", 3, 1, Some(9))]);
        assert_eq!(series[0].commits, 9);
    }

    #[test]
    fn test_chart_draws_group_labels_and_values() {
        let backend = TestBackend::new(100, BAR_CHART_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let series = popularity_series(&[
            project("alpha", 12, 4, Some(9)),
            project("beta", 3, 1, None),
        ]);

        terminal
            .draw(|frame| draw_popularity(frame, &series))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Project Popularity"));
        assert!(text.contains("alpha"));
        assert!(text.contains("beta"));
        assert!(text.contains("12"));
    }

    #[test]
    fn test_short_name_truncates_long_names() {
        assert_eq!(short_name("short"), "short");
        let truncated = short_name("a-very-long-project-name");
        assert!(truncated.chars().count() <= 12);
        assert!(truncated.ends_with('…'));
    }
}
