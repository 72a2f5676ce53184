//! Project visualizations view.
//!
//! The rendering pass is strictly sequential: the bar chart first,
//! then language breakdowns fetched project by project in input order.
//! Each chart surface is released before the next one is acquired.

use colored::Colorize;
use tracing::warn;

use glimpse_core::error::Result;
use glimpse_core::gitlab::{GitlabDirectory, LanguageBreakdown, Project};

use crate::languages::{self, GRID_COLUMNS, LANGUAGE_CHART_CAP};
use crate::popularity::{self, BAR_CHART_HEIGHT};
use crate::surface::with_surface;

/// The projects that receive per-project language detail: the first 9,
/// later ones are silently omitted.
pub fn capped_projects(projects: &[Project]) -> &[Project] {
    &projects[..projects.len().min(LANGUAGE_CHART_CAP)]
}

/// Fetches language breakdowns sequentially, in input order.
///
/// A failed lookup degrades to an empty breakdown (rendered as the
/// text fallback), indistinguishable from a project without language
/// data, by design.
pub async fn collect_language_breakdowns(
    directory: &dyn GitlabDirectory,
    projects: &[Project],
) -> Vec<(String, LanguageBreakdown)> {
    let mut breakdowns = Vec::with_capacity(projects.len());
    for project in projects {
        let languages = match directory.get_languages(project.id).await {
            Ok(languages) => languages,
            Err(err) => {
                warn!(project = %project.name, error = %err, "language lookup failed");
                LanguageBreakdown::new()
            }
        };
        breakdowns.push((project.name.clone(), languages));
    }
    breakdowns
}

/// Renders the full visuals view for a user's projects.
///
/// With no projects this prints the notice and stops: no chart is
/// drawn and no language data is fetched.
pub async fn render_project_visuals(
    directory: &dyn GitlabDirectory,
    projects: &[Project],
) -> Result<()> {
    println!();
    println!("{}", "Project Visualizations".bold());

    if projects.is_empty() {
        println!(
            "{}",
            "No projects found that are visible to you.".yellow()
        );
        return Ok(());
    }

    let series = popularity::popularity_series(projects);
    with_surface(BAR_CHART_HEIGHT, |frame| {
        popularity::draw_popularity(frame, &series)
    })?;

    println!(
        "{}",
        "Fetching language data for each project... this may take a moment.".bright_black()
    );

    let breakdowns = collect_language_breakdowns(directory, capped_projects(projects)).await;
    for row in breakdowns.chunks(GRID_COLUMNS) {
        with_surface(languages::row_height(row), |frame| {
            languages::draw_language_row(frame, row)
        })?;
    }

    Ok(())
}
