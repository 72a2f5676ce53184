//! Terminal views for the profiler.
//!
//! Pure view-model construction (card lines, chart series, pie slices)
//! is kept separate from the drawing glue so the interesting parts are
//! testable without a terminal.

pub mod languages;
pub mod popularity;
pub mod profile;
pub mod surface;
pub mod visuals;

pub use profile::render_profile;
pub use visuals::render_project_visuals;
