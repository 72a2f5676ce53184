//! GitLab domain types and the API-client seam.

pub mod directory;
pub mod model;

pub use directory::GitlabDirectory;
pub use model::{LanguageBreakdown, Project, ProjectStatistics, UserProfile};
