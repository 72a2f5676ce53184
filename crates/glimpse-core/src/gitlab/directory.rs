//! GitLab directory service trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::gitlab::model::{LanguageBreakdown, Project, UserProfile};

/// Read-only directory of users, projects, and language statistics.
///
/// The three operations map 1:1 onto the GitLab v4 REST endpoints the
/// profiler consumes. Implementations return typed errors; the UI layer
/// collapses them into empty values (fail-soft by design), so callers
/// of an implementation must never see a panic.
#[async_trait]
pub trait GitlabDirectory: Send + Sync {
    /// Resolves a username to its profile.
    ///
    /// The upstream endpoint answers a filtered query with an array;
    /// only the first element is taken. An empty match set is `Ok(None)`.
    async fn resolve_user(&self, username: &str) -> Result<Option<UserProfile>>;

    /// Lists up to one fixed page (100) of the user's projects, with
    /// statistics embedded.
    async fn list_projects(&self, user_id: u64) -> Result<Vec<Project>>;

    /// Fetches the language-percentage breakdown of a single project.
    async fn get_languages(&self, project_id: u64) -> Result<LanguageBreakdown>;
}
