//! GitLab domain models.
//!
//! These are the parsed shapes of the three read-only endpoints the
//! profiler consumes: user lookup, project listing with statistics,
//! and per-project language breakdowns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user profile as returned by `GET /api/v4/users?username=...`.
///
/// Immutable once fetched; a new lookup replaces the profile wholesale.
/// Fields the profiler does not interpret are captured in `extra` so
/// the raw-record view can show the complete server document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-assigned unique id
    pub id: u64,
    /// Login name used for the lookup
    pub username: String,
    /// Display name
    pub name: String,
    /// Account state ("active", "blocked", ...); an open server-defined set
    #[serde(default)]
    pub state: String,
    /// Avatar image URL, when the account has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Account creation timestamp (ISO 8601); absent for non-admin callers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Link to the profile page on the GitLab instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    /// All remaining server-defined fields, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Commit statistics embedded in a project listing (`statistics=true`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectStatistics {
    /// Total number of commits on the default branch
    #[serde(default)]
    pub commit_count: u64,
}

/// A project owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned unique id
    pub id: u64,
    /// Project name
    pub name: String,
    /// Star count, never negative
    #[serde(default)]
    pub star_count: u64,
    /// Fork count, never negative
    #[serde(default)]
    pub forks_count: u64,
    /// Embedded statistics; absent or malformed payloads read as `None`
    #[serde(default, deserialize_with = "lenient_statistics")]
    pub statistics: Option<ProjectStatistics>,
}

impl Project {
    /// Commit count of this project, 0 when statistics are missing.
    pub fn commit_count(&self) -> u64 {
        self.statistics
            .as_ref()
            .map(|stats| stats.commit_count)
            .unwrap_or(0)
    }
}

/// Mapping from language name to percentage of the project's code
/// (0-100). For a well-formed project the values sum to ~100, but the
/// client does not validate this.
pub type LanguageBreakdown = BTreeMap<String, f64>;

/// Accepts any JSON shape for `statistics` and degrades everything
/// that is not a well-formed statistics object to `None`, so a single
/// odd project cannot fail the whole listing.
fn lenient_statistics<'de, D>(deserializer: D) -> Result<Option<ProjectStatistics>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
