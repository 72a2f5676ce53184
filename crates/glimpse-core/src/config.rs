//! Process configuration.
//!
//! The GitLab endpoint and bearer token are read once from the
//! environment at startup. Absence is deliberately not validated here:
//! requests issued with an empty endpoint or token simply fail and are
//! handled by the fail-soft policy at the API boundary.

use std::env;

/// Environment variable holding the GitLab instance base URL.
pub const ENV_GITLAB_URL: &str = "GITLAB_URL";

/// Environment variable holding the GitLab API bearer token.
pub const ENV_GITLAB_TOKEN: &str = "GITLAB_API_TOKEN";

/// Connection settings for the GitLab REST API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the GitLab instance (e.g. `https://gitlab.example.com`)
    pub base_url: String,
    /// Bearer token attached to every API request
    pub token: String,
}

impl Config {
    /// Creates a config from explicit values, normalizing the base URL.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: token.into(),
        }
    }

    /// Loads the config from `GITLAB_URL` and `GITLAB_API_TOKEN`.
    ///
    /// Missing variables become empty strings; the resulting requests
    /// fail and degrade to the "no data" outcome downstream.
    pub fn from_env() -> Self {
        Self::new(
            env::var(ENV_GITLAB_URL).unwrap_or_default(),
            env::var(ENV_GITLAB_TOKEN).unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slashes() {
        let config = Config::new("https://gitlab.example.com//", "tok");
        assert_eq!(config.base_url, "https://gitlab.example.com");
        assert_eq!(config.token, "tok");
    }

    #[test]
    fn test_empty_values_are_tolerated() {
        let config = Config::new("", "");
        assert_eq!(config, Config::default());
    }
}
