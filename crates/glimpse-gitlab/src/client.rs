//! reqwest implementation of the GitLab directory.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use glimpse_core::config::Config;
use glimpse_core::error::{GlimpseError, Result};
use glimpse_core::gitlab::{GitlabDirectory, LanguageBreakdown, Project, UserProfile};

/// Fixed page size for the project listing; there is no further
/// pagination by design.
const PROJECTS_PER_PAGE: &str = "100";

/// Client for the GitLab v4 REST API.
///
/// Holds one shared reqwest client and the bearer credential read once
/// from process configuration. No retries, and no timeout beyond the
/// transport default.
#[derive(Clone)]
pub struct GitlabClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GitlabClient {
    /// Creates a client for the configured GitLab instance.
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v4/{}", self.base_url, path)
    }

    /// Issues an authenticated GET and decodes the JSON body.
    async fn get_json<T>(&self, url: String, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GlimpseError::status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GitlabDirectory for GitlabClient {
    async fn resolve_user(&self, username: &str) -> Result<Option<UserProfile>> {
        debug!(username, "resolving user");
        let users: Vec<UserProfile> = self
            .get_json(self.endpoint("users"), &[("username", username)])
            .await?;
        // The filtered query may match several accounts; only the first
        // is consumed. Duplicate usernames are not expected upstream.
        Ok(users.into_iter().next())
    }

    async fn list_projects(&self, user_id: u64) -> Result<Vec<Project>> {
        debug!(user_id, "listing projects");
        self.get_json(
            self.endpoint(&format!("users/{user_id}/projects")),
            &[("statistics", "true"), ("per_page", PROJECTS_PER_PAGE)],
        )
        .await
    }

    async fn get_languages(&self, project_id: u64) -> Result<LanguageBreakdown> {
        debug!(project_id, "fetching language breakdown");
        self.get_json(self.endpoint(&format!("projects/{project_id}/languages")), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(server: &Server) -> GitlabClient {
        GitlabClient::new(&Config::new(server.url(), "test-token"))
    }

    #[tokio::test]
    async fn test_resolve_user_takes_first_match() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v4/users")
            .match_query(Matcher::UrlEncoded("username".into(), "alice".into()))
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {"id": 42, "username": "alice", "name": "Alice A", "state": "active"},
                    {"id": 43, "username": "alice", "name": "Other Alice", "state": "blocked"}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let user = client_for(&server)
            .resolve_user("alice")
            .await
            .unwrap()
            .expect("first match expected");

        mock.assert_async().await;
        assert_eq!(user.id, 42);
        assert_eq!(user.name, "Alice A");
    }

    #[tokio::test]
    async fn test_resolve_user_empty_result_is_none() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v4/users")
            .match_query(Matcher::UrlEncoded("username".into(), "nobody".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let user = client_for(&server).resolve_user("nobody").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_resolve_user_server_error_is_typed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v4/users")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let err = client_for(&server)
            .resolve_user("alice")
            .await
            .expect_err("500 must surface as an error");
        assert_eq!(err, GlimpseError::Status { status: 500 });
    }

    #[tokio::test]
    async fn test_list_projects_sends_statistics_and_page_size() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v4/users/42/projects")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("statistics".into(), "true".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {"id": 1, "name": "one", "star_count": 5, "forks_count": 2,
                     "statistics": {"commit_count": 17}},
                    {"id": 2, "name": "two", "statistics": "garbage"}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let projects = client_for(&server).list_projects(42).await.unwrap();

        mock.assert_async().await;
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].commit_count(), 17);
        // Malformed statistics degrade to zero rather than failing the page
        assert_eq!(projects[1].commit_count(), 0);
    }

    #[tokio::test]
    async fn test_list_projects_transport_error_is_typed() {
        // Point at a closed port; the connection is refused.
        let client = GitlabClient::new(&Config::new("http://127.0.0.1:1", "tok"));
        let err = client.list_projects(42).await.expect_err("must not panic");
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_get_languages_decodes_breakdown() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v4/projects/7/languages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"Rust": 61.2, "Shell": 38.8}).to_string())
            .create_async()
            .await;

        let languages = client_for(&server).get_languages(7).await.unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages.get("Rust"), Some(&61.2));
    }

    #[tokio::test]
    async fn test_get_languages_not_found_is_typed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v4/projects/7/languages")
            .with_status(404)
            .create_async()
            .await;

        let err = client_for(&server).get_languages(7).await.unwrap_err();
        assert_eq!(err, GlimpseError::Status { status: 404 });
    }
}
