// GitHub API endpoint functions.
// Typed fetches for the profile, its repository list, and the avatar image.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{LauncherError, Result};

use super::client::GitHubClient;
use super::types::{Repository, UserProfile};

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, username: &str) -> Result<UserProfile> {
        let url = format!("{}/users/{}", self.api_base(), username);
        let payload = self.get_json(&url).await?;
        decode(&url, payload)
    }

    /// Get the repository list at the profile's `repos_url`, in API order.
    pub async fn get_repos(&self, repos_url: &str) -> Result<Vec<Repository>> {
        let payload = self.get_json(repos_url).await?;
        decode(repos_url, payload)
    }

    /// Download the avatar image bytes.
    pub async fn get_avatar(&self, avatar_url: &str) -> Result<Vec<u8>> {
        self.get_bytes(avatar_url).await
    }
}

fn decode<T: DeserializeOwned>(url: &str, payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| LauncherError::RemoteInvalidResponse {
        url: url.to_string(),
        message: format!("unexpected payload: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    use super::*;

    fn client_for(server: &MockServer) -> GitHubClient {
        GitHubClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_get_user_sends_github_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/Vianpyro"))
            .and(header("accept", "application/vnd.github+json"))
            .and(header("user-agent", "pages-launcher"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "login": "Vianpyro",
                "avatar_url": "https://avatars.example/u/1",
                "repos_url": format!("{}/users/Vianpyro/repos", server.uri()),
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server).get_user("Vianpyro").await.unwrap();
        assert_eq!(user.avatar_url, "https://avatars.example/u/1");
        assert_eq!(user.extra["login"], "Vianpyro");
    }

    #[tokio::test]
    async fn test_message_payload_is_invalid_even_with_ok_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ghost"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Bad credentials"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).get_user("ghost").await.unwrap_err();
        match err {
            LauncherError::RemoteInvalidResponse { message, .. } => {
                assert_eq!(message, "Bad credentials")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_profile_without_repos_url_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/partial"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"avatar_url": "https://a/1"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).get_user("partial").await.unwrap_err();
        assert!(matches!(err, LauncherError::RemoteInvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_request_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/html"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_user("html").await.unwrap_err();
        assert!(matches!(err, LauncherError::RemoteRequestFailed { .. }));
        assert!(err.report().contains("expected value"), "{}", err.report());
    }

    #[tokio::test]
    async fn test_get_repos_keeps_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/Vianpyro/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "b_repo", "id": 2},
                {"name": "a_repo", "id": 1}
            ])))
            .mount(&server)
            .await;

        let url = format!("{}/users/Vianpyro/repos", server.uri());
        let repos = client_for(&server).get_repos(&url).await.unwrap();
        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["b_repo", "a_repo"]);
    }

    #[tokio::test]
    async fn test_get_avatar_returns_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/u/1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
            .mount(&server)
            .await;

        let url = format!("{}/u/1", server.uri());
        let bytes = client_for(&server).get_avatar(&url).await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }
}
