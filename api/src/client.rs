//! HTTP client for the user-management backend.

use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{CreateUser, UpdateUser, User};

/// Fallback when a rejection carries no usable `detail` body.
const GENERIC_REJECTION: &str = "The request was rejected by the server.";

/// Structured error body the backend sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the `{base}/users` REST surface.
///
/// Holds the backend base URL explicitly; construct one per backend and hand
/// it to the views (the app shares a single instance via context).
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given backend. Trailing slashes on the base
    /// URL are normalized away so joined paths stay clean.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: i64) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// Fetch the full user collection, in server order.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.http.get(self.users_url()).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Create a user. On a non-2xx response the backend's `detail` message is
    /// surfaced in [`ApiError::Rejected`].
    pub async fn create_user(&self, user: &CreateUser) -> Result<User, ApiError> {
        let response = self.http.post(self.users_url()).json(user).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Partially update a user. Only the keys present in `changes` are sent.
    pub async fn update_user(&self, id: i64, changes: &UpdateUser) -> Result<User, ApiError> {
        let response = self
            .http
            .patch(self.user_url(id))
            .json(changes)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Delete a user. The response status is deliberately not inspected: the
    /// caller re-fetches the list either way, so only a transport-level
    /// failure is an error here.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.http.delete(self.user_url(id)).send().await?;
        Ok(())
    }

    /// Map a non-2xx response to [`ApiError::Rejected`], pulling the message
    /// out of the `{detail}` body when there is one.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| GENERIC_REJECTION.to_string());
        tracing::warn!(status = status.as_u16(), %detail, "backend rejected request");
        Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserDraft;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8000///");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.users_url(), "http://localhost:8000/users");
        assert_eq!(client.user_url(7), "http://localhost:8000/users/7");
    }

    #[tokio::test]
    async fn list_users_preserves_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "email": "b@x.com", "first_name": "B", "last_name": "Y"},
                {"id": 1, "email": "a@x.com", "first_name": "A", "last_name": "X"},
            ])))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let users = client.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 2);
        assert_eq!(users[1].email, "a@x.com");
    }

    #[tokio::test]
    async fn create_surfaces_backend_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"detail": "email already exists"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let draft = UserDraft {
            email: "a@x.com".into(),
            first_name: "A".into(),
            last_name: "X".into(),
            password: "secret".into(),
        };
        let err = client.create_user(&draft.create_payload()).await.unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(err.detail(), Some("email already exists"));
    }

    #[tokio::test]
    async fn rejection_without_detail_falls_back_to_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let draft = UserDraft {
            email: "a@x.com".into(),
            first_name: "A".into(),
            last_name: "X".into(),
            password: "secret".into(),
        };
        let err = client.create_user(&draft.create_payload()).await.unwrap_err();
        assert_eq!(err.detail(), Some(GENERIC_REJECTION));
    }

    #[tokio::test]
    async fn update_with_blank_password_sends_no_password_key() {
        let server = MockServer::start().await;
        let user = User {
            id: 7,
            email: "a@x.com".into(),
            first_name: "A".into(),
            last_name: "X".into(),
        };
        // Exact-match body: a password key would fail the match and 404.
        Mock::given(method("PATCH"))
            .and(path("/users/7"))
            .and(body_json(json!({
                "email": "a@x.com",
                "first_name": "A",
                "last_name": "X",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7, "email": "a@x.com", "first_name": "A", "last_name": "X",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let draft = UserDraft::seeded_from(&user);
        let updated = client.update_user(7, &draft.update_payload()).await.unwrap();
        assert_eq!(updated, user);
    }

    #[tokio::test]
    async fn update_with_new_password_sends_it() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/users/7"))
            .and(body_json(json!({
                "email": "a@x.com",
                "first_name": "A",
                "last_name": "X",
                "password": "hunter2",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7, "email": "a@x.com", "first_name": "A", "last_name": "X",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let draft = UserDraft {
            email: "a@x.com".into(),
            first_name: "A".into(),
            last_name: "X".into(),
            password: "hunter2".into(),
        };
        client.update_user(7, &draft.update_payload()).await.unwrap();
    }

    #[tokio::test]
    async fn delete_ignores_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/3"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        assert!(client.delete_user(3).await.is_ok());
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_failure() {
        // Nothing listens on port 1.
        let client = ApiClient::new("http://127.0.0.1:1");
        let err = client.list_users().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.detail().is_none());
    }
}
