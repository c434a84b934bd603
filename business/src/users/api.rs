//! Remote users collection client.
//!
//! Four calls against one resource URL: GET the collection, POST to it, PUT and
//! DELETE one record by id. Nothing is retried and no timeout is applied; callers
//! map results into compute updates.

use log::{debug, info};
use thiserror::Error;

use super::model::{UserFields, UserRecord};
use crate::http::{Client, HttpError, Response};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsersApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Failed to parse {what}: {message}")]
    Decode { what: &'static str, message: String },
}

impl From<HttpError> for UsersApiError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, UsersApiError>;

fn ensure_success(response: &Response) -> ApiResult<()> {
    if response.is_success() {
        return Ok(());
    }

    debug!("non-success response body: {}", response.text());
    Err(UsersApiError::Status(response.status))
}

/// GET `{collection}`
pub async fn list_users(collection_url: &str) -> ApiResult<Vec<UserRecord>> {
    let response = Client::get(collection_url).send().await?;
    ensure_success(&response)?;

    let users: Vec<UserRecord> = response.json().map_err(|e| UsersApiError::Decode {
        what: "user list",
        message: e.to_string(),
    })?;

    debug!("list_users: {} records from {collection_url}", users.len());
    Ok(users)
}

/// POST `{collection}`
/// Body: `{ "name": "...", "avatar": "..." }`
pub async fn create_user(collection_url: &str, fields: &UserFields) -> ApiResult<()> {
    let response = Client::post(collection_url).json(fields)?.send().await?;
    ensure_success(&response)?;

    info!("create_user: '{}' accepted ({})", fields.name, response.status);
    Ok(())
}

/// PUT `{collection}/{id}`
/// Body: `{ "name": "...", "avatar": "..." }`
pub async fn update_user(record_url: &str, fields: &UserFields) -> ApiResult<()> {
    let response = Client::put(record_url).json(fields)?.send().await?;
    ensure_success(&response)?;

    info!("update_user: {record_url} accepted ({})", response.status);
    Ok(())
}

/// DELETE `{collection}/{id}`
pub async fn delete_user(record_url: &str) -> ApiResult<()> {
    let response = Client::delete(record_url).send().await?;
    ensure_success(&response)?;

    info!("delete_user: {record_url} accepted ({})", response.status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const COLLECTION: &str = "/users/users";

    fn fields() -> UserFields {
        UserFields::new("Ada", "https://example.com/ada.png").expect("valid fields")
    }

    #[tokio::test]
    async fn test_list_users_parses_records_in_remote_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(COLLECTION))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": "2", "name": "Bob", "avatar": "b", "createdAt": "2025-01-02T00:00:00Z" },
                { "id": "1", "name": "Ada", "avatar": "a", "createdAt": "2025-01-01T00:00:00Z" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let users = list_users(&format!("{}{COLLECTION}", server.uri()))
            .await
            .expect("list succeeds");

        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[tokio::test]
    async fn test_list_users_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(COLLECTION))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = list_users(&format!("{}{COLLECTION}", server.uri()))
            .await
            .expect_err("500 is an error");

        assert_eq!(err, UsersApiError::Status(500));
        assert_eq!(err.to_string(), "API returned status: 500");
    }

    #[tokio::test]
    async fn test_list_users_reports_bad_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(COLLECTION))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = list_users(&format!("{}{COLLECTION}", server.uri()))
            .await
            .expect_err("body is not a list");

        assert!(matches!(err, UsersApiError::Decode { what: "user list", .. }));
    }

    #[tokio::test]
    async fn test_create_user_posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(COLLECTION))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "name": "Ada",
                "avatar": "https://example.com/ada.png"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "9", "name": "Ada", "avatar": "https://example.com/ada.png"
            })))
            .expect(1)
            .mount(&server)
            .await;

        create_user(&format!("{}{COLLECTION}", server.uri()), &fields())
            .await
            .expect("create succeeds");
    }

    #[tokio::test]
    async fn test_update_user_puts_to_record_url() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("{COLLECTION}/7")))
            .and(body_json(serde_json::json!({
                "name": "Ada",
                "avatar": "https://example.com/ada.png"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        update_user(&format!("{}{COLLECTION}/7", server.uri()), &fields())
            .await
            .expect("update succeeds");
    }

    #[tokio::test]
    async fn test_delete_user_reports_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("{COLLECTION}/404")))
            .respond_with(ResponseTemplate::new(404).set_body_string("\"Not found\""))
            .expect(1)
            .mount(&server)
            .await;

        let err = delete_user(&format!("{}{COLLECTION}/404", server.uri()))
            .await
            .expect_err("404 is an error");

        assert_eq!(err, UsersApiError::Status(404));
    }

    #[tokio::test]
    async fn test_transport_error_when_server_is_gone() {
        let server = MockServer::start().await;
        let url = format!("{}{COLLECTION}", server.uri());
        drop(server);

        let err = list_users(&url).await.expect_err("nothing is listening");

        assert!(matches!(err, UsersApiError::Transport(_)));
    }
}
