//! REST client for the fixture API.
//!
//! Wraps the read-only endpoints (users, todos, albums, photos) using
//! [`reqwest`] and maps every failure onto [`FetchError`].

use gallery_core::error::FetchError;
use gallery_core::models::{Album, Photo, Todo, User};
use gallery_core::source::DataSource;
use gallery_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::config::SourceConfig;

/// HTTP-backed [`DataSource`].
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: reqwest::Client,
    api_url: String,
}

impl HttpDataSource {
    /// Build a client with the configured timeout.
    pub fn new(config: &SourceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Reuse an existing [`reqwest::Client`] (shares its connection pool).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are issued against.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ---- private helpers ----

    /// `GET {api_url}{path}` and decode a JSON collection or object.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let response = self.send(path, query).await?;
        let response = Self::ensure_success(response, None).await?;
        Self::decode(response).await
    }

    /// `GET` a single resource, mapping a 404 onto [`FetchError::NotFound`].
    async fn get_one<T: DeserializeOwned>(
        &self,
        entity: &'static str,
        id: DbId,
        path: &str,
    ) -> Result<T, FetchError> {
        let response = self.send(path, &[]).await?;
        let response = Self::ensure_success(response, Some((entity, id))).await?;
        Self::decode(response).await
    }

    async fn send(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, FetchError> {
        let url = format!("{}{}", self.api_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;

        tracing::debug!(url = %url, status = response.status().as_u16(), "Fetched");
        Ok(response)
    }

    /// Return the response unchanged on a 2xx status, otherwise turn it
    /// into an error carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
        single: Option<(&'static str, DbId)>,
    ) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some((entity, id)) = single {
                return Err(FetchError::NotFound { entity, id });
            }
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(FetchError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
        response.json::<T>().await.map_err(transport_error)
    }
}

/// Classify a `reqwest` failure.
fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_decode() {
        FetchError::Decode(err.to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[async_trait::async_trait]
impl DataSource for HttpDataSource {
    async fn users(&self) -> Result<Vec<User>, FetchError> {
        self.get_json("/users", &[]).await
    }

    async fn user(&self, id: DbId) -> Result<User, FetchError> {
        self.get_one("user", id, &format!("/users/{id}")).await
    }

    async fn user_albums(&self, user_id: DbId) -> Result<Vec<Album>, FetchError> {
        self.get_json(&format!("/users/{user_id}/albums"), &[]).await
    }

    async fn todos(&self) -> Result<Vec<Todo>, FetchError> {
        self.get_json("/todos", &[]).await
    }

    async fn albums(&self) -> Result<Vec<Album>, FetchError> {
        self.get_json("/albums", &[]).await
    }

    async fn album(&self, id: DbId) -> Result<Album, FetchError> {
        self.get_one("album", id, &format!("/albums/{id}")).await
    }

    async fn album_photos(
        &self,
        album_id: DbId,
        start: usize,
        limit: usize,
    ) -> Result<Vec<Photo>, FetchError> {
        let query = [
            ("albumId", album_id.to_string()),
            ("_start", start.to_string()),
            ("_limit", limit.to_string()),
        ];
        self.get_json("/photos", &query).await
    }
}
