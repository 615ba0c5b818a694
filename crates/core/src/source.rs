//! Read-only port onto the remote data source.
//!
//! One method per upstream endpoint. `gallery-source` provides the HTTP
//! implementation; tests plug in in-memory fixtures.

use crate::error::FetchError;
use crate::models::{Album, Photo, Todo, User};
use crate::types::DbId;

#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// `GET /users`
    async fn users(&self) -> Result<Vec<User>, FetchError>;

    /// `GET /users/{id}`; [`FetchError::NotFound`] for an unknown id.
    async fn user(&self, id: DbId) -> Result<User, FetchError>;

    /// `GET /users/{id}/albums`
    async fn user_albums(&self, user_id: DbId) -> Result<Vec<Album>, FetchError>;

    /// `GET /todos`
    async fn todos(&self) -> Result<Vec<Todo>, FetchError>;

    /// `GET /albums`
    async fn albums(&self) -> Result<Vec<Album>, FetchError>;

    /// `GET /albums/{id}`; [`FetchError::NotFound`] for an unknown id.
    async fn album(&self, id: DbId) -> Result<Album, FetchError>;

    /// `GET /photos?albumId={id}&_start={start}&_limit={limit}`
    async fn album_photos(
        &self,
        album_id: DbId,
        start: usize,
        limit: usize,
    ) -> Result<Vec<Photo>, FetchError>;
}
