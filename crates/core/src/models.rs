//! Upstream record shapes and the view models derived from them.
//!
//! Field names follow the upstream JSON (`userId`, `thumbnailUrl`, ...) via
//! `rename_all = "camelCase"`. Fields the screens never read are ignored on
//! deserialization.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Upstream records
// ---------------------------------------------------------------------------

/// Company block nested inside a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// A user as returned by `GET /users` and `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    /// Display name, shown as the profile heading.
    #[serde(default)]
    pub name: String,
    pub username: String,
    pub email: String,
    pub website: String,
    pub company: Company,
}

impl User {
    /// Link target for the user's website.
    ///
    /// Upstream stores a bare host (`hildegard.org`), so the scheme is added
    /// here.
    pub fn website_url(&self) -> String {
        format!("http://{}", self.website)
    }
}

/// A todo item. Only used to count todos per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: DbId,
    pub user_id: DbId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// An album, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
}

/// A photo, belonging to exactly one album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: DbId,
    pub album_id: DbId,
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub thumbnail_url: String,
}

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// A [`User`] plus the per-user counts shown on the user list.
///
/// Recomputed on every fetch; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedUser {
    #[serde(flatten)]
    pub user: User,
    pub todo_count: usize,
    pub album_count: usize,
}

/// Data behind the profile screen: one user and the albums they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub user: User,
    pub albums: Vec<Album>,
}

/// One window of an album's photo feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumPage {
    pub album: Album,
    pub photos: Vec<Photo>,
}

impl AlbumPage {
    /// A page shorter than the requested limit is the last one.
    pub fn is_exhausted(&self, limit: usize) -> bool {
        self.photos.len() < limit
    }
}
