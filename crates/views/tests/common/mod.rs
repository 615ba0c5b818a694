#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use gallery_core::error::FetchError;
use gallery_core::models::{Album, Company, Photo, Todo, User};
use gallery_core::source::DataSource;
use gallery_core::types::DbId;

/// In-memory [`DataSource`] that records every call and can be told to
/// fail specific endpoints or answer slowly.
#[derive(Default)]
pub struct FixtureSource {
    pub users: Vec<User>,
    pub todos: Vec<Todo>,
    pub albums: Vec<Album>,
    pub photos: Vec<Photo>,
    failing: HashSet<&'static str>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl FixtureSource {
    /// Users 1, 2 and 7; album 3 ("X", owned by user 7) has 25 photos.
    pub fn standard() -> Self {
        let users = vec![user(1, "Bret"), user(2, "Antonette"), user(7, "Elwyn.Skiles")];

        let todos = vec![todo(1, 1), todo(2, 1), todo(3, 1), todo(4, 2), todo(5, 99)];

        let albums = vec![
            album(1, 1, "quidem molestiae enim"),
            album(2, 1, "sunt qui excepturi"),
            album(3, 7, "X"),
            album(4, 2, "non esse culpa"),
        ];

        let mut photos = photos_for(3, 100, 25);
        photos.extend(photos_for(4, 200, 3));

        Self {
            users,
            todos,
            albums,
            photos,
            ..Default::default()
        }
    }

    /// Make `endpoint` (e.g. `"todos"`) fail with a 500.
    pub fn failing(mut self, endpoint: &'static str) -> Self {
        self.failing.insert(endpoint);
        self
    }

    /// Sleep this long before answering every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls whose label starts with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    async fn enter(&self, endpoint: &'static str, label: String) -> Result<(), FetchError> {
        self.calls.lock().unwrap().push(label);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(endpoint) {
            return Err(FetchError::Status {
                status: 500,
                body: format!("{endpoint} unavailable"),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DataSource for FixtureSource {
    async fn users(&self) -> Result<Vec<User>, FetchError> {
        self.enter("users", "users".into()).await?;
        Ok(self.users.clone())
    }

    async fn user(&self, id: DbId) -> Result<User, FetchError> {
        self.enter("user", format!("user:{id}")).await?;
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(FetchError::NotFound { entity: "user", id })
    }

    async fn user_albums(&self, user_id: DbId) -> Result<Vec<Album>, FetchError> {
        self.enter("user_albums", format!("user_albums:{user_id}"))
            .await?;
        Ok(self
            .albums
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn todos(&self) -> Result<Vec<Todo>, FetchError> {
        self.enter("todos", "todos".into()).await?;
        Ok(self.todos.clone())
    }

    async fn albums(&self) -> Result<Vec<Album>, FetchError> {
        self.enter("albums", "albums".into()).await?;
        Ok(self.albums.clone())
    }

    async fn album(&self, id: DbId) -> Result<Album, FetchError> {
        self.enter("album", format!("album:{id}")).await?;
        self.albums
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(FetchError::NotFound { entity: "album", id })
    }

    async fn album_photos(
        &self,
        album_id: DbId,
        start: usize,
        limit: usize,
    ) -> Result<Vec<Photo>, FetchError> {
        self.enter("album_photos", format!("album_photos:{album_id}@{start}+{limit}"))
            .await?;
        Ok(self
            .photos
            .iter()
            .filter(|p| p.album_id == album_id)
            .skip(start)
            .take(limit)
            .cloned()
            .collect())
    }
}

pub fn user(id: DbId, username: &str) -> User {
    User {
        id,
        name: format!("{username} Name"),
        username: username.to_string(),
        email: format!("{}@example.com", username.to_lowercase()),
        website: format!("{}.example.org", username.to_lowercase()),
        company: Company {
            name: format!("Company {id}"),
        },
    }
}

pub fn todo(id: DbId, user_id: DbId) -> Todo {
    Todo {
        id,
        user_id,
        title: format!("todo {id}"),
        completed: id % 2 == 0,
    }
}

pub fn album(id: DbId, user_id: DbId, title: &str) -> Album {
    Album {
        id,
        user_id,
        title: title.to_string(),
    }
}

/// `count` photos for `album_id` with ids `first_id..first_id + count`.
pub fn photos_for(album_id: DbId, first_id: DbId, count: usize) -> Vec<Photo> {
    (0..count as DbId)
        .map(|i| {
            let id = first_id + i;
            Photo {
                id,
                album_id,
                title: format!("photo {id}"),
                url: format!("https://img.example/600/{id}"),
                thumbnail_url: format!("https://img.example/150/{id}"),
            }
        })
        .collect()
}
