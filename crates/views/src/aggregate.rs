//! Fetch-and-join routines, one per screen.
//!
//! Each routine issues its upstream requests concurrently and fails as a
//! whole if any of them fails; a partial join is never returned.

use gallery_core::error::FetchError;
use gallery_core::join::enrich_users;
use gallery_core::models::{AlbumPage, EnrichedUser, UserProfile};
use gallery_core::source::DataSource;
use gallery_core::types::DbId;

/// Users with their todo and album counts, in upstream order.
pub async fn get_user_list(source: &dyn DataSource) -> Result<Vec<EnrichedUser>, FetchError> {
    let (users, todos, albums) =
        tokio::try_join!(source.users(), source.todos(), source.albums())?;

    tracing::debug!(
        users = users.len(),
        todos = todos.len(),
        albums = albums.len(),
        "Joining user list",
    );

    Ok(enrich_users(users, &todos, &albums))
}

/// One user and the albums they own.
pub async fn get_user_profile(
    source: &dyn DataSource,
    user_id: DbId,
) -> Result<UserProfile, FetchError> {
    let (user, albums) = tokio::try_join!(source.user(user_id), source.user_albums(user_id))?;
    Ok(UserProfile { user, albums })
}

/// One album and the window `[start, start + limit)` of its photos.
///
/// A window shorter than `limit` means the feed is exhausted.
pub async fn get_album_page(
    source: &dyn DataSource,
    album_id: DbId,
    start: usize,
    limit: usize,
) -> Result<AlbumPage, FetchError> {
    let (album, photos) = tokio::try_join!(
        source.album(album_id),
        source.album_photos(album_id, start, limit)
    )?;
    Ok(AlbumPage { album, photos })
}
