//! Album screen session: header plus an incrementally loaded photo feed.

use gallery_core::error::FetchError;
use gallery_core::models::{Album, Photo};
use gallery_core::pagination::PhotoFeed;
use gallery_core::types::DbId;

use crate::gallery::Gallery;

/// One album view session.
///
/// Pages are fetched through [`Gallery::album_page`], so re-opening the same
/// window inside the album-page staleness window is served from cache.
/// Switching albums resets the feed before any request for the new album
/// goes out.
pub struct AlbumFeedSession {
    gallery: Gallery,
    feed: PhotoFeed,
    album: Option<Album>,
    last_error: Option<FetchError>,
}

impl AlbumFeedSession {
    /// New session for `album_id`. Nothing is fetched until [`open`](Self::open).
    pub fn new(gallery: Gallery, album_id: DbId) -> Self {
        let feed = PhotoFeed::with_page_size(album_id, gallery.page_size());
        Self {
            gallery,
            feed,
            album: None,
            last_error: None,
        }
    }

    pub fn album_id(&self) -> DbId {
        self.feed.album_id()
    }

    /// Album header, once the first page has arrived.
    pub fn album(&self) -> Option<&Album> {
        self.album.as_ref()
    }

    /// Accumulated photos in arrival order.
    pub fn photos(&self) -> &[Photo] {
        self.feed.photos()
    }

    pub fn feed(&self) -> &PhotoFeed {
        &self.feed
    }

    /// Error from the most recent request, cleared by the next success.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Whether a "load more" action should be offered.
    pub fn can_load_more(&self) -> bool {
        self.feed.has_received_page() && self.feed.can_load_more()
    }

    /// Fetch the first page. Does nothing if it has already arrived.
    pub async fn open(&mut self) -> Result<(), FetchError> {
        match self.feed.request_first_page() {
            Some(start) => self.fetch(start).await.map(|_| ()),
            None => Ok(()),
        }
    }

    /// Fetch the next page.
    ///
    /// Returns the number of photos appended, or `None` when the feed is
    /// exhausted. Before the first page has arrived this opens the session
    /// instead.
    pub async fn load_more(&mut self) -> Result<Option<usize>, FetchError> {
        if !self.feed.has_received_page() {
            return match self.feed.request_first_page() {
                Some(start) => self.fetch(start).await.map(Some),
                None => Ok(None),
            };
        }

        match self.feed.load_more() {
            Some(start) => self.fetch(start).await.map(Some),
            None => {
                tracing::debug!(album_id = self.album_id(), "Photo feed exhausted");
                Ok(None)
            }
        }
    }

    /// Move the session to another album and fetch its first page.
    ///
    /// The cursor and accumulated photos are cleared first, so a failed
    /// fetch leaves an empty feed rather than the previous album's photos.
    pub async fn switch_album(&mut self, album_id: DbId) -> Result<(), FetchError> {
        tracing::debug!(from = self.album_id(), to = album_id, "Switching album");
        self.feed.reset(album_id);
        self.album = None;
        self.last_error = None;
        self.open().await
    }

    async fn fetch(&mut self, start: usize) -> Result<usize, FetchError> {
        let album_id = self.feed.album_id();
        let limit = self.feed.page_size();
        let pending = PendingPage(&mut self.feed);

        match self.gallery.album_page(album_id, start, limit).await {
            Ok(page) => {
                let count = page.photos.len();
                self.album = Some(page.album.clone());
                pending.0.page_arrived(page.photos.clone());
                self.last_error = None;
                tracing::debug!(album_id, start, count, "Photo page arrived");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(album_id, start, error = %e, "Photo page fetch failed");
                pending.0.page_failed();
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }
}

/// Rewinds the feed if a page request is dropped before it settles, so a
/// cancelled `open` or `load_more` can be issued again.
struct PendingPage<'a>(&'a mut PhotoFeed);

impl Drop for PendingPage<'_> {
    fn drop(&mut self) {
        if self.0.is_awaiting_page() {
            tracing::debug!(album_id = self.0.album_id(), "Photo page request cancelled");
            self.0.page_failed();
        }
    }
}
