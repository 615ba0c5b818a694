//! Incremental "load more" state for an album's photo feed.
//!
//! [`PhotoFeed`] tracks one album view session: the offset cursor, the
//! photos accumulated so far, and whether the feed looks exhausted. It does
//! no I/O; the caller fetches the window at the offset returned by
//! [`PhotoFeed::load_more`] and hands the result to
//! [`PhotoFeed::page_arrived`].

use crate::models::Photo;
use crate::types::DbId;

/// Number of photos requested per page.
pub const PHOTO_PAGE_SIZE: usize = 20;

/// Pagination state for one album view session.
#[derive(Debug, Clone)]
pub struct PhotoFeed {
    album_id: DbId,
    page_size: usize,
    offset: usize,
    accumulated: Vec<Photo>,
    /// Length of the most recently received page, `None` before the first.
    last_page_len: Option<usize>,
    /// Set between a request and the matching `page_arrived`.
    awaiting_page: bool,
    /// Offset to return to if the outstanding request fails.
    rewind_to: usize,
}

impl PhotoFeed {
    /// Start a session for `album_id` with the default page size.
    pub fn new(album_id: DbId) -> Self {
        Self::with_page_size(album_id, PHOTO_PAGE_SIZE)
    }

    /// Start a session with a custom page size. A zero page size is bumped
    /// to one so the cursor always advances.
    pub fn with_page_size(album_id: DbId, page_size: usize) -> Self {
        Self {
            album_id,
            page_size: page_size.max(1),
            offset: 0,
            accumulated: Vec::new(),
            last_page_len: None,
            awaiting_page: false,
            rewind_to: 0,
        }
    }

    pub fn album_id(&self) -> DbId {
        self.album_id
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Offset of the most recently requested window.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Photos received so far, in arrival order.
    pub fn photos(&self) -> &[Photo] {
        &self.accumulated
    }

    /// Whether a requested page has not arrived yet.
    pub fn is_awaiting_page(&self) -> bool {
        self.awaiting_page
    }

    /// A page shorter than the page size has been received.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.last_page_len, Some(len) if len < self.page_size)
    }

    /// Whether any page has arrived in this session.
    pub fn has_received_page(&self) -> bool {
        self.last_page_len.is_some()
    }

    /// Whether [`load_more`](Self::load_more) would advance the cursor.
    pub fn can_load_more(&self) -> bool {
        !self.awaiting_page && !self.is_exhausted()
    }

    /// Request the window at offset zero.
    ///
    /// Returns `Some(0)` once per session, before any page has arrived.
    pub fn request_first_page(&mut self) -> Option<usize> {
        if self.awaiting_page || self.has_received_page() {
            return None;
        }
        self.awaiting_page = true;
        self.rewind_to = self.offset;
        Some(self.offset)
    }

    /// Advance the cursor by one page.
    ///
    /// Returns the new offset to fetch, or `None` when the feed is exhausted
    /// or a previous request is still outstanding.
    pub fn load_more(&mut self) -> Option<usize> {
        if !self.can_load_more() {
            return None;
        }
        self.rewind_to = self.offset;
        self.offset += self.page_size;
        self.awaiting_page = true;
        Some(self.offset)
    }

    /// Append a received page in order. Photo ids are not de-duplicated.
    pub fn page_arrived(&mut self, photos: Vec<Photo>) {
        self.last_page_len = Some(photos.len());
        self.awaiting_page = false;
        self.accumulated.extend(photos);
    }

    /// The outstanding request failed. Rewinds the cursor so the same
    /// window is requested again next time.
    pub fn page_failed(&mut self) {
        if !self.awaiting_page {
            return;
        }
        self.awaiting_page = false;
        self.offset = self.rewind_to;
    }

    /// Start over for `album_id`: cursor back to zero, no photos.
    pub fn reset(&mut self, album_id: DbId) {
        *self = Self::with_page_size(album_id, self.page_size);
    }
}
