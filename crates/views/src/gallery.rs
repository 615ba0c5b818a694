//! The gallery facade the presentation layer talks to.
//!
//! [`Gallery`] bundles the data source, a query cache per screen, and the
//! stale-time policy. Views call one method per screen and render the
//! result, or poll the matching `*_state` method for the loading/error/data
//! tri-state.

use std::sync::Arc;
use std::time::Duration;

use gallery_core::clock::{Clock, SystemClock};
use gallery_core::error::FetchError;
use gallery_core::keys::QueryKey;
use gallery_core::models::{AlbumPage, EnrichedUser, UserProfile};
use gallery_core::pagination::PHOTO_PAGE_SIZE;
use gallery_core::source::DataSource;
use gallery_core::types::DbId;
use gallery_query::{QueryCache, QueryState, DEFAULT_STALE_TIME};
use gallery_source::{HttpDataSource, SourceConfig};

use crate::aggregate;

/// Staleness window for album pages. Rapid re-renders of the same window
/// reuse the cached page instead of refetching.
pub const ALBUM_PAGE_STALE_TIME: Duration = Duration::from_secs(5);

/// Failure to set up the gallery's data source.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Cache and paging policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Staleness for the user list and profile queries.
    pub default_stale: Duration,
    /// Staleness for album-page queries.
    pub album_page_stale: Duration,
    /// Photos per album page.
    pub page_size: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_stale: DEFAULT_STALE_TIME,
            album_page_stale: ALBUM_PAGE_STALE_TIME,
            page_size: PHOTO_PAGE_SIZE,
        }
    }
}

/// Cached, deduplicated access to the three screens.
///
/// Cheap to clone; clones share caches and data source.
#[derive(Clone)]
pub struct Gallery {
    source: Arc<dyn DataSource>,
    config: GalleryConfig,
    user_lists: QueryCache<QueryKey, Arc<Vec<EnrichedUser>>>,
    profiles: QueryCache<QueryKey, Arc<UserProfile>>,
    album_pages: QueryCache<QueryKey, Arc<AlbumPage>>,
}

impl Gallery {
    /// Gallery over `source` with the wall clock and default policy.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self::with_clock(source, Arc::new(SystemClock), GalleryConfig::default())
    }

    /// Gallery over the HTTP data source described by `config`.
    pub fn connect(config: &SourceConfig) -> Result<Self, ConnectError> {
        let source = HttpDataSource::new(config)?;
        tracing::info!(api_url = %config.api_url, "Gallery data source configured");
        Ok(Self::new(Arc::new(source)))
    }

    /// Full control over clock and policy; used by tests.
    pub fn with_clock(
        source: Arc<dyn DataSource>,
        clock: Arc<dyn Clock>,
        config: GalleryConfig,
    ) -> Self {
        Self {
            source,
            config,
            user_lists: QueryCache::new(Arc::clone(&clock)),
            profiles: QueryCache::new(Arc::clone(&clock)),
            album_pages: QueryCache::new(clock),
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Photos per album page.
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    // ---- screens ----

    /// The user list screen.
    pub async fn user_list(&self) -> Result<Arc<Vec<EnrichedUser>>, FetchError> {
        let source = Arc::clone(&self.source);
        self.user_lists
            .query(
                QueryKey::user_list(),
                move || async move {
                    aggregate::get_user_list(source.as_ref())
                        .await
                        .map(Arc::new)
                },
                self.config.default_stale,
            )
            .await
    }

    /// The profile screen for `user_id`.
    pub async fn user_profile(&self, user_id: DbId) -> Result<Arc<UserProfile>, FetchError> {
        let source = Arc::clone(&self.source);
        self.profiles
            .query(
                QueryKey::user_profile(user_id),
                move || async move {
                    aggregate::get_user_profile(source.as_ref(), user_id)
                        .await
                        .map(Arc::new)
                },
                self.config.default_stale,
            )
            .await
    }

    /// One window of the album screen's photo feed.
    pub async fn album_page(
        &self,
        album_id: DbId,
        start: usize,
        limit: usize,
    ) -> Result<Arc<AlbumPage>, FetchError> {
        let source = Arc::clone(&self.source);
        self.album_pages
            .query(
                QueryKey::album_page(album_id, start, limit),
                move || async move {
                    aggregate::get_album_page(source.as_ref(), album_id, start, limit)
                        .await
                        .map(Arc::new)
                },
                self.config.album_page_stale,
            )
            .await
    }

    // ---- tri-state ----

    pub async fn user_list_state(&self) -> QueryState<Arc<Vec<EnrichedUser>>> {
        self.user_lists.state(&QueryKey::user_list()).await
    }

    pub async fn user_profile_state(&self, user_id: DbId) -> QueryState<Arc<UserProfile>> {
        self.profiles.state(&QueryKey::user_profile(user_id)).await
    }

    pub async fn album_page_state(
        &self,
        album_id: DbId,
        start: usize,
        limit: usize,
    ) -> QueryState<Arc<AlbumPage>> {
        self.album_pages
            .state(&QueryKey::album_page(album_id, start, limit))
            .await
    }

    /// Drop every settled entry in every screen cache.
    pub async fn clear(&self) {
        self.user_lists.clear().await;
        self.profiles.clear().await;
        self.album_pages.clear().await;
    }
}
