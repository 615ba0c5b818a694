//! Screen-level data for the gallery browser.
//!
//! - [`aggregate`]: per-screen fetch-and-join routines over a
//!   [`DataSource`](gallery_core::source::DataSource).
//! - [`Gallery`]: owns the data source and one query cache per screen, and
//!   applies the stale-time policy.
//! - [`AlbumFeedSession`]: drives an album's "load more" photo feed through
//!   the gallery's album-page query.

pub mod aggregate;
pub mod feed;
pub mod gallery;

pub use feed::AlbumFeedSession;
pub use gallery::{ConnectError, Gallery, GalleryConfig};
