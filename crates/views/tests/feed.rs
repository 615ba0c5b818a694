//! Integration tests for the album photo feed session.

mod common;

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use common::FixtureSource;
use gallery_core::clock::ManualClock;
use gallery_core::error::FetchError;
use gallery_views::{AlbumFeedSession, Gallery, GalleryConfig};

fn session_over(source: &Arc<FixtureSource>, album_id: i64) -> AlbumFeedSession {
    let gallery = Gallery::with_clock(
        source.clone(),
        Arc::new(ManualClock::default()),
        GalleryConfig::default(),
    );
    AlbumFeedSession::new(gallery, album_id)
}

#[tokio::test]
async fn open_loads_first_page_and_header() {
    let source = Arc::new(FixtureSource::standard());
    let mut session = session_over(&source, 3);

    session.open().await.unwrap();

    assert_eq!(session.photos().len(), 20);
    assert_eq!(session.feed().offset(), 0);
    let album = session.album().unwrap();
    assert_eq!(album.title, "X");
    assert_eq!(album.user_id, 7);
    assert!(session.can_load_more());
}

#[tokio::test]
async fn open_twice_does_not_refetch_or_duplicate() {
    let source = Arc::new(FixtureSource::standard());
    let mut session = session_over(&source, 3);

    session.open().await.unwrap();
    session.open().await.unwrap();

    assert_eq!(session.photos().len(), 20);
    assert_eq!(source.count("album_photos"), 1);
}

#[tokio::test]
async fn load_more_until_exhausted() {
    let source = Arc::new(FixtureSource::standard());
    let mut session = session_over(&source, 3);
    session.open().await.unwrap();

    assert_eq!(session.load_more().await.unwrap(), Some(5));
    assert_eq!(session.photos().len(), 25);
    assert_eq!(session.feed().offset(), 20);
    assert!(session.feed().is_exhausted());
    assert!(!session.can_load_more());

    assert_eq!(session.load_more().await.unwrap(), None);
    let page_calls: Vec<String> = source
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("album_photos"))
        .collect();
    assert_eq!(page_calls, vec!["album_photos:3@0+20", "album_photos:3@20+20"]);
}

#[tokio::test]
async fn load_more_before_open_fetches_first_page() {
    let source = Arc::new(FixtureSource::standard());
    let mut session = session_over(&source, 4);

    assert_eq!(session.load_more().await.unwrap(), Some(3));
    assert_eq!(session.feed().offset(), 0);
    assert!(session.feed().is_exhausted());
}

#[tokio::test]
async fn photos_accumulate_in_order() {
    let source = Arc::new(FixtureSource::standard());
    let mut session = session_over(&source, 3);
    session.open().await.unwrap();
    session.load_more().await.unwrap();

    let ids: Vec<_> = session.photos().iter().map(|p| p.id).collect();
    let expected: Vec<i64> = (100..125).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn switching_album_resets_before_fetching() {
    let source = Arc::new(FixtureSource::standard());
    let mut session = session_over(&source, 3);
    session.open().await.unwrap();
    session.load_more().await.unwrap();

    session.switch_album(4).await.unwrap();

    assert_eq!(session.album_id(), 4);
    assert_eq!(session.feed().offset(), 0);
    assert_eq!(session.photos().len(), 3);
    assert!(session.photos().iter().all(|p| p.album_id == 4));
    assert_eq!(session.album().unwrap().id, 4);
    assert_eq!(source.calls().last().map(String::as_str), Some("album_photos:4@0+20"));
}

#[tokio::test]
async fn failed_switch_leaves_an_empty_feed() {
    let source = Arc::new(FixtureSource::standard());
    let mut session = session_over(&source, 3);
    session.open().await.unwrap();

    let result = session.switch_album(999).await;

    assert_matches!(result, Err(FetchError::NotFound { entity: "album", id: 999 }));
    assert_eq!(session.feed().offset(), 0);
    assert!(session.photos().is_empty());
    assert!(session.album().is_none());
    assert!(session.last_error().is_some());
    assert!(!session.feed().is_awaiting_page());
}

#[tokio::test]
async fn failed_page_can_be_retried() {
    let source = Arc::new(FixtureSource::standard().failing("album_photos"));
    let mut session = session_over(&source, 3);

    assert!(session.open().await.is_err());
    assert!(session.open().await.is_err());

    assert_eq!(source.count("album_photos:3@0+20"), 2);
    assert!(session.photos().is_empty());
}

#[tokio::test]
async fn cancelled_open_can_be_reissued() {
    let source = Arc::new(FixtureSource::standard().with_delay(Duration::from_millis(50)));
    let mut session = session_over(&source, 3);

    let cancelled = tokio::time::timeout(Duration::from_millis(5), session.open()).await;
    assert!(cancelled.is_err());
    assert!(!session.feed().is_awaiting_page());
    assert_eq!(session.feed().offset(), 0);

    // Let the spawned fetch finish and land in the album-page cache.
    tokio::time::sleep(Duration::from_millis(100)).await;
    session.open().await.unwrap();

    assert_eq!(session.photos().len(), 20);
    assert!(session.can_load_more());
    assert_eq!(source.count("album_photos:3@0+20"), 1);
}

#[tokio::test]
async fn cancelled_load_more_rewinds_the_cursor() {
    let source = Arc::new(FixtureSource::standard().with_delay(Duration::from_millis(50)));
    let mut session = session_over(&source, 3);
    session.open().await.unwrap();

    let cancelled = tokio::time::timeout(Duration::from_millis(5), session.load_more()).await;
    assert!(cancelled.is_err());
    assert_eq!(session.feed().offset(), 0);
    assert!(session.can_load_more());

    assert_eq!(session.load_more().await.unwrap(), Some(5));
    assert_eq!(session.feed().offset(), 20);
    assert_eq!(session.photos().len(), 25);
}
