//! HTTP client for the JSONPlaceholder-style fixture API.
//!
//! [`HttpDataSource`] implements [`gallery_core::source::DataSource`] over
//! `reqwest`, configured by [`SourceConfig`].

pub mod api;
pub mod config;

pub use api::HttpDataSource;
pub use config::{ConfigError, SourceConfig};
