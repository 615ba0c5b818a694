//! Core domain types for the gallery browser.
//!
//! Everything here is free of I/O: the upstream record shapes, the derived
//! view models, the shared [`error::FetchError`], the client-side join, the
//! photo-feed pagination state machine, and the [`source::DataSource`] port
//! that the HTTP client implements.

pub mod clock;
pub mod error;
pub mod join;
pub mod keys;
pub mod models;
pub mod pagination;
pub mod source;
pub mod types;
