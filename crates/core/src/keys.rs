//! Cache keys for screen queries.

use std::fmt;

use crate::types::DbId;

/// Which screen query a cache entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    UserList,
    UserProfile,
    AlbumPage,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserList => "user_list",
            Self::UserProfile => "user_profile",
            Self::AlbumPage => "album_page",
        }
    }
}

/// Composite cache key: resource kind, resource id, and page window.
///
/// The page limit is part of the key so that two windows starting at the
/// same offset but with different sizes never share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub kind: ResourceKind,
    pub id: Option<DbId>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl QueryKey {
    pub fn user_list() -> Self {
        Self {
            kind: ResourceKind::UserList,
            id: None,
            offset: None,
            limit: None,
        }
    }

    pub fn user_profile(user_id: DbId) -> Self {
        Self {
            kind: ResourceKind::UserProfile,
            id: Some(user_id),
            offset: None,
            limit: None,
        }
    }

    pub fn album_page(album_id: DbId, start: usize, limit: usize) -> Self {
        Self {
            kind: ResourceKind::AlbumPage,
            id: Some(album_id),
            offset: Some(start),
            limit: Some(limit),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        if let Some(id) = self.id {
            write!(f, ":{id}")?;
        }
        if let Some(offset) = self.offset {
            write!(f, "@{offset}")?;
        }
        if let Some(limit) = self.limit {
            write!(f, "+{limit}")?;
        }
        Ok(())
    }
}
