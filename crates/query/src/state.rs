use gallery_core::error::FetchError;

/// What a view sees for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<V> {
    /// Never requested, or invalidated.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed.
    Failed(FetchError),
    /// The last fetch succeeded.
    Ready(V),
}

impl<V> QueryState<V> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Failed(_))
    }

    pub fn data(&self) -> Option<&V> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            QueryState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<V> From<Result<V, FetchError>> for QueryState<V> {
    fn from(result: Result<V, FetchError>) -> Self {
        match result {
            Ok(value) => QueryState::Ready(value),
            Err(err) => QueryState::Failed(err),
        }
    }
}
