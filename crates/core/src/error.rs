use crate::types::DbId;

/// Failure while reading from the remote data source.
///
/// Every variant reaches the presentation layer the same way (as a failed
/// query). The type is `Clone` so that one in-flight result can be handed to
/// every caller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Remote API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FetchError {
    /// Whether the upstream reported the requested id as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}
