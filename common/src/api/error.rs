use crate::model::ResourceKind;

/// Everything that can go wrong between a view and the backend.
///
/// Variants carry strings rather than source errors so the value can be
/// cloned into component messages.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("not found: {url}")]
    NotFound { url: String },

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("{} record has no identifier", .kind.singular())]
    MissingId { kind: ResourceKind },

    #[error("{kind} do not support {operation}")]
    Unsupported {
        kind: ResourceKind,
        operation: &'static str,
    },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
