//! Client error types.

use thiserror::Error;

use crate::models::ResourceKind;

/// Errors surfaced by the client.
///
/// Configuration problems are hard failures raised at construction time and
/// never silently defaulted. `Transport`, `NoData`, and `Decode` are soft
/// per-resource failures: the snapshot cache logs and absorbs them, leaving
/// the missing map entry as the only observable signal.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No base URL was supplied.
    #[error("base URL is required")]
    MissingBaseUrl,

    /// The base URL ends with a path separator.
    #[error("base URL must not end with a slash: {0}")]
    TrailingSlashBaseUrl(String),

    /// An accessor was invoked for a resource kind the configuration never
    /// declared.
    #[error("no {0} handles are declared")]
    KindNotDeclared(ResourceKind),

    /// An accessor was invoked with a handle outside the declared set.
    #[error("unknown {kind} handle: {handle}")]
    UnknownHandle {
        kind: ResourceKind,
        handle: String,
    },

    /// The HTTP request failed or returned an error status.
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with an empty payload.
    #[error("no data returned from {url}")]
    NoData { url: String },

    /// The payload did not match the expected shape.
    #[error("failed to decode response")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias using ClientError.
pub type ClientResult<T> = Result<T, ClientError>;
