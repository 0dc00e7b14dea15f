use thiserror::Error;

/// Failure of a single read against the remote store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("collection unavailable: {0}")]
    CollectionUnavailable(String),

    #[error("unauthorized to read {0}")]
    Unauthorized(String),

    #[error("store API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[cfg(feature = "postgrest")]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid store configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

/// Failure of the listing pipeline.
///
/// The only way the pipeline fails is when both the primary view and the
/// fallback read fail; filtering is total.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(
        "data access failed: primary view: {primary}; fallback read: {fallback}"
    )]
    DataAccess {
        #[source]
        fallback: StoreError,
        primary: StoreError,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
pub type StoreResult<T> = std::result::Result<T, StoreError>;
