//! Error types exposed by the catalogue data-source layer.

use thiserror::Error;

/// Errors surfaced while loading configuration or talking to the products API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidBaseUrl(String),

    /// The initial view URL could not be parsed.
    #[error("view URL is invalid: {0}")]
    InvalidViewUrl(String),

    /// The API returned a non-success status other than 404.
    #[error("products API error: {message}")]
    Api {
        /// HTTP status code, when one was received.
        status: Option<u16>,
        /// Response detail describing the failure.
        message: String,
    },

    /// A detail lookup referenced an identity the API does not know.
    ///
    /// Distinct from [`CatalogError::Api`]: a 404 on `/products/{id}` is a
    /// "not found" state, not an error banner.
    #[error("product {id} not found")]
    NotFound {
        /// The identity that was looked up.
        id: u64,
    },

    /// Networking failed while calling the products API.
    #[error("network error talking to the products API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A response body could not be decoded as the expected JSON shape.
    #[error("malformed products API response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl CatalogError {
    /// Returns true when this error is the not-found state rather than a
    /// failure that should be surfaced as an error banner.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
