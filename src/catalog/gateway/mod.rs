//! Gateways for loading the product catalogue over HTTP.
//!
//! This module provides a trait-based gateway for communicating with the
//! products API. The trait-based design enables mocking in tests while the
//! reqwest implementation handles real HTTP requests.

mod http;

pub use http::HttpProductGateway;

use async_trait::async_trait;

use super::error::CatalogError;
use super::models::Item;

/// Gateway that can load catalogue data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Fetches the full product collection.
    ///
    /// The API supports neither filtering nor sorting; all derivation
    /// happens locally on the fetched collection.
    async fn list_products(&self) -> Result<Vec<Item>, CatalogError>;

    /// Fetches a single product by identity.
    ///
    /// A 404 response maps to [`CatalogError::NotFound`], which callers must
    /// treat as a state, not a failure.
    async fn product(&self, id: u64) -> Result<Item, CatalogError>;
}
