//! High-level intake facade used by the CLI entrypoint.

use super::error::CatalogError;
use super::gateway::ProductGateway;
use super::models::Item;
use super::vocab;

/// A fetched collection plus its locally derived vocabularies.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    /// The full product collection.
    pub items: Vec<Item>,
    /// Distinct categories in first-seen order.
    pub categories: Vec<String>,
    /// Distinct brands in first-seen order.
    pub brands: Vec<String>,
}

/// Aggregates the product collection and vocabularies using a gateway.
pub struct CatalogIntake<'client, Gateway>
where
    Gateway: ProductGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> CatalogIntake<'client, Gateway>
where
    Gateway: ProductGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load the full collection and derive the vocabularies from it.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway; the caller
    /// decides whether to surface it or fall back to an empty dataset with
    /// the fixed vocabularies.
    pub async fn load(&self) -> Result<CatalogSnapshot, CatalogError> {
        let items: Vec<Item> = self.client.list_products().await?;
        let categories = vocab::derive_categories(&items);
        let brands = vocab::derive_brands(&items);
        Ok(CatalogSnapshot {
            items,
            categories,
            brands,
        })
    }
}
