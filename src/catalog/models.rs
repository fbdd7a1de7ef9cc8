//! Data models representing catalogue items and edit patches.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Stock status of a catalogue item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    /// Item is available.
    InStock,
    /// Item is running low.
    LowStock,
    /// Item is unavailable.
    OutOfStock,
}

impl Status {
    /// Parses the wire representation used by the products API.
    ///
    /// Unknown values degrade to [`Status::OutOfStock`] rather than failing
    /// the whole fetch.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "in stock" => Self::InStock,
            "low stock" => Self::LowStock,
            other => {
                if other != "out of stock" {
                    tracing::debug!("unknown status value '{other}', treating as out of stock");
                }
                Self::OutOfStock
            }
        }
    }

    /// Returns the display label for the status badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

/// A single catalogue item.
///
/// Identity is `id`: unique, stable, never reused. The in-memory dataset is
/// the only owner; items are mutated solely through explicit edit and delete
/// operations, which stay local to the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Stable identity.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Category label (one of the derived vocabulary).
    pub category: String,
    /// Brand label, when the source provides one.
    pub brand: Option<String>,
    /// Non-negative price.
    pub price: f64,
    /// Stock status.
    pub status: Status,
    /// Colour label.
    pub color: Option<String>,
    /// Image location, unused by the terminal renderer but kept for detail display.
    pub image_url: Option<String>,
    /// Stock-keeping unit.
    pub sku: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
    /// Weight in the source's units.
    pub weight: Option<f64>,
    /// Physical dimensions as free text.
    pub dimension: Option<String>,
}

/// Field-level patch applied to one item by id.
///
/// Only populated fields are merged; everything else is left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement category.
    pub category: Option<String>,
    /// Replacement brand.
    pub brand: Option<String>,
    /// Replacement price.
    pub price: Option<f64>,
    /// Replacement status.
    pub status: Option<Status>,
    /// Replacement colour.
    pub color: Option<String>,
}

impl Item {
    /// Merges a field-level patch into this item.
    ///
    /// Unset patch fields leave the corresponding item field unchanged.
    pub fn apply_patch(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(category) = &patch.category {
            self.category.clone_from(category);
        }
        if let Some(brand) = &patch.brand {
            self.brand = Some(brand.clone());
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(color) = &patch.color {
            self.color = Some(color.clone());
        }
    }
}

/// Wire shape of a product record as served by the API.
///
/// The list endpoint returns a subset of fields; the detail endpoint returns
/// all of them. Optional fields absorb both shapes.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiProduct {
    pub(super) id: u64,
    pub(super) name: String,
    #[serde(default)]
    pub(super) description: Option<String>,
    pub(super) category: String,
    #[serde(default)]
    pub(super) brand: Option<String>,
    pub(super) price: f64,
    pub(super) status: String,
    #[serde(default)]
    pub(super) color: Option<String>,
    #[serde(default)]
    pub(super) image_url: Option<String>,
    #[serde(default)]
    pub(super) sku: Option<String>,
    #[serde(default)]
    pub(super) created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(super) updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(super) weight: Option<f64>,
    #[serde(default)]
    pub(super) dimension: Option<String>,
}

impl From<ApiProduct> for Item {
    fn from(value: ApiProduct) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            category: value.category,
            brand: value.brand,
            price: value.price,
            status: Status::from_wire(&value.status),
            color: value.color,
            image_url: value.image_url,
            sku: value.sku,
            created_at: value.created_at,
            updated_at: value.updated_at,
            weight: value.weight,
            dimension: value.dimension,
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Item {
    /// Builds a minimal item for tests; remaining fields stay empty.
    #[must_use]
    pub fn sample(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            description: None,
            category: "Electronics".to_owned(),
            brand: None,
            price: 0.0,
            status: Status::InStock,
            color: None,
            image_url: None,
            sku: None,
            created_at: None,
            updated_at: None,
            weight: None,
            dimension: None,
        }
    }
}
