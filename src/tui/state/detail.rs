//! Detail view state for a single item lookup.

use crate::catalog::models::Item;

/// Maximum related items listed in the detail pane.
pub const MAX_RELATED: usize = 6;

/// State of the item detail view.
///
/// NotFound is deliberately a state of its own: a 404 on the detail lookup
/// is not a failure and must not render as one.
#[derive(Debug, Clone)]
pub enum DetailState {
    /// The lookup is in flight.
    Loading {
        /// Identity being fetched.
        id: u64,
    },
    /// The item was found.
    Loaded {
        /// The fetched item.
        item: Box<Item>,
        /// Up to [`MAX_RELATED`] items of the same category.
        related: Vec<Item>,
    },
    /// The identity is unknown to the data source.
    NotFound {
        /// Identity that was looked up.
        id: u64,
    },
    /// The lookup failed for a reason other than a missing identity.
    Failed {
        /// Display form of the failure.
        message: String,
    },
}

/// Selects up to [`MAX_RELATED`] items sharing the category, excluding the
/// item itself.
#[must_use]
pub fn related_items(items: &[Item], item: &Item) -> Vec<Item> {
    items
        .iter()
        .filter(|candidate| candidate.category == item.category && candidate.id != item.id)
        .take(MAX_RELATED)
        .cloned()
        .collect()
}
