//! Category and brand vocabularies derived from the fetched catalogue.
//!
//! The products API exposes no vocabulary endpoints; the distinct values
//! observed across the collection are the vocabulary. When the fetch fails a
//! fixed fallback keeps the filter controls usable.

use super::models::Item;

/// Fallback categories used when the catalogue fetch fails.
pub const FALLBACK_CATEGORIES: [&str; 7] = [
    "Electronics",
    "Clothing",
    "Home",
    "Beauty",
    "Toys",
    "Books",
    "Fitness",
];

/// Fallback brands used when the catalogue fetch fails.
pub const FALLBACK_BRANDS: [&str; 7] = ["Sony", "Samsung", "Apple", "Dell", "Asus", "HP", "LG"];

/// Derives the distinct categories across the items, in first-seen order.
#[must_use]
pub fn derive_categories(items: &[Item]) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.iter().any(|known: &String| known == &item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

/// Derives the distinct brands across the items, in first-seen order.
///
/// Items without a brand contribute nothing.
#[must_use]
pub fn derive_brands(items: &[Item]) -> Vec<String> {
    let mut seen = Vec::new();
    for brand in items.iter().filter_map(|item| item.brand.as_ref()) {
        if !seen.iter().any(|known: &String| known == brand) {
            seen.push(brand.clone());
        }
    }
    seen
}

/// Returns the fallback category vocabulary as owned strings.
#[must_use]
pub fn fallback_categories() -> Vec<String> {
    FALLBACK_CATEGORIES.iter().map(|&c| c.to_owned()).collect()
}

/// Returns the fallback brand vocabulary as owned strings.
#[must_use]
pub fn fallback_brands() -> Vec<String> {
    FALLBACK_BRANDS.iter().map(|&b| b.to_owned()).collect()
}
