//! Pure filter-and-sort derivation from the dataset and the active query.
//!
//! `apply` is the first stage of the derivation pipeline: it produces the
//! ordered sequence of dataset indices that the window calculator then
//! materialises. It holds no state and never mutates its inputs, so the same
//! `(dataset, query)` pair always yields an identical sequence.

use core::cmp::Ordering;

use crate::catalog::models::Item;

use super::query::{Query, SortField};

/// Derives the ordered visible sequence for a query.
///
/// Returns indices into `items`: every item passing both filter axes, sorted
/// by the query's field and direction. Filtering is case-insensitive
/// substring match over name, description, stringified id, and brand when
/// the search text is non-empty, intersected with category equality when a
/// category filter is active. An empty dataset or a filter that matches
/// nothing yields an empty sequence.
#[must_use]
pub fn apply(items: &[Item], query: &Query) -> Vec<usize> {
    let needle = query.search.to_lowercase();

    let mut indices: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_search(item, &needle) && matches_category(item, query))
        .map(|(index, _)| index)
        .collect();

    indices.sort_by(|&a, &b| compare_indices(items, a, b, query));
    indices
}

/// Returns true when the item passes the search axis.
///
/// An empty needle is pass-through. The needle must already be lowercased.
fn matches_search(item: &Item, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(needle)
        || item
            .description
            .as_ref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
        || item.id.to_string().contains(needle)
        || item
            .brand
            .as_ref()
            .is_some_and(|brand| brand.to_lowercase().contains(needle))
}

/// Returns true when the item passes the category axis.
fn matches_category(item: &Item, query: &Query) -> bool {
    !query.has_category_filter() || item.category == query.category
}

fn compare_indices(items: &[Item], a: usize, b: usize, query: &Query) -> Ordering {
    let (Some(left), Some(right)) = (items.get(a), items.get(b)) else {
        return Ordering::Equal;
    };
    compare_items(left, right, query)
}

/// Total order over items for the query's sort field and direction.
///
/// Equal primary keys break deterministically by ascending id; the tiebreak
/// is applied after direction orientation so reversing the direction of a
/// tie-free sequence yields its exact reverse.
#[must_use]
pub fn compare_items(left: &Item, right: &Item, query: &Query) -> Ordering {
    compare_field(left, right, query)
        .then_with(|| left.id.cmp(&right.id))
}

fn compare_field(left: &Item, right: &Item, query: &Query) -> Ordering {
    let direction = query.sort_direction;
    match query.sort_field {
        SortField::Id => direction.orient(left.id.cmp(&right.id)),
        SortField::Name => direction.orient(compare_text(&left.name, &right.name)),
        SortField::Category => direction.orient(compare_text(&left.category, &right.category)),
        SortField::Brand => compare_optional(
            left.brand.as_deref(),
            right.brand.as_deref(),
            |a, b| direction.orient(compare_text(a, b)),
        ),
        SortField::Price => direction.orient(left.price.total_cmp(&right.price)),
        SortField::Status => direction.orient(left.status.cmp(&right.status)),
    }
}

/// Compares optional keys: both present defers to `cmp`, while missing
/// values sort last regardless of direction.
fn compare_optional<T>(
    left: Option<T>,
    right: Option<T>,
    cmp: impl FnOnce(T, T) -> Ordering,
) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive text comparison with byte order as the final tiebreak.
///
/// Stands in for locale collation; see DESIGN notes on the comparison
/// decision.
fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}
