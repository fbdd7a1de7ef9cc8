//! Query state driving dataset derivation, round-tripped through a URL.
//!
//! The query (search text, category filter, sort field and direction) is
//! created from the initial view URL and mutated only by user actions that
//! also rewrite the shareable URL, so table state stays bookmarkable.

use url::Url;

/// Sortable item attributes, one per table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Sort by identity.
    #[default]
    Id,
    /// Sort by name.
    Name,
    /// Sort by brand.
    Brand,
    /// Sort by category.
    Category,
    /// Sort by price.
    Price,
    /// Sort by stock status.
    Status,
}

impl SortField {
    /// All fields in table column order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Brand,
        Self::Category,
        Self::Price,
        Self::Status,
    ];

    /// Returns the URL parameter value for this field.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Brand => "brand",
            Self::Category => "category",
            Self::Price => "price",
            Self::Status => "status",
        }
    }

    /// Parses a URL parameter value.
    ///
    /// Unknown values are a malformed-query condition and degrade to the
    /// default field rather than failing.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|field| field.as_param() == value)
            .unwrap_or_else(|| {
                tracing::debug!("unknown sortField '{value}', falling back to id");
                Self::default()
            })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the URL parameter value for this direction.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Parses a URL parameter value; unknown values degrade to ascending.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "desc" => Self::Descending,
            "asc" => Self::Ascending,
            other => {
                tracing::debug!("unknown sortDirection '{other}', falling back to asc");
                Self::Ascending
            }
        }
    }

    /// Orients an ascending comparison result to this direction.
    #[must_use]
    pub const fn orient(self, ordering: core::cmp::Ordering) -> core::cmp::Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The combined search/filter/sort state driving dataset derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Free-text search over name, description, id, and brand.
    pub search: String,
    /// Category filter; [`Query::CATEGORY_ALL`] means no category filter.
    pub category: String,
    /// Active sort field; always has a value.
    pub sort_field: SortField,
    /// Active sort direction.
    pub sort_direction: SortDirection,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: Self::CATEGORY_ALL.to_owned(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

/// URL parameter names recognised by the navigable query state.
const PARAM_SEARCH: &str = "search";
const PARAM_SORT_FIELD: &str = "sortField";
const PARAM_SORT_DIRECTION: &str = "sortDirection";
const PARAM_CATEGORY: &str = "category";

impl Query {
    /// Sentinel category meaning "no category filter".
    pub const CATEGORY_ALL: &'static str = "all";

    /// Returns true when a category filter is active.
    #[must_use]
    pub fn has_category_filter(&self) -> bool {
        self.category != Self::CATEGORY_ALL
    }

    /// Applies the column-header sort action.
    ///
    /// Selecting the already-active field toggles the direction; selecting a
    /// different field switches to it ascending.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Builds a query from the recognised parameters of a view URL.
    ///
    /// Absent parameters take their defaults; malformed values degrade per
    /// [`SortField::from_param`] and [`SortDirection::from_param`]. When a
    /// parameter repeats, the last occurrence wins.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        let mut query = Self::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                PARAM_SEARCH => query.search = value.into_owned(),
                PARAM_SORT_FIELD => query.sort_field = SortField::from_param(&value),
                PARAM_SORT_DIRECTION => {
                    query.sort_direction = SortDirection::from_param(&value);
                }
                PARAM_CATEGORY => query.category = value.into_owned(),
                _ => {}
            }
        }
        query
    }

    /// Rewrites the recognised parameters of a view URL from this query.
    ///
    /// Parameters at their default value are removed, so the canonical URL
    /// stays minimal; unrelated parameters are preserved untouched.
    pub fn apply_to_url(&self, url: &mut Url) {
        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| {
                !matches!(
                    key.as_ref(),
                    PARAM_SEARCH | PARAM_SORT_FIELD | PARAM_SORT_DIRECTION | PARAM_CATEGORY
                )
            })
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.set_query(None);
        let defaults = Self::default();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &retained {
                pairs.append_pair(key, value);
            }
            if !self.search.is_empty() {
                pairs.append_pair(PARAM_SEARCH, &self.search);
            }
            if self.sort_field != defaults.sort_field {
                pairs.append_pair(PARAM_SORT_FIELD, self.sort_field.as_param());
            }
            if self.sort_direction != defaults.sort_direction {
                pairs.append_pair(PARAM_SORT_DIRECTION, self.sort_direction.as_param());
            }
            if self.has_category_filter() {
                pairs.append_pair(PARAM_CATEGORY, &self.category);
            }
        }

        // query_pairs_mut leaves an empty query ("?") behind when nothing
        // was appended.
        if url.query() == Some("") {
            url.set_query(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use url::Url;

    use super::{Query, SortDirection, SortField};

    fn view_url(query_string: &str) -> Url {
        let raw = format!("app://catalog/{query_string}");
        raw.parse()
            .unwrap_or_else(|error| panic!("test URL failed to parse: {error}"))
    }

    #[test]
    fn absent_parameters_take_defaults() {
        let query = Query::from_url(&view_url(""));
        assert_eq!(query, Query::default());
        assert_eq!(query.sort_field, SortField::Id);
        assert_eq!(query.sort_direction, SortDirection::Ascending);
        assert_eq!(query.category, "all");
    }

    #[test]
    fn parameters_are_parsed() {
        let query = Query::from_url(&view_url(
            "?search=lamp&sortField=price&sortDirection=desc&category=Home",
        ));
        assert_eq!(query.search, "lamp");
        assert_eq!(query.sort_field, SortField::Price);
        assert_eq!(query.sort_direction, SortDirection::Descending);
        assert_eq!(query.category, "Home");
    }

    #[rstest]
    #[case("?sortField=bogus", SortField::Id)]
    #[case("?sortField=status", SortField::Status)]
    fn unknown_sort_field_degrades_to_default(#[case] params: &str, #[case] expected: SortField) {
        let query = Query::from_url(&view_url(params));
        assert_eq!(query.sort_field, expected);
    }

    #[test]
    fn unknown_sort_direction_degrades_to_ascending() {
        let query = Query::from_url(&view_url("?sortDirection=sideways"));
        assert_eq!(query.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn round_trip_preserves_query() {
        let mut original = Query::default();
        original.search = "screen".to_owned();
        original.category = "Electronics".to_owned();
        original.sort_by(SortField::Name);

        let mut url = view_url("");
        original.apply_to_url(&mut url);
        assert_eq!(Query::from_url(&url), original);
    }

    #[test]
    fn defaults_leave_the_url_bare() {
        let mut url = view_url("?search=old&category=Home");
        Query::default().apply_to_url(&mut url);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn unrelated_parameters_survive_rewrites() {
        let mut url = view_url("?theme=dark&search=old");
        let mut query = Query::default();
        query.search = "new".to_owned();
        query.apply_to_url(&mut url);

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("theme".to_owned(), "dark".to_owned())));
        assert!(pairs.contains(&("search".to_owned(), "new".to_owned())));
    }

    #[test]
    fn sort_by_same_field_toggles_direction() {
        let mut query = Query::default();
        query.sort_by(SortField::Id);
        assert_eq!(query.sort_direction, SortDirection::Descending);
        query.sort_by(SortField::Id);
        assert_eq!(query.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn sort_by_new_field_resets_to_ascending() {
        let mut query = Query::default();
        query.sort_by(SortField::Id); // now descending
        query.sort_by(SortField::Price);
        assert_eq!(query.sort_field, SortField::Price);
        assert_eq!(query.sort_direction, SortDirection::Ascending);
    }
}
