//! Query and cursor state for the catalogue table.
//!
//! Tracks the applied query (which drives the visible sequence), the live
//! search draft (debounced into the query), and the user's position within
//! the derived sequence. Cursor position is retained where possible when the
//! sequence changes, clamped to the valid range otherwise.

use crate::engine::query::Query;

/// State managing the active query, search draft, and cursor position.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// The applied query driving the visible sequence.
    pub query: Query,
    /// Live search buffer; committed into `query.search` after the
    /// debounce interval.
    pub draft_search: String,
    /// Whether the search field currently captures key input.
    pub search_focused: bool,
    /// Current cursor position (0-indexed) within the visible sequence.
    pub cursor_position: usize,
    /// Scroll offset from the top of the content, in row-size units.
    pub scroll_offset: u64,
}

impl QueryState {
    /// Creates state for an initial query; the draft mirrors the applied
    /// search text.
    #[must_use]
    pub fn new(query: Query) -> Self {
        let draft_search = query.search.clone();
        Self {
            query,
            draft_search,
            search_focused: false,
            cursor_position: 0,
            scroll_offset: 0,
        }
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the sequence is empty, cursor and scroll reset to the top. If the
    /// cursor exceeds the sequence length, it moves to the last valid index.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count - 1;
        }
    }
}
