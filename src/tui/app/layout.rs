//! Layout helpers for the catalogue TUI model.
//!
//! This module budgets the terminal rows between chrome and table body,
//! keeps the window synchronised with scroll and viewport changes, and
//! adjusts the scroll offset so the cursor stays visible.

use super::CatalogApp;
use super::view_mode::{CHROME_HEIGHT, MIN_TABLE_HEIGHT, TABLE_HEADER_HEIGHT};

impl CatalogApp {
    /// Returns the number of rows available below the chrome.
    const fn visible_body_height(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_HEIGHT)
    }

    /// Rows available for table content, excluding the column header.
    pub(crate) const fn table_body_height(&self) -> usize {
        let body = self.visible_body_height().saturating_sub(TABLE_HEADER_HEIGHT);
        if body < MIN_TABLE_HEIGHT {
            MIN_TABLE_HEIGHT
        } else {
            body
        }
    }

    /// Viewport height in row-size units for the window calculator.
    ///
    /// Scroll offsets and row sizes share the same unit (terminal cells), so
    /// the viewport extent is simply the body height.
    pub(crate) const fn viewport_units(&self) -> u64 {
        self.table_body_height() as u64
    }

    /// Recomputes the memoised window from the current pipeline inputs.
    ///
    /// Cheap when nothing relevant changed: the cache re-derives only when
    /// the sequence length, scroll offset, or viewport height differ.
    pub(crate) fn refresh_window(&mut self) {
        let length = self.visible_count();
        let scroll_offset = self.query_state.scroll_offset;
        let viewport = self.viewport_units();
        let _window = self.window_cache.window(
            length,
            scroll_offset,
            viewport,
            &self.row_sizes,
            self.overscan,
        );
    }

    /// Adjusts the scroll offset so the cursor's row remains in view.
    pub(crate) fn ensure_cursor_visible(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            self.query_state.scroll_offset = 0;
            return;
        }

        let cursor = self.query_state.cursor_position.min(count - 1);
        let viewport = self.viewport_units();
        let row_top = self.row_sizes.offset_of(cursor);
        let row_bottom = row_top.saturating_add(self.row_sizes.size_of(cursor));

        if row_top < self.query_state.scroll_offset {
            self.query_state.scroll_offset = row_top;
        } else if row_bottom > self.query_state.scroll_offset.saturating_add(viewport) {
            self.query_state.scroll_offset = row_bottom.saturating_sub(viewport);
        }

        // Never leave blank space below the last row.
        let max_scroll = self.row_sizes.total(count).saturating_sub(viewport);
        if self.query_state.scroll_offset > max_scroll {
            self.query_state.scroll_offset = max_scroll;
        }
    }
}
