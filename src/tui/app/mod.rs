//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! catalogue table TUI. It owns the dataset and the derived pipeline state
//! (visible sequence, window, column widths) and coordinates the message
//! handlers that keep them synchronised.
//!
//! # Module Structure
//!
//! - `navigation`: cursor movement and scroll adjustment
//! - `query_handlers`: search, category, and sort mutations
//! - `data_handlers`: fetch, edit, delete, and detail handling
//! - `rendering`: view rendering methods for terminal output
//! - `layout`: height budgeting and window refresh

use bubbletea_rs::Cmd;
use url::Url;

use crate::catalog::models::Item;
use crate::engine::debounce::Debouncer;
use crate::engine::filter_sort;
use crate::engine::layout::{self as column_layout, ColumnWidths};
use crate::engine::window::{RowSizes, Window, WindowCache};

use super::CatalogSeed;
use super::components::TABLE_COLUMNS;
use super::input::InputContext;
use super::messages::AppMsg;
use super::state::{DetailState, EditForm, QueryState};

mod data_handlers;
mod layout;
mod model_impl;
mod navigation;
mod query_handlers;
mod rendering;
mod view_mode;

pub(crate) use view_mode::ViewMode;

/// Main application model for the catalogue table TUI.
#[derive(Debug)]
pub struct CatalogApp {
    /// The full dataset; the single mutable cell every derivation reads.
    pub(crate) items: Vec<Item>,
    /// Ordered dataset indices forming the visible sequence.
    /// Recomputed whenever the dataset or the applied query changes.
    visible_indices: Vec<usize>,
    /// Category vocabulary derived from the dataset (or the fallback).
    pub(crate) categories: Vec<String>,
    /// Brand vocabulary derived from the dataset (or the fallback).
    pub(crate) brands: Vec<String>,
    /// Applied query, search draft, cursor, and scroll state.
    pub(crate) query_state: QueryState,
    /// Debouncer coalescing search edits into one recomputation.
    pub(crate) debouncer: Debouncer<String>,
    /// Row sizing for the window calculator.
    row_sizes: RowSizes,
    /// Memoised window over the visible sequence.
    window_cache: WindowCache,
    /// Measured column widths shared by header and rows.
    column_widths: ColumnWidths,
    /// Overscan rows materialised beyond the viewport.
    overscan: usize,
    /// Canonical shareable URL carrying the query state.
    pub(crate) share_url: Url,
    /// Whether a catalogue fetch is outstanding.
    pub(crate) loading: bool,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    /// Active view.
    pub(crate) view_mode: ViewMode,
    /// Detail lookup state while the detail view is active.
    pub(crate) detail: Option<DetailState>,
    /// In-progress edit form while the edit view is active.
    pub(crate) edit_form: Option<EditForm>,
    /// Identity pending delete confirmation.
    pub(crate) delete_target: Option<u64>,
    /// Identity of the selected item, used to restore the cursor across
    /// recomputations.
    pub(crate) selected_item_id: Option<u64>,
}

impl CatalogApp {
    /// Creates a new application from seeded catalogue data.
    #[must_use]
    pub fn new(seed: CatalogSeed) -> Self {
        let CatalogSeed {
            items,
            categories,
            brands,
            query,
            share_url,
            row_height,
            overscan,
            error,
        } = seed;

        let mut app = Self {
            items,
            visible_indices: Vec::new(),
            categories,
            brands,
            query_state: QueryState::new(query),
            debouncer: Debouncer::new(),
            row_sizes: RowSizes::uniform(row_height),
            window_cache: WindowCache::new(),
            column_widths: ColumnWidths::default(),
            overscan,
            share_url,
            loading: false,
            error,
            width: 80,
            height: 24,
            show_help: false,
            view_mode: ViewMode::Table,
            detail: None,
            edit_form: None,
            delete_target: None,
            selected_item_id: None,
        };
        app.measure_columns();
        app.rebuild_visible();
        app.clamp_cursor_and_update_selection();
        app.refresh_window();
        app
    }

    /// Creates an empty application (for initial loading state).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(CatalogSeed::default())
    }

    /// Returns the count of items in the visible sequence.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// Returns the ordered dataset indices of the visible sequence.
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible_indices
    }

    /// Returns the current cursor position within the visible sequence.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.query_state.cursor_position
    }

    /// Returns the current window over the visible sequence.
    #[must_use]
    pub const fn window(&self) -> &Window {
        self.window_cache.current()
    }

    /// Rebuilds the visible sequence from the dataset and the applied query.
    ///
    /// Call this after modifying `items` or the applied query; the cursor
    /// must be re-clamped afterwards.
    pub(crate) fn rebuild_visible(&mut self) {
        self.visible_indices = filter_sort::apply(&self.items, &self.query_state.query);
    }

    /// Rebuilds the visible sequence, restoring the selection by id.
    ///
    /// The cursor follows the selected item to its new position; if the item
    /// no longer passes the filters (or was deleted) the cursor clamps to
    /// the nearest valid row.
    pub(crate) fn rebuild_visible_preserving_selection(&mut self) {
        let selected = self.selected_item_id;
        self.rebuild_visible();

        if let Some(id) = selected
            && let Some(index) = self.find_visible_index_by_id(id)
        {
            self.query_state.cursor_position = index;
            self.update_selected_id();
        } else {
            self.clamp_cursor_and_update_selection();
        }
        self.ensure_cursor_visible();
        self.refresh_window();
    }

    /// Returns the ID of the item under the cursor, if any.
    #[must_use]
    pub fn current_selected_id(&self) -> Option<u64> {
        self.visible_indices
            .get(self.query_state.cursor_position)
            .and_then(|&index| self.items.get(index))
            .map(|item| item.id)
    }

    /// Returns a reference to the item under the cursor, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_indices
            .get(self.query_state.cursor_position)
            .and_then(|&index| self.items.get(index))
    }

    /// Finds the position within the visible sequence of an item by id.
    pub(crate) fn find_visible_index_by_id(&self, id: u64) -> Option<usize> {
        self.visible_indices
            .iter()
            .position(|&index| self.items.get(index).is_some_and(|item| item.id == id))
    }

    /// Updates the tracked `selected_item_id` from the cursor position.
    pub(crate) fn update_selected_id(&mut self) {
        self.selected_item_id = self.current_selected_id();
    }

    /// Clamps the cursor to valid bounds and updates the selection id.
    pub(crate) fn clamp_cursor_and_update_selection(&mut self) {
        self.query_state.clamp_cursor(self.visible_count());
        self.update_selected_id();
    }

    /// Sets the cursor position and updates the selection id.
    pub(crate) fn set_cursor(&mut self, position: usize) {
        self.query_state.cursor_position = position;
        self.update_selected_id();
    }

    /// Measures column widths for the current viewport.
    ///
    /// Invoked on mount and on resize; the column structure is static, so
    /// data changes never re-measure.
    pub(crate) fn measure_columns(&mut self) {
        // The cursor gutter occupies two cells before the first column.
        let content_width = self.width.saturating_sub(2);
        self.column_widths = column_layout::measure(&TABLE_COLUMNS, content_width);
    }

    /// Returns the measured column widths.
    #[must_use]
    pub const fn column_widths(&self) -> &ColumnWidths {
        &self.column_widths
    }

    /// Returns the input context for context-aware key mapping.
    pub(crate) fn input_context(&self) -> InputContext {
        if self.delete_target.is_some() {
            return InputContext::ConfirmDelete;
        }
        if self.query_state.search_focused {
            return InputContext::Search;
        }
        match self.view_mode {
            ViewMode::Table => InputContext::Table,
            ViewMode::Detail => InputContext::Detail,
            ViewMode::EditForm => InputContext::EditForm,
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands. It delegates
    /// to specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_query() {
            return self.handle_query_msg(msg);
        }
        if msg.is_data() || msg.is_detail() || msg.is_edit() || msg.is_delete() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(false, "unhandled message routed to handle_lifecycle_msg");
                None
            }
        }
    }

    // Window event handlers

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.measure_columns();
        self.ensure_cursor_visible();
        self.refresh_window();
        None
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
