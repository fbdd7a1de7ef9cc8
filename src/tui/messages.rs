//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions, async
//! command results, and system events.

use crate::catalog::error::CatalogError;
use crate::catalog::models::Item;

/// Messages for the catalogue table TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to the first row.
    Home,
    /// Move cursor to the last row.
    End,

    // Search editing
    /// Focus the search field.
    SearchStarted,
    /// Append a character to the search draft.
    SearchInput(char),
    /// Remove the last character of the search draft.
    SearchBackspace,
    /// Leave the search field, keeping the draft armed.
    SearchSubmitted,
    /// Clear the search text and leave the search field.
    SearchCleared,
    /// The debounce timer for a search draft elapsed.
    SearchDebounced {
        /// Generation the timer was armed for; stale generations are
        /// discarded.
        generation: u64,
    },

    // Filter and sort
    /// Cycle the category filter through All and the derived vocabulary.
    CycleCategory,
    /// Sort by the table column at this index, toggling direction when the
    /// column is already active.
    SortColumn(usize),

    // Data loading
    /// Request a fresh catalogue fetch from the API.
    RefreshRequested,
    /// Fetch completed successfully.
    RefreshComplete {
        /// The freshly fetched collection.
        items: Vec<Item>,
        /// Wall-clock fetch latency in milliseconds.
        latency_ms: u64,
    },
    /// Fetch failed.
    RefreshFailed(String),

    // Detail view
    /// Open the detail view for the row under the cursor.
    DetailRequested,
    /// Detail lookup succeeded.
    DetailLoaded(Box<Item>),
    /// Detail lookup hit a missing identity.
    DetailNotFound {
        /// Identity that was looked up.
        id: u64,
    },
    /// Detail lookup failed.
    DetailFailed(String),
    /// Return from the detail view to the table.
    DetailClosed,

    // Edit form
    /// Open the edit form for the row under the cursor.
    EditRequested,
    /// Append a character to the focused form field.
    EditInput(char),
    /// Remove the last character of the focused form field.
    EditBackspace,
    /// Focus the next form field.
    EditNextField,
    /// Focus the previous form field.
    EditPrevField,
    /// Cycle the focused choice field.
    EditCycled,
    /// Apply the form as a field-level patch.
    EditSubmitted,
    /// Discard the form.
    EditCancelled,

    // Delete
    /// Ask for confirmation before deleting the row under the cursor.
    DeleteRequested,
    /// Confirm the pending delete.
    DeleteConfirmed,
    /// Abandon the pending delete.
    DeleteCancelled,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates an error message from a `CatalogError`.
    #[must_use]
    pub fn from_error(error: &CatalogError) -> Self {
        Self::RefreshFailed(error.to_string())
    }

    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for search and query mutation messages.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(
            self,
            Self::SearchStarted
                | Self::SearchInput(_)
                | Self::SearchBackspace
                | Self::SearchSubmitted
                | Self::SearchCleared
                | Self::SearchDebounced { .. }
                | Self::CycleCategory
                | Self::SortColumn(_)
        )
    }

    /// Returns true for data loading and refresh messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested | Self::RefreshComplete { .. } | Self::RefreshFailed(_)
        )
    }

    /// Returns true for detail view messages.
    #[must_use]
    pub const fn is_detail(&self) -> bool {
        matches!(
            self,
            Self::DetailRequested
                | Self::DetailLoaded(_)
                | Self::DetailNotFound { .. }
                | Self::DetailFailed(_)
                | Self::DetailClosed
        )
    }

    /// Returns true for edit form messages.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::EditRequested
                | Self::EditInput(_)
                | Self::EditBackspace
                | Self::EditNextField
                | Self::EditPrevField
                | Self::EditCycled
                | Self::EditSubmitted
                | Self::EditCancelled
        )
    }

    /// Returns true for delete flow messages.
    #[must_use]
    pub const fn is_delete(&self) -> bool {
        matches!(
            self,
            Self::DeleteRequested | Self::DeleteConfirmed | Self::DeleteCancelled
        )
    }
}
