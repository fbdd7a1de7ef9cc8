//! State management for the catalogue table TUI.
//!
//! This module provides the core state types for the applied query, the
//! cursor position, the item detail view, and the edit form.

mod detail;
mod edit_form;
mod query_state;

pub use detail::{DetailState, MAX_RELATED, related_items};
pub use edit_form::{COLOR_CHOICES, EditField, EditForm};
pub use query_state::QueryState;
