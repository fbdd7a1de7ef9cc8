//! UI components for the catalogue table TUI.
//!
//! This module provides reusable UI components following the bubbletea-rs
//! Model-View pattern. Each component renders from an explicit view context
//! and owns no application state.

mod item_detail;
mod item_table;
mod text_fit;

pub use item_detail::{ItemDetailComponent, ItemDetailViewContext};
pub use item_table::{
    COLUMN_SORT_FIELDS, ItemTableComponent, ItemTableViewContext, TABLE_COLUMNS,
};
pub use text_fit::{fit_cell, truncate_with_ellipsis};
