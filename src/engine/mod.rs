//! The derivation pipeline behind the catalogue table.
//!
//! Dataset changes flow through an explicit chain of pure derivation
//! functions rather than implicit framework re-execution: raw dataset →
//! [`filter_sort::apply`] → visible sequence → [`window::compute_window`] →
//! materialised rows → [`layout::measure`]d column widths → render. Each
//! stage is invoked from the event loop when one of its inputs changes and
//! is independently testable without a UI harness.

pub mod debounce;
pub mod filter_sort;
pub mod layout;
pub mod query;
pub mod window;

pub use debounce::{DEBOUNCE_INTERVAL, Debouncer};
pub use layout::{ColumnSizing, ColumnSpec, ColumnWidths};
pub use query::{Query, SortDirection, SortField};
pub use window::{RowSizes, RowSlot, Window, WindowCache, compute_window};
