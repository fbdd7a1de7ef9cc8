//! Waretable library crate providing a windowed product-catalogue table.
//!
//! The library fetches a product collection once from an HTTP API and
//! derives everything else locally: a filtered and sorted visible sequence,
//! a virtual window over it bounding how many rows are materialised per
//! frame, and the measured column widths shared by header and rows. The
//! interactive TUI in [`tui`] is a thin Model-View-Update shell over that
//! pipeline.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod telemetry;
pub mod tui;

pub use catalog::{CatalogError, HttpProductGateway, Item, ItemPatch, ProductGateway, Status};
pub use config::WaretableConfig;
pub use engine::{Query, RowSizes, SortDirection, SortField, Window, compute_window};
