//! Terminal user interface for the windowed catalogue table.
//!
//! This module provides an interactive TUI for browsing, filtering,
//! sorting, and editing the product catalogue using the bubbletea-rs
//! framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::CatalogApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and message handlers
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Query, cursor, detail, and edit-form state
//! - [`components`]: Reusable UI components
//! - [`input`]: Context-aware key-to-message mapping
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for initial data. Call
//! [`set_initial_catalog`] before starting the program, and
//! `CatalogApp::init()` will automatically retrieve the data.
//!
//! # Refresh Functionality
//!
//! Similarly, [`set_refresh_context`] must be called to enable refresh and
//! detail lookups. It stores the API base the gateway is rebuilt from when
//! the user refreshes.

use std::sync::OnceLock;

use url::Url;

use crate::catalog::error::CatalogError;
use crate::catalog::gateway::{HttpProductGateway, ProductGateway};
use crate::catalog::models::Item;
use crate::config::{DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT, DEFAULT_VIEW_URL};
use crate::engine::query::Query;
use crate::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::CatalogApp;

/// Global storage for initial catalogue data.
///
/// This is set before the TUI program starts and read by
/// `CatalogApp::init()`.
static INITIAL_CATALOG: OnceLock<CatalogSeed> = OnceLock::new();

/// Global storage for the refresh context (API base URL).
static REFRESH_CONTEXT: OnceLock<RefreshContext> = OnceLock::new();

/// Context required to refetch catalogue data.
struct RefreshContext {
    api_base: String,
}

/// Everything the application model needs at startup.
#[derive(Debug, Clone)]
pub struct CatalogSeed {
    /// The fetched collection (empty when the initial fetch failed).
    pub items: Vec<Item>,
    /// Category vocabulary derived from the collection or the fallback.
    pub categories: Vec<String>,
    /// Brand vocabulary derived from the collection or the fallback.
    pub brands: Vec<String>,
    /// Query parsed from the initial view URL.
    pub query: Query,
    /// Canonical shareable URL.
    pub share_url: Url,
    /// Estimated row height in cells.
    pub row_height: u64,
    /// Overscan rows beyond the viewport.
    pub overscan: usize,
    /// Error from the initial fetch, surfaced with a retry affordance.
    pub error: Option<String>,
}

impl Default for CatalogSeed {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            categories: Vec::new(),
            brands: Vec::new(),
            query: Query::default(),
            share_url: default_share_url(),
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            error: None,
        }
    }
}

fn default_share_url() -> Url {
    DEFAULT_VIEW_URL
        .parse()
        .unwrap_or_else(|error| panic!("default view URL must parse: {error}"))
}

/// Sets the initial catalogue data for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The seed
/// will be read by `CatalogApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the seed was set, `false` if it was already set.
pub fn set_initial_catalog(seed: CatalogSeed) -> bool {
    INITIAL_CATALOG.set(seed).is_ok()
}

/// Sets the refresh context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program to enable
/// refresh and detail lookups. Without it those requests fail with an error
/// message.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_refresh_context(api_base: String) -> bool {
    REFRESH_CONTEXT.set(RefreshContext { api_base }).is_ok()
}

/// Gets a clone of the initial catalogue seed from storage.
///
/// Called internally by `CatalogApp::init()`. Returns the stored seed or an
/// empty default if not set.
pub(crate) fn get_initial_catalog() -> CatalogSeed {
    INITIAL_CATALOG.get().cloned().unwrap_or_default()
}

fn refresh_gateway() -> Result<HttpProductGateway, CatalogError> {
    let context = REFRESH_CONTEXT.get().ok_or_else(|| CatalogError::Api {
        status: None,
        message: "Refresh context not configured".to_owned(),
    })?;
    HttpProductGateway::new(&context.api_base)
}

/// Fetches the full catalogue from the products API.
///
/// Uses the refresh context set by [`set_refresh_context`]. Returns an
/// error if the context was not set or if the API call fails.
pub(crate) async fn fetch_catalog() -> Result<Vec<Item>, CatalogError> {
    refresh_gateway()?.list_products().await
}

/// Fetches a single item from the products API.
pub(crate) async fn fetch_item(id: u64) -> Result<Item, CatalogError> {
    refresh_gateway()?.product(id).await
}

/// Records fetch metrics through the stderr JSONL telemetry sink.
pub(crate) fn record_fetch_telemetry(item_count: usize, latency_ms: u64) {
    StderrJsonlTelemetrySink.record(TelemetryEvent::CatalogFetched {
        item_count,
        latency_ms,
    });
}
