//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.waretable.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `WARETABLE_API_BASE_URL`, `WARETABLE_VIEW_URL`
//! 4. **Command-line arguments** – `--api-base-url`/`-a` and `--view-url`/`-v`
//!
//! # Configuration File
//!
//! Place `.waretable.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! api_base_url = "http://localhost:8000"
//! view_url = "app://catalog/?category=Electronics"
//! debounce_ms = 300
//! overscan = 10
//! row_height = 1
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::error::CatalogError;

/// Default products API base when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default shareable view URL carrying the navigable query state.
pub const DEFAULT_VIEW_URL: &str = "app://catalog/";

/// Default overscan rows rendered beyond the visible viewport.
pub const DEFAULT_OVERSCAN: usize = 10;

/// Default estimated row height in terminal cells.
pub const DEFAULT_ROW_HEIGHT: u64 = 1;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `WARETABLE_API_BASE_URL` or `--api-base-url`: products API base URL
/// - `WARETABLE_VIEW_URL` or `--view-url`: initial shareable view URL
/// - `WARETABLE_DEBOUNCE_MS` or `--debounce-ms`: search debounce interval
/// - `WARETABLE_OVERSCAN` or `--overscan`: extra rows rendered off-screen
/// - `WARETABLE_ROW_HEIGHT` or `--row-height`: estimated row height in cells
///
/// # Example
///
/// ```no_run
/// use waretable::WaretableConfig;
///
/// let config = WaretableConfig::load().expect("failed to load configuration");
/// let base = config.resolve_api_base();
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "WARETABLE",
    discovery(
        dotfile_name = ".waretable.toml",
        config_file_name = "waretable.toml",
        app_name = "waretable"
    )
)]
pub struct WaretableConfig {
    /// Base URL of the products API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-a <URL>`
    /// - Environment: `WARETABLE_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: Option<String>,

    /// Initial view URL carrying search/sort/category state.
    ///
    /// Can be provided via:
    /// - CLI: `--view-url <URL>` or `-v <URL>`
    /// - Environment: `WARETABLE_VIEW_URL`
    /// - Config file: `view_url = "..."`
    #[ortho_config(cli_short = 'v')]
    pub view_url: Option<String>,

    /// Quiet interval in milliseconds before search edits recompute.
    pub debounce_ms: Option<u64>,

    /// Rows rendered beyond each edge of the visible viewport.
    pub overscan: Option<usize>,

    /// Estimated row height in terminal cells.
    pub row_height: Option<u64>,
}

impl WaretableConfig {
    /// Returns the configured API base URL or the default.
    #[must_use]
    pub fn resolve_api_base(&self) -> String {
        self.api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
    }

    /// Parses the configured (or default) view URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidViewUrl`] when the configured value
    /// cannot be parsed as a URL.
    pub fn resolve_view_url(&self) -> Result<Url, CatalogError> {
        let raw = self.view_url.as_deref().unwrap_or(DEFAULT_VIEW_URL);
        raw.parse()
            .map_err(|error: url::ParseError| CatalogError::InvalidViewUrl(error.to_string()))
    }

    /// Returns the configured overscan or the default.
    #[must_use]
    pub const fn resolve_overscan(&self) -> usize {
        match self.overscan {
            Some(overscan) => overscan,
            None => DEFAULT_OVERSCAN,
        }
    }

    /// Returns the configured row height or the default, clamped to at
    /// least one cell.
    #[must_use]
    pub fn resolve_row_height(&self) -> u64 {
        self.row_height.unwrap_or(DEFAULT_ROW_HEIGHT).max(1)
    }
}
