//! Waretable CLI entrypoint for the catalogue table TUI.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use bubbletea_rs::Program;
use ortho_config::OrthoConfig;

use waretable::catalog::intake::{CatalogIntake, CatalogSnapshot};
use waretable::catalog::vocab;
use waretable::engine::query::Query;
use waretable::tui::{CatalogApp, CatalogSeed, set_initial_catalog, set_refresh_context};
use waretable::{CatalogError, HttpProductGateway, WaretableConfig};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CatalogError> {
    let config = load_config()?;
    let api_base = config.resolve_api_base();
    let share_url = config.resolve_view_url()?;
    let query = Query::from_url(&share_url);

    let seed = load_seed(&config, &api_base, share_url, query).await;

    // Store the seed in global state for Model::init() to retrieve.
    // If already set (e.g. re-running the TUI in the same process), this is
    // a no-op and the existing data remains.
    let _ = set_initial_catalog(seed);
    let _ = set_refresh_context(api_base);

    run_tui().await.map_err(|error| CatalogError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<WaretableConfig, CatalogError> {
    WaretableConfig::load().map_err(|error| CatalogError::Configuration {
        message: error.to_string(),
    })
}

/// Fetches the catalogue and derives the vocabularies for the initial seed.
///
/// A failed fetch does not abort startup: the TUI starts on an empty
/// dataset with the error surfaced and the fallback vocabularies keep the
/// filter controls usable until a retry succeeds.
async fn load_seed(
    config: &WaretableConfig,
    api_base: &str,
    share_url: url::Url,
    query: Query,
) -> CatalogSeed {
    let row_height = config.resolve_row_height();
    let overscan = config.resolve_overscan();

    let fetched = fetch_initial_snapshot(api_base).await;
    match fetched {
        Ok((snapshot, latency_ms)) => {
            tracing::debug!(
                "loaded {} items in {latency_ms}ms from {api_base}",
                snapshot.items.len()
            );
            CatalogSeed {
                items: snapshot.items,
                categories: snapshot.categories,
                brands: snapshot.brands,
                query,
                share_url,
                row_height,
                overscan,
                error: None,
            }
        }
        Err(error) => CatalogSeed {
            items: Vec::new(),
            categories: vocab::fallback_categories(),
            brands: vocab::fallback_brands(),
            query,
            share_url,
            row_height,
            overscan,
            error: Some(error.to_string()),
        },
    }
}

async fn fetch_initial_snapshot(api_base: &str) -> Result<(CatalogSnapshot, u64), CatalogError> {
    let gateway = HttpProductGateway::new(api_base)?;
    let start = Instant::now();
    let snapshot = CatalogIntake::new(&gateway).load().await?;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "latency over u64::MAX milliseconds is unrealistic"
    )]
    let latency_ms = start.elapsed().as_millis() as u64;
    Ok((snapshot, latency_ms))
}

/// Runs the bubbletea-rs program with the `CatalogApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // Build and run the program using the builder pattern.
    // CatalogApp::init() will retrieve data from module-level storage.
    let program = Program::<CatalogApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
