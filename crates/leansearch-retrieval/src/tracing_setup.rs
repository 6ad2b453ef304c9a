//! Span definitions for the retrieval operations and subscriber setup.

use tracing_subscriber::EnvFilter;

use leansearch_core::config::ObservabilityConfig;
use leansearch_core::errors::{LeanSearchError, LeanSearchResult};

/// Create a batch search span.
#[macro_export]
macro_rules! search_span {
    ($queries:expr, $k:expr) => {
        tracing::info_span!($crate::tracing_setup::names::SEARCH, queries = $queries, k = $k)
    };
}

/// Create a batch fetch span.
#[macro_export]
macro_rules! fetch_span {
    ($names:expr) => {
        tracing::info_span!($crate::tracing_setup::names::FETCH, names = $names)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEARCH: &str = "leansearch.search";
    pub const FETCH: &str = "leansearch.fetch";
}

/// Install a global fmt subscriber. `RUST_LOG` wins over the configured
/// level. Returns `false` when a subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> LeanSearchResult<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            LeanSearchError::ConfigError(format!("invalid log level {:?}: {e}", config.log_level))
        })?,
    };

    let installed = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };
    Ok(installed.is_ok())
}
