//! Embedding providers and the config-driven factory.

mod hashing;
mod http_provider;

use std::time::Duration;

use leansearch_core::config::{EmbeddingConfig, ProviderKind};
use leansearch_core::errors::LeanSearchResult;
use leansearch_core::traits::IEmbeddingProvider;
use tracing::info;

pub use hashing::HashingProvider;
pub use http_provider::HttpProvider;

/// Build the provider named by the config.
pub fn create_provider(config: &EmbeddingConfig) -> LeanSearchResult<Box<dyn IEmbeddingProvider>> {
    let provider: Box<dyn IEmbeddingProvider> = match config.provider {
        ProviderKind::Hashing => Box::new(HashingProvider::new(config.dimensions)),
        ProviderKind::Http => Box::new(HttpProvider::new(
            &config.endpoint,
            config.dimensions,
            Duration::from_secs(config.timeout_secs),
        )?),
    };
    info!(
        provider = provider.name(),
        dims = provider.dimensions(),
        "embedding provider created"
    );
    Ok(provider)
}
