//! Configuration, loaded from TOML. Every section and field has a default,
//! so an empty document is a valid config.

pub mod defaults;
mod embedding_config;
mod index_config;
mod observability_config;
mod retrieval_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::{EmbeddingConfig, ProviderKind};
pub use index_config::IndexConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use storage_config::StorageConfig;

use crate::errors::{LeanSearchError, LeanSearchResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeanSearchConfig {
    pub storage: StorageConfig,
    pub index: IndexConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub observability: ObservabilityConfig,
}

impl LeanSearchConfig {
    /// Parse a TOML document.
    pub fn from_toml(s: &str) -> LeanSearchResult<Self> {
        toml::from_str(s).map_err(|e| LeanSearchError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> LeanSearchResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LeanSearchError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }
}
