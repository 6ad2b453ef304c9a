use serde::{Deserialize, Serialize};

use super::defaults;

/// Which embedding provider backs the query embedder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Deterministic local hashing provider. Works offline.
    #[default]
    Hashing,
    /// Remote text-embeddings-inference style server.
    Http,
}

/// Embedding client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: ProviderKind,
    pub dimensions: usize,
    /// Base URL of the embedding server (`http` provider only).
    pub endpoint: String,
    /// Inline retrieval instruction. Takes precedence over `instruction_path`.
    pub instruction: Option<String>,
    pub instruction_path: String,
    /// L1 query-embedding cache capacity. 0 disables the cache.
    pub cache_size: u64,
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            instruction: None,
            instruction_path: defaults::DEFAULT_INSTRUCTION_PATH.to_string(),
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
            timeout_secs: defaults::DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}
