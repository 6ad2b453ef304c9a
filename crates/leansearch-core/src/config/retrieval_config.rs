use serde::{Deserialize, Serialize};

use super::defaults;

/// Retriever configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub default_num_results: usize,
    /// Requests above this are clamped.
    pub max_num_results: usize,
    /// Hydrate and bulk-fetch on the rayon pool.
    pub parallel_hydration: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_num_results: defaults::DEFAULT_NUM_RESULTS,
            max_num_results: defaults::DEFAULT_MAX_NUM_RESULTS,
            parallel_hydration: false,
        }
    }
}
