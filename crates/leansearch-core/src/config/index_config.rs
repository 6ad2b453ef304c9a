use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::DistanceMetric;

/// Vector index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Path of the SQLite file holding index vectors.
    pub path: String,
    pub metric: DistanceMetric,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_INDEX_PATH.to_string(),
            metric: DistanceMetric::default(),
        }
    }
}
