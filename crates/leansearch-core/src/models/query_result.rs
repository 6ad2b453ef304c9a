use serde::{Deserialize, Serialize};

use super::Record;

/// A hydrated search hit. Built per search call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub result: Record,
    /// Embedding-space dissimilarity; lower is more relevant.
    pub distance: f64,
}

/// One raw hit from the vector index: a document id and its distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub doc_id: String,
    pub distance: f64,
}

impl Neighbor {
    pub fn new(doc_id: impl Into<String>, distance: f64) -> Self {
        Self {
            doc_id: doc_id.into(),
            distance,
        }
    }
}
