//! Test fixture loader for LeanSearch corpora.
//!
//! A corpus fixture pairs records (with their ordinal inside their module)
//! and the vectors the index stores for them. Shared by integration tests
//! across crates.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use leansearch_core::{DocId, Record};

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A record and its ordinal within its module.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecord {
    pub index: u64,
    pub record: Record,
}

impl SeedRecord {
    /// The document id the vector index uses for this record.
    pub fn doc_id(&self) -> String {
        DocId::encode(&self.record.module_name, self.index)
    }
}

/// A stored index vector.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEmbedding {
    pub doc_id: String,
    pub vector: Vec<f32>,
}

/// A small consistent corpus: records plus index vectors.
#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
    pub description: String,
    pub records: Vec<SeedRecord>,
    pub embeddings: Vec<SeedEmbedding>,
}

impl Corpus {
    /// `(record, index)` pairs in the shape the store seeds from.
    pub fn record_pairs(&self) -> Vec<(Record, u64)> {
        self.records
            .iter()
            .map(|s| (s.record.clone(), s.index))
            .collect()
    }

    /// `(doc_id, vector)` pairs in the shape the index seeds from.
    pub fn embedding_pairs(&self) -> Vec<(String, Vec<f32>)> {
        self.embeddings
            .iter()
            .map(|e| (e.doc_id.clone(), e.vector.clone()))
            .collect()
    }

    /// Find a seeded record by its textual name.
    pub fn record(&self, name: &str) -> &SeedRecord {
        self.records
            .iter()
            .find(|s| s.record.name.to_string() == name)
            .unwrap_or_else(|| panic!("fixture has no record named {name}"))
    }
}

/// Load a corpus from `data/corpus/<name>.json`.
pub fn load_corpus(name: &str) -> Corpus {
    load_fixture(&format!("corpus/{name}.json"))
}
