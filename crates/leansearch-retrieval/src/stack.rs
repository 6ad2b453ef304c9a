//! RetrievalStack: owns the concrete stores and the embedder built from
//! configuration, and lends them to a [`Retriever`].

use std::path::Path;

use tracing::info;

use leansearch_core::config::{LeanSearchConfig, RetrievalConfig};
use leansearch_core::errors::LeanSearchResult;
use leansearch_embeddings::QueryEmbedder;
use leansearch_storage::{StorageEngine, VectorIndex};

use crate::Retriever;

pub struct RetrievalStack {
    store: StorageEngine,
    index: VectorIndex,
    embedder: QueryEmbedder,
    config: RetrievalConfig,
}

impl RetrievalStack {
    pub fn new(
        store: StorageEngine,
        index: VectorIndex,
        embedder: QueryEmbedder,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            store,
            index,
            embedder,
            config,
        }
    }

    /// Open the record store and vector index, and build the embedder.
    pub fn from_config(config: &LeanSearchConfig) -> LeanSearchResult<Self> {
        let store =
            StorageEngine::open_with_config(Path::new(&config.storage.db_path), &config.storage)?;
        let index = VectorIndex::open(Path::new(&config.index.path), config.index.metric)?;
        let embedder = QueryEmbedder::from_config(&config.embedding)?;

        info!(
            db_path = %config.storage.db_path,
            index_path = %config.index.path,
            metric = config.index.metric.as_str(),
            "retrieval stack opened"
        );
        Ok(Self::new(store, index, embedder, config.retrieval.clone()))
    }

    /// A retriever borrowing this stack's parts.
    pub fn retriever(&self) -> Retriever<'_> {
        Retriever::new(&self.embedder, &self.index, &self.store, self.config.clone())
    }

    pub fn store(&self) -> &StorageEngine {
        &self.store
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }

    pub fn embedder(&self) -> &QueryEmbedder {
        &self.embedder
    }
}
