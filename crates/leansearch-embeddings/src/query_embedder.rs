//! QueryEmbedder: the embedding client used by the retriever.
//!
//! Conditions every query on the retrieval instruction loaded at
//! construction, validates provider output, and serves repeats from the
//! L1 cache when enabled.

use leansearch_core::config::EmbeddingConfig;
use leansearch_core::errors::{EmbeddingError, LeanSearchResult};
use leansearch_core::traits::IEmbeddingProvider;
use tracing::{debug, debug_span, info};

use crate::cache::L1QueryCache;
use crate::instruction::{instructed_query, load_instruction};
use crate::providers;

pub struct QueryEmbedder {
    provider: Box<dyn IEmbeddingProvider>,
    instruction: String,
    dimensions: usize,
    cache: Option<L1QueryCache>,
}

impl QueryEmbedder {
    /// Wrap a provider with a fixed instruction. No cache.
    pub fn new(provider: Box<dyn IEmbeddingProvider>, instruction: impl Into<String>) -> Self {
        let dimensions = provider.dimensions();
        Self {
            provider,
            instruction: instruction.into(),
            dimensions,
            cache: None,
        }
    }

    /// Enable the L1 cache. A capacity of 0 leaves it disabled.
    pub fn with_cache(mut self, max_entries: u64) -> Self {
        self.cache = (max_entries > 0).then(|| L1QueryCache::new(max_entries));
        self
    }

    /// Build provider, instruction and cache from configuration.
    pub fn from_config(config: &EmbeddingConfig) -> LeanSearchResult<Self> {
        let provider = providers::create_provider(config)?;
        let instruction = load_instruction(config)?;
        let embedder = Self::new(provider, instruction).with_cache(config.cache_size);
        info!(
            provider = embedder.provider_name(),
            dims = embedder.dimensions,
            cached = embedder.cache.is_some(),
            "QueryEmbedder initialized"
        );
        Ok(embedder)
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// The exact text sent to the provider for `query`.
    pub fn format_query(&self, query: &str) -> String {
        instructed_query(&self.instruction, query)
    }

    /// Embed a batch of queries. One vector per query, in input order.
    pub fn embed(&self, queries: &[String]) -> LeanSearchResult<Vec<Vec<f32>>> {
        if queries.is_empty() {
            return Ok(Vec::new());
        }
        let _span = debug_span!(
            "leansearch.embedding",
            provider = self.provider.name(),
            batch = queries.len()
        )
        .entered();

        let texts: Vec<String> = queries.iter().map(|q| self.format_query(q)).collect();

        let Some(cache) = &self.cache else {
            return self.embed_uncached(&texts);
        };

        let keys: Vec<String> = texts.iter().map(|t| L1QueryCache::key(t)).collect();
        let mut slots: Vec<Option<Vec<f32>>> = keys.iter().map(|k| cache.get(k)).collect();
        let missing: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
            .collect();

        debug!(
            hits = texts.len() - missing.len(),
            misses = missing.len(),
            "query embedding cache lookup"
        );

        if !missing.is_empty() {
            let batch: Vec<String> = missing.iter().map(|&i| texts[i].clone()).collect();
            let fresh = self.embed_uncached(&batch)?;
            for (&i, vector) in missing.iter().zip(fresh) {
                cache.insert(keys[i].clone(), vector.clone());
                slots[i] = Some(vector);
            }
        }

        slots.into_iter().collect::<Option<Vec<_>>>().ok_or_else(|| {
            EmbeddingError::BatchSizeMismatch {
                expected: texts.len(),
                actual: 0,
            }
            .into()
        })
    }

    /// One provider call for already-instructed texts, with output validation.
    fn embed_uncached(&self, texts: &[String]) -> LeanSearchResult<Vec<Vec<f32>>> {
        let vectors = self.provider.embed_batch(texts)?;
        if vectors.len() != texts.len() {
            return Err(EmbeddingError::BatchSizeMismatch {
                expected: texts.len(),
                actual: vectors.len(),
            }
            .into());
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != self.dimensions) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: bad.len(),
            }
            .into());
        }
        Ok(vectors)
    }
}
