//! Retriever: batch exact fetch and batch semantic search.
//!
//! Search pipeline: embed all queries in one call → one batched index
//! query → decode each hit's document id → hydrate from the record store.

use rayon::prelude::*;
use tracing::{info, warn};

use leansearch_core::config::RetrievalConfig;
use leansearch_core::errors::{IndexError, LeanSearchError, LeanSearchResult};
use leansearch_core::models::{Name, QueryResult, Record};
use leansearch_core::traits::{IRecordStore, IVectorIndex};
use leansearch_embeddings::QueryEmbedder;

use crate::hydration;
use crate::{fetch_span, search_span};

/// Composes the embedder, the vector index and the record store.
pub struct Retriever<'a> {
    embedder: &'a QueryEmbedder,
    index: &'a dyn IVectorIndex,
    store: &'a dyn IRecordStore,
    config: RetrievalConfig,
}

impl<'a> Retriever<'a> {
    pub fn new(
        embedder: &'a QueryEmbedder,
        index: &'a dyn IVectorIndex,
        store: &'a dyn IRecordStore,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            embedder,
            index,
            store,
            config,
        }
    }

    /// Look up each name independently. The output has one slot per input
    /// name, in input order; a miss is `None` in its slot.
    pub fn batch_fetch(&self, names: &[Name]) -> LeanSearchResult<Vec<Option<Record>>> {
        let _span = fetch_span!(names.len()).entered();

        let slots = if self.config.parallel_hydration {
            names
                .par_iter()
                .map(|name| self.store.fetch_by_name(name))
                .collect::<LeanSearchResult<Vec<_>>>()?
        } else {
            self.store.fetch_bulk_by_name(names)?
        };

        info!(
            requested = names.len(),
            found = slots.iter().filter(|s| s.is_some()).count(),
            "batch fetch complete"
        );
        Ok(slots)
    }

    /// Search every query for its `num_results` nearest records.
    ///
    /// One result list per query, in query order, each ascending by
    /// distance. Any embedding, index, identifier or hydration failure
    /// fails the whole call.
    pub fn batch_search(
        &self,
        queries: &[String],
        num_results: usize,
    ) -> LeanSearchResult<Vec<Vec<QueryResult>>> {
        if num_results == 0 {
            return Err(LeanSearchError::invalid_argument(
                "num_results must be positive",
            ));
        }
        if queries.is_empty() {
            return Ok(Vec::new());
        }

        let k = if num_results > self.config.max_num_results {
            warn!(
                requested = num_results,
                max = self.config.max_num_results,
                "clamping num_results"
            );
            self.config.max_num_results
        } else {
            num_results
        };

        let _span = search_span!(queries.len(), k).entered();

        let vectors = self.embedder.embed(queries)?;
        let candidates = self.index.query(&vectors, k)?;
        if candidates.len() != queries.len() {
            return Err(IndexError::BatchMismatch {
                expected: queries.len(),
                actual: candidates.len(),
            }
            .into());
        }

        let results = candidates
            .iter()
            .map(|hits| {
                hydration::hydrate_ranked(self.store, hits, k, self.config.parallel_hydration)
            })
            .collect::<LeanSearchResult<Vec<_>>>()?;

        info!(
            queries = queries.len(),
            k,
            results = results.iter().map(Vec::len).sum::<usize>(),
            "batch search complete"
        );
        Ok(results)
    }

    /// Search a single query with the configured default result count.
    pub fn search(&self, query: &str) -> LeanSearchResult<Vec<QueryResult>> {
        let mut results =
            self.batch_search(&[query.to_string()], self.config.default_num_results)?;
        Ok(results.pop().unwrap_or_default())
    }
}
