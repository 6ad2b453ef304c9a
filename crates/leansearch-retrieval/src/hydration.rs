//! Hydration: turn ranked `(doc_id, distance)` hits into `QueryResult`s.

use rayon::prelude::*;
use tracing::{debug, warn};

use leansearch_core::errors::{LeanSearchError, LeanSearchResult};
use leansearch_core::models::{Neighbor, QueryResult};
use leansearch_core::traits::IRecordStore;
use leansearch_core::DocId;

/// Hydrate one hit. The index promised this document, so a store miss is
/// an integrity violation between the two stores.
pub fn hydrate_one(store: &dyn IRecordStore, hit: &Neighbor) -> LeanSearchResult<QueryResult> {
    let doc_id = DocId::decode(&hit.doc_id)?;
    let record = store
        .fetch_by_module_and_index(&doc_id.module_name, &doc_id.index)?
        .ok_or_else(|| {
            LeanSearchError::integrity(format!(
                "vector index returned {} but the record store has no such record",
                hit.doc_id
            ))
        })?;
    Ok(QueryResult {
        result: record,
        distance: hit.distance,
    })
}

/// Hydrate one query's hits, keeping rank order and at most `k` results.
///
/// The index owns ordering; a list that is not ascending is re-sorted
/// (stable, so equal distances keep the index's tie order).
pub fn hydrate_ranked(
    store: &dyn IRecordStore,
    hits: &[Neighbor],
    k: usize,
    parallel: bool,
) -> LeanSearchResult<Vec<QueryResult>> {
    let mut ranked = hits.to_vec();
    if !ranked.windows(2).all(|w| w[0].distance <= w[1].distance) {
        warn!(hits = ranked.len(), "index returned unsorted hits; re-sorting by distance");
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }
    if ranked.len() > k {
        warn!(returned = ranked.len(), k, "index returned more hits than requested");
        ranked.truncate(k);
    }

    let results = if parallel {
        ranked
            .par_iter()
            .map(|hit| hydrate_one(store, hit))
            .collect::<LeanSearchResult<Vec<_>>>()?
    } else {
        ranked
            .iter()
            .map(|hit| hydrate_one(store, hit))
            .collect::<LeanSearchResult<Vec<_>>>()?
    };

    debug!(hydrated = results.len(), "hydrated query hits");
    Ok(results)
}
