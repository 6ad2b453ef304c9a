//! Exact nearest-neighbor search over the embedding table.
//!
//! Brute-force scan: every stored vector is scored against every query
//! vector of the batch in a single pass over the table. Each query keeps
//! only its `k` best candidates in a bounded max-heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rusqlite::{params, Connection};
use tracing::warn;

use leansearch_core::errors::{IndexError, LeanSearchError, LeanSearchResult};
use leansearch_core::models::{DistanceMetric, Neighbor};

use crate::to_storage_err;

/// Heap entry ordered by distance, then doc id. The heap's top is the
/// worst of the kept candidates.
struct Candidate(Neighbor);

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .distance
            .total_cmp(&other.0.distance)
            .then_with(|| self.0.doc_id.cmp(&other.0.doc_id))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Keep `(doc_id, distance)` if it beats the worst of the `k` kept so far.
fn offer(heap: &mut BinaryHeap<Candidate>, k: usize, doc_id: &str, distance: f64) {
    if heap.len() < k {
        heap.push(Candidate(Neighbor::new(doc_id, distance)));
        return;
    }
    let beats_worst = heap.peek().is_some_and(|worst| {
        distance
            .total_cmp(&worst.0.distance)
            .then_with(|| doc_id.cmp(worst.0.doc_id.as_str()))
            == Ordering::Less
    });
    if beats_worst {
        heap.pop();
        heap.push(Candidate(Neighbor::new(doc_id, distance)));
    }
}

/// Score every stored vector against each query and keep the `k` closest
/// per query, ascending by distance, ties broken by doc id.
///
/// A query whose dimensionality differs from a stored vector is an
/// `IndexError::DimensionMismatch`.
pub fn search_batch(
    conn: &Connection,
    queries: &[Vec<f32>],
    k: usize,
    metric: DistanceMetric,
) -> LeanSearchResult<Vec<Vec<Neighbor>>> {
    let mut stmt = conn
        .prepare_cached("SELECT doc_id, vector, dimensions FROM embedding")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            let doc_id: String = row.get(0)?;
            let blob: Vec<u8> = row.get(1)?;
            let dimensions: i64 = row.get(2)?;
            Ok((doc_id, blob, dimensions))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut heaps: Vec<BinaryHeap<Candidate>> = queries
        .iter()
        .map(|_| BinaryHeap::with_capacity(k.saturating_add(1).min(1024)))
        .collect();
    let mut skipped = 0usize;

    for row in rows {
        let (doc_id, blob, dims) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let stored = bytes_to_f32_vec(&blob, dims as usize).ok_or_else(|| {
            LeanSearchError::integrity(format!(
                "embedding for {doc_id} holds {} bytes, expected {} dimensions",
                blob.len(),
                dims
            ))
        })?;

        for (query, heap) in queries.iter().zip(heaps.iter_mut()) {
            if query.len() != stored.len() {
                return Err(IndexError::DimensionMismatch {
                    expected: stored.len(),
                    actual: query.len(),
                }
                .into());
            }
            let distance = metric_distance(metric, query, &stored);
            if distance.is_nan() {
                skipped += 1;
                continue;
            }
            offer(heap, k, &doc_id, distance);
        }
    }

    if skipped > 0 {
        warn!(skipped, "skipped stored vectors with NaN distance");
    }

    Ok(heaps
        .into_iter()
        .map(|heap| heap.into_sorted_vec().into_iter().map(|c| c.0).collect())
        .collect())
}

/// Insert or replace the vector stored under `doc_id`.
pub fn upsert_embedding(conn: &Connection, doc_id: &str, vector: &[f32]) -> LeanSearchResult<()> {
    conn.execute(
        "INSERT INTO embedding (doc_id, vector, dimensions)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(doc_id) DO UPDATE SET
            vector = excluded.vector,
            dimensions = excluded.dimensions",
        params![doc_id, f32_vec_to_bytes(vector), vector.len() as i64],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Upsert many vectors in one transaction.
pub fn upsert_embeddings(
    conn: &Connection,
    entries: &[(String, Vec<f32>)],
) -> LeanSearchResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("upsert_embeddings begin: {e}")))?;

    for (doc_id, vector) in entries {
        if let Err(e) = upsert_embedding(&tx, doc_id, vector) {
            let _ = tx.rollback();
            return Err(e);
        }
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("upsert_embeddings commit: {e}")))?;
    Ok(entries.len())
}

/// Number of stored vectors.
pub fn count(conn: &Connection) -> LeanSearchResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM embedding", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

/// Distance under `metric`; lower is closer.
pub fn metric_distance(metric: DistanceMetric, a: &[f32], b: &[f32]) -> f64 {
    match metric {
        DistanceMetric::L2 => a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| {
                let d = (*x as f64) - (*y as f64);
                d * d
            })
            .sum(),
        DistanceMetric::Cosine => 1.0 - cosine_similarity(a, b),
        // Meaningful for unit-length vectors only; clamped so a distance
        // is never negative.
        DistanceMetric::Ip => (1.0 - dot(a, b)).max(0.0),
    }
}

/// Convert f32 slice to bytes (little-endian).
fn f32_vec_to_bytes(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert bytes back to an f32 vec. `None` when the blob length does not
/// match the recorded dimensions.
fn bytes_to_f32_vec(bytes: &[u8], expected_dims: usize) -> Option<Vec<f32>> {
    if bytes.len() != expected_dims * 4 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    )
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum()
}

/// Cosine similarity; 0 when either vector has zero norm.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let norm_a = dot(a, a).sqrt();
    let norm_b = dot(b, b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot(a, b) / (norm_a * norm_b)
}
