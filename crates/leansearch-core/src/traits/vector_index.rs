use crate::errors::LeanSearchResult;
use crate::models::Neighbor;

/// Nearest-neighbor queries against the vector index.
pub trait IVectorIndex: Send + Sync {
    /// One result list per input vector, in input order. Each list is
    /// ascending by distance and holds at most `k` neighbors.
    fn query(&self, vectors: &[Vec<f32>], k: usize) -> LeanSearchResult<Vec<Vec<Neighbor>>>;
}
