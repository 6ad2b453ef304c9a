/// Vector index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("{reason}")]
    Unavailable { reason: String },

    /// A query vector does not match the dimensionality of the stored vectors.
    #[error("query has {actual} dimensions, index stores {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("index returned {actual} result lists for {expected} queries")]
    BatchMismatch { expected: usize, actual: usize },
}
