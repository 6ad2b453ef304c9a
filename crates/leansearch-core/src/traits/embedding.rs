use crate::errors::LeanSearchResult;

/// Embedding generation provider: a pure batch text-to-vector function.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, one vector per text, in input order.
    fn embed_batch(&self, texts: &[String]) -> LeanSearchResult<Vec<Vec<f32>>>;

    /// Embed a single text.
    fn embed(&self, text: &str) -> LeanSearchResult<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text.to_string()])?;
        Ok(vectors.pop().unwrap_or_default())
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
