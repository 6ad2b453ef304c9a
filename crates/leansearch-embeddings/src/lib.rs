//! # leansearch-embeddings
//!
//! The query embedding client. [`QueryEmbedder`] conditions every query on a
//! fixed retrieval instruction, batches provider calls, and optionally
//! caches query vectors in memory.

pub mod cache;
pub mod instruction;
pub mod providers;
pub mod query_embedder;

pub use query_embedder::QueryEmbedder;
