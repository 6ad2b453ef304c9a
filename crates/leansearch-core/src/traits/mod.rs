pub mod embedding;
pub mod record_store;
pub mod vector_index;

pub use embedding::IEmbeddingProvider;
pub use record_store::IRecordStore;
pub use vector_index::IVectorIndex;
