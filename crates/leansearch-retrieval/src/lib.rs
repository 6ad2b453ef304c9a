//! # leansearch-retrieval
//!
//! The read path. [`Retriever`] answers batch exact fetches by name and
//! batch semantic searches: queries are embedded, matched against the
//! vector index, and every hit is hydrated into a full record from the
//! metadata store. Ordering is preserved across queries and within each
//! query's ranked list.

pub mod hydration;
pub mod retriever;
pub mod stack;
pub mod tracing_setup;

pub use retriever::Retriever;
pub use stack::RetrievalStack;
