//! # leansearch-core
//!
//! Foundation crate for the LeanSearch retrieval core.
//! Defines the record model, the vector-index document identifier codec,
//! errors, capability traits, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod doc_id;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LeanSearchConfig;
pub use doc_id::DocId;
pub use errors::{LeanSearchError, LeanSearchResult};
pub use models::{DeclarationKind, DistanceMetric, Name, NameComponent, Neighbor, QueryResult, Record};
