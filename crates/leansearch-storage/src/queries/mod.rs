pub mod record_crud;
pub mod record_lookup;
pub mod vector_search;
