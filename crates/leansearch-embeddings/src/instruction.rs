//! The retrieval instruction that conditions every query embedding.

use std::path::Path;

use leansearch_core::config::EmbeddingConfig;
use leansearch_core::errors::{EmbeddingError, LeanSearchResult};

/// Resolve the instruction: inline config text wins over the instruction file.
/// Either is used exactly as written.
pub fn load_instruction(config: &EmbeddingConfig) -> LeanSearchResult<String> {
    match &config.instruction {
        Some(inline) => Ok(inline.clone()),
        None => load_instruction_file(Path::new(&config.instruction_path)),
    }
}

/// Read an instruction file verbatim.
pub fn load_instruction_file(path: &Path) -> LeanSearchResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        EmbeddingError::InstructionLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Lay out one query under the instruction.
pub fn instructed_query(instruction: &str, query: &str) -> String {
    format!("Instruct: {instruction}\nQuery: {query}")
}
