//! Default values for every config field.

pub const DEFAULT_DB_PATH: &str = "leansearch.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_INDEX_PATH: &str = "leansearch-index.db";

pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 4096;
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "http://127.0.0.1:8080";
pub const DEFAULT_INSTRUCTION_PATH: &str = "prompt/retrieve_instruction.txt";
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 1024;
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_NUM_RESULTS: usize = 10;
pub const DEFAULT_MAX_NUM_RESULTS: usize = 100;

pub const DEFAULT_LOG_LEVEL: &str = "info";
