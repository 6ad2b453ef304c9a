use leansearch_core::config::*;
use leansearch_core::DistanceMetric;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = LeanSearchConfig::from_toml("").unwrap();

    // Storage defaults
    assert_eq!(config.storage.db_path, "leansearch.db");
    assert_eq!(config.storage.read_pool_size, 4);
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    // Index defaults
    assert_eq!(config.index.path, "leansearch-index.db");
    assert_eq!(config.index.metric, DistanceMetric::L2);

    // Embedding defaults
    assert_eq!(config.embedding.provider, ProviderKind::Hashing);
    assert_eq!(config.embedding.dimensions, 4096);
    assert_eq!(
        config.embedding.instruction_path,
        "prompt/retrieve_instruction.txt"
    );
    assert!(config.embedding.instruction.is_none());
    assert_eq!(config.embedding.cache_size, 1024);

    // Retrieval defaults
    assert_eq!(config.retrieval.default_num_results, 10);
    assert_eq!(config.retrieval.max_num_results, 100);
    assert!(!config.retrieval.parallel_hydration);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[index]
metric = "cosine"

[embedding]
provider = "http"
endpoint = "http://embedder:8080"
instruction = "Given a math statement, retrieve the matching declaration"

[retrieval]
parallel_hydration = true
"#;
    let config = LeanSearchConfig::from_toml(toml).unwrap();
    assert_eq!(config.index.metric, DistanceMetric::Cosine);
    assert_eq!(config.embedding.provider, ProviderKind::Http);
    assert_eq!(config.embedding.endpoint, "http://embedder:8080");
    assert!(config.embedding.instruction.is_some());
    assert!(config.retrieval.parallel_hydration);
    // Non-overridden fields keep defaults
    assert_eq!(config.index.path, "leansearch-index.db");
    assert_eq!(config.retrieval.max_num_results, 100);
}

#[test]
fn config_rejects_unknown_metric() {
    let err = LeanSearchConfig::from_toml("[index]\nmetric = \"manhattan\"\n").unwrap_err();
    assert!(matches!(
        err,
        leansearch_core::LeanSearchError::ConfigError(_)
    ));
}

#[test]
fn config_serde_roundtrip() {
    let config = LeanSearchConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = LeanSearchConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
    assert_eq!(
        roundtripped.embedding.dimensions,
        config.embedding.dimensions
    );
}

#[test]
fn config_from_missing_file_is_config_error() {
    let err = LeanSearchConfig::from_file(std::path::Path::new("/nonexistent/leansearch.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/leansearch.toml"));
}
