//! End to end: a stack opened from configuration over on-disk stores.

use leansearch_core::config::{EmbeddingConfig, IndexConfig, ProviderKind, StorageConfig};
use leansearch_core::{DistanceMetric, LeanSearchConfig, LeanSearchError, Name};
use leansearch_retrieval::RetrievalStack;
use test_fixtures::{fixture_path, load_corpus};

fn config_in(dir: &std::path::Path) -> LeanSearchConfig {
    LeanSearchConfig {
        storage: StorageConfig {
            db_path: dir.join("records.db").display().to_string(),
            ..Default::default()
        },
        index: IndexConfig {
            path: dir.join("index.db").display().to_string(),
            metric: DistanceMetric::Cosine,
        },
        embedding: EmbeddingConfig {
            provider: ProviderKind::Hashing,
            dimensions: 64,
            instruction: Some("Retrieve Lean declarations".to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Seed records, and index each one under the embedding of its informal name.
fn seeded_stack(dir: &std::path::Path) -> RetrievalStack {
    let corpus = load_corpus("nat_basic");
    let stack = RetrievalStack::from_config(&config_in(dir)).unwrap();
    stack.store().insert_records(&corpus.record_pairs()).unwrap();

    let informal: Vec<String> = corpus
        .records
        .iter()
        .map(|s| s.record.informal_name.clone())
        .collect();
    let vectors = stack.embedder().embed(&informal).unwrap();
    let entries: Vec<(String, Vec<f32>)> = corpus
        .records
        .iter()
        .map(|s| s.doc_id())
        .zip(vectors)
        .collect();
    stack.index().upsert_batch(&entries).unwrap();
    stack
}

#[test]
fn search_finds_record_by_its_informal_name() {
    let dir = tempfile::tempdir().unwrap();
    let stack = seeded_stack(dir.path());
    let corpus = load_corpus("nat_basic");
    let target = corpus.record("Nat.add");

    let results = stack
        .retriever()
        .batch_search(&[target.record.informal_name.clone()], 3)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert!(!results[0].is_empty());
    assert_eq!(results[0][0].result, target.record);
    assert!(results[0][0].distance.abs() < 1e-6);
    assert!(results[0].windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[test]
fn fetch_and_search_share_the_stack() {
    let dir = tempfile::tempdir().unwrap();
    let stack = seeded_stack(dir.path());
    let retriever = stack.retriever();

    let slots = retriever
        .batch_fetch(&[Name::parse("Group").unwrap(), Name::parse("Nope").unwrap()])
        .unwrap();
    assert!(slots[0].is_some());
    assert!(slots[1].is_none());

    let results = retriever
        .batch_search(&["a".to_string(), "b".to_string(), "c".to_string()], 2)
        .unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.len() <= 2));
}

#[test]
fn stores_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let before = {
        let stack = seeded_stack(dir.path());
        stack.retriever().search("Classical choice").unwrap()
    };

    let reopened = RetrievalStack::from_config(&config_in(dir.path())).unwrap();
    assert_eq!(reopened.store().count().unwrap(), 5);
    assert_eq!(reopened.index().count().unwrap(), 5);
    assert_eq!(reopened.index().metric(), DistanceMetric::Cosine);
    let after = reopened.retriever().search("Classical choice").unwrap();
    assert_eq!(before, after);
}

#[test]
fn missing_instruction_file_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.embedding.instruction = None;
    config.embedding.instruction_path = dir.path().join("absent.txt").display().to_string();

    let err = match RetrievalStack::from_config(&config) {
        Ok(_) => panic!("construction should fail without an instruction"),
        Err(e) => e,
    };
    assert!(matches!(err, LeanSearchError::EmbeddingError(_)));
}

#[test]
fn instruction_loads_from_prompt_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.embedding.instruction = None;
    config.embedding.instruction_path = fixture_path("prompt/retrieve_instruction.txt")
        .display()
        .to_string();

    let stack = RetrievalStack::from_config(&config).unwrap();
    let instruction = stack.embedder().instruction();
    let on_disk =
        std::fs::read_to_string(fixture_path("prompt/retrieve_instruction.txt")).unwrap();
    assert_eq!(instruction, on_disk);
    assert!(stack
        .embedder()
        .format_query("q")
        .ends_with(&format!("{instruction}\nQuery: q")));
}
