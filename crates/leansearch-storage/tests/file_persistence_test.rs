//! File-backed stores: data survives reopen, reads go through the read pool.

use leansearch_core::traits::{IRecordStore, IVectorIndex};
use leansearch_core::{DistanceMetric, Name};
use leansearch_storage::migrations;
use leansearch_storage::pool::pragmas::verify_wal_mode;
use leansearch_storage::{StorageEngine, VectorIndex};
use test_fixtures::load_corpus;

#[test]
fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.db");
    let corpus = load_corpus("nat_basic");

    {
        let store = StorageEngine::open(&path).unwrap();
        store.insert_records(&corpus.record_pairs()).unwrap();
    }

    let store = StorageEngine::open(&path).unwrap();
    assert_eq!(store.count().unwrap(), corpus.records.len());
    let record = store
        .fetch_by_module_and_index(&Name::parse("Nat").unwrap(), "3")
        .unwrap()
        .unwrap();
    assert_eq!(record.name, Name::parse("Nat.add").unwrap());
}

#[test]
fn writer_runs_in_wal_mode_and_migrations_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.db");
    let store = StorageEngine::open(&path).unwrap();

    store
        .pool()
        .writer
        .with_conn_sync(|conn| {
            assert!(verify_wal_mode(conn)?);
            let before = migrations::current_version(conn)?;
            let after = migrations::run_migrations(conn, migrations::RECORD_MIGRATIONS)?;
            assert_eq!(before, after);
            Ok(())
        })
        .unwrap();
    assert!(store.pool().readers.as_ref().is_some_and(|r| r.size() >= 1));
}

#[test]
fn fresh_database_migrates_to_latest_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.db");
    let store = StorageEngine::open(&path).unwrap();

    let version = store
        .pool()
        .writer
        .with_conn_sync(migrations::current_version)
        .unwrap();
    assert_eq!(version, 1);

    let index = VectorIndex::open(&dir.path().join("index.db"), DistanceMetric::L2).unwrap();
    assert_eq!(index.count().unwrap(), 0);
}

#[test]
fn in_memory_pool_has_no_readers() {
    let store = StorageEngine::open_in_memory().unwrap();
    assert!(store.pool().readers.is_none());
}

#[test]
fn vectors_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.db");
    let corpus = load_corpus("nat_basic");

    {
        let index = VectorIndex::open(&path, DistanceMetric::L2).unwrap();
        index.upsert_batch(&corpus.embedding_pairs()).unwrap();
    }

    let index = VectorIndex::open(&path, DistanceMetric::L2).unwrap();
    assert_eq!(index.count().unwrap(), corpus.embeddings.len());
    let results = index.query(&[vec![0.0, 1.0, 0.0, 0.0]], 1).unwrap();
    assert_eq!(results[0][0].doc_id, "Nat:1");
}
