//! Property tests: seeded records are reachable by both keys, index
//! results stay sorted and bounded.

use proptest::prelude::*;

use leansearch_core::traits::{IRecordStore, IVectorIndex};
use leansearch_core::{DeclarationKind, DistanceMetric, DocId, Name, Record};
use leansearch_storage::{StorageEngine, VectorIndex};

fn make_record(module: &Name, decl: &str, kind: DeclarationKind) -> Record {
    Record {
        module_name: module.clone(),
        kind,
        name: module.clone().child(decl),
        signature: format!("def {decl}"),
        type_: "Prop".to_string(),
        value: None,
        docstring: None,
        informal_name: decl.to_string(),
        informal_description: format!("informal {decl}"),
    }
}

proptest! {
    #[test]
    fn prop_seeded_record_reachable_by_both_keys(
        module in prop::collection::vec("[A-Z][a-z]{1,8}", 1..4),
        decl in "[a-z][a-z_]{0,10}",
        index in 0u64..100_000,
        kind_idx in 0usize..DeclarationKind::ALL.len(),
    ) {
        let module = Name::from_iter(module.iter().map(String::as_str));
        let record = make_record(&module, &decl, DeclarationKind::ALL[kind_idx]);
        let store = StorageEngine::open_in_memory().unwrap();
        store.insert_record(&record, index).unwrap();

        let by_name = store.fetch_by_name(&record.name).unwrap();
        prop_assert_eq!(by_name.as_ref(), Some(&record));

        let doc_id = DocId::decode(&DocId::encode(&module, index)).unwrap();
        let by_key = store
            .fetch_by_module_and_index(&doc_id.module_name, &doc_id.index)
            .unwrap();
        prop_assert_eq!(by_key.as_ref(), Some(&record));
    }

    #[test]
    fn prop_index_results_sorted_and_bounded(
        vectors in prop::collection::vec(prop::collection::vec(-1.0f32..1.0, 3), 1..30),
        query in prop::collection::vec(-1.0f32..1.0, 3),
        k in 1usize..10,
    ) {
        let index = VectorIndex::open_in_memory(DistanceMetric::L2).unwrap();
        let entries: Vec<(String, Vec<f32>)> = vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("M:{i}"), v.clone()))
            .collect();
        index.upsert_batch(&entries).unwrap();

        let results = index.query(&[query], k).unwrap();
        prop_assert_eq!(results.len(), 1);
        prop_assert_eq!(results[0].len(), k.min(vectors.len()));
        prop_assert!(results[0].windows(2).all(|w| w[0].distance <= w[1].distance));
    }
}
