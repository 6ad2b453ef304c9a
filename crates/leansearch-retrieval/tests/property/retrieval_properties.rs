//! Property tests: search output shape and ordering over random indexes.

use proptest::prelude::*;

use leansearch_core::config::RetrievalConfig;
use leansearch_core::{DeclarationKind, DistanceMetric, DocId, Name, Record};
use leansearch_embeddings::providers::HashingProvider;
use leansearch_embeddings::QueryEmbedder;
use leansearch_retrieval::Retriever;
use leansearch_storage::{StorageEngine, VectorIndex};

const DIMS: usize = 8;

fn make_record(module: &Name, ordinal: u64) -> Record {
    let decl = format!("lemma_{ordinal}");
    Record {
        module_name: module.clone(),
        kind: DeclarationKind::Theorem,
        name: module.clone().child(decl.as_str()),
        signature: format!("theorem {decl} : True"),
        type_: "True".to_string(),
        value: None,
        docstring: None,
        informal_name: decl.clone(),
        informal_description: format!("informal {decl}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_search_shape_and_order(
        vectors in prop::collection::vec(prop::collection::vec(-1.0f32..1.0, DIMS), 0..25),
        queries in prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,3}", 0..6),
        k in 1usize..12,
        metric_idx in 0usize..3,
        parallel in any::<bool>(),
    ) {
        let metric = [DistanceMetric::L2, DistanceMetric::Cosine, DistanceMetric::Ip][metric_idx];
        let module = Name::parse("Mathlib.Order.Basic").unwrap();

        let store = StorageEngine::open_in_memory().unwrap();
        let index = VectorIndex::open_in_memory(metric).unwrap();
        let records: Vec<(Record, u64)> = (0..vectors.len() as u64)
            .map(|i| (make_record(&module, i), i))
            .collect();
        store.insert_records(&records).unwrap();
        let entries: Vec<(String, Vec<f32>)> = vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (DocId::encode(&module, i as u64), v.clone()))
            .collect();
        index.upsert_batch(&entries).unwrap();

        let embedder = QueryEmbedder::new(Box::new(HashingProvider::new(DIMS)), "Retrieve");
        let config = RetrievalConfig { parallel_hydration: parallel, ..Default::default() };
        let retriever = Retriever::new(&embedder, &index, &store, config);

        let results = retriever.batch_search(&queries, k).unwrap();
        prop_assert_eq!(results.len(), queries.len());
        for list in &results {
            prop_assert_eq!(list.len(), k.min(vectors.len()));
            prop_assert!(list.windows(2).all(|w| w[0].distance <= w[1].distance));
            for hit in list {
                prop_assert_eq!(&hit.result.module_name, &module);
            }
        }
    }
}
