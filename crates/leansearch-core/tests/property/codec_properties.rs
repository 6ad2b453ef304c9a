//! Property tests: name textual round trip, document id round trip.

use proptest::prelude::*;

use leansearch_core::{DocId, Name, NameComponent};

fn component() -> impl Strategy<Value = NameComponent> {
    prop_oneof![
        "[A-Za-z_][A-Za-z0-9_']{0,12}".prop_map(NameComponent::Str),
        (0u64..10_000).prop_map(NameComponent::Num),
        "[0-9][A-Za-z0-9 .]{0,6}".prop_map(NameComponent::Str),
        "[A-Za-z:][A-Za-z0-9:.]{0,6}".prop_map(NameComponent::Str),
    ]
}

fn name() -> impl Strategy<Value = Name> {
    prop::collection::vec(component(), 1..6).prop_map(Name::new)
}

proptest! {
    #[test]
    fn prop_name_text_roundtrip(n in name()) {
        let text = n.to_string();
        let parsed = Name::parse(&text).unwrap();
        prop_assert_eq!(parsed, n);
    }

    #[test]
    fn prop_name_json_roundtrip(n in name()) {
        let json = n.to_json().unwrap();
        let back: Name = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, n);
    }

    #[test]
    fn prop_doc_id_roundtrip(m in name(), i in any::<u64>()) {
        let id = DocId::encode(&m, i);
        let decoded = DocId::decode(&id).unwrap();
        prop_assert_eq!(&decoded.module_name, &m);
        prop_assert_eq!(&decoded.index, &i.to_string());
        prop_assert_eq!(decoded.ordinal(), Some(i));
    }
}
