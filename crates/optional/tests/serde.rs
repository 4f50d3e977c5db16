use optional::Optional;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Lookup {
    key: String,
    hit: Optional<u32>,
}

#[test]
fn serializes_as_nullable_json() {
    let present = Lookup { key: "a".into(), hit: Optional::of(7).unwrap() };
    assert_eq!(serde_json::to_string(&present).unwrap(), r#"{"key":"a","hit":7}"#);

    let missing = Lookup { key: "b".into(), hit: Optional::EMPTY };
    assert_eq!(serde_json::to_string(&missing).unwrap(), r#"{"key":"b","hit":null}"#);
}

#[test]
fn deserializes_through_null_check() {
    let lookup: Lookup = serde_json::from_str(r#"{"key":"a","hit":7}"#).unwrap();
    assert_eq!(lookup.hit.get(), Ok(7));

    let lookup: Lookup = serde_json::from_str(r#"{"key":"b","hit":null}"#).unwrap();
    assert!(lookup.hit.is_empty());

    // A nested null is still null-like, so the outer Optional stays empty.
    let nested: Optional<Option<u32>> = serde_json::from_str("null").unwrap();
    assert!(nested.is_empty());
}
