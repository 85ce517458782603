//! Marker-key collision escaping.

use island_props::{
    deserialize, serialize, Deserializer, PropValue, Serializer, MARKER_KEY,
};
use serde_json::json;

#[test]
fn colliding_object_round_trips_verbatim() {
    // A plain mapping that happens to use the marker key with an unrelated
    // value must come back as that mapping, not as a byte buffer.
    let tree = PropValue::Object(vec![(
        MARKER_KEY.to_string(),
        PropValue::Str("u8a".to_string()),
    )]);

    let result = serialize(&tree);
    assert!(result.requires_deserializer);
    assert!(!result.has_signals);

    let wire: serde_json::Value = serde_json::from_str(&result.serialized).unwrap();
    assert_eq!(wire, json!({"_f": "l", "k": "u8a", "v": {}}));

    let back = deserialize(&result.serialized, None).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn sibling_fields_survive_the_escape() {
    let tree = PropValue::from(json!({"a": 1, "_f": "s", "b": [true, null]}));
    let result = serialize(&tree);
    let back = deserialize(&result.serialized, None).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn escaped_marker_value_is_itself_encoded() {
    // The colliding value can be anything, including a value that needs its
    // own envelope.
    let tree = PropValue::Object(vec![
        (MARKER_KEY.to_string(), PropValue::Bytes(vec![9, 8])),
        ("x".to_string(), PropValue::Integer(1)),
    ]);
    let result = serialize(&tree);

    let wire: serde_json::Value = serde_json::from_str(&result.serialized).unwrap();
    assert_eq!(
        wire,
        json!({"_f": "l", "k": {"_f": "u8a", "d": "CQg="}, "v": {"x": 1}})
    );

    let back = deserialize(&result.serialized, None).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn nested_collisions_escape_independently() {
    let tree = PropValue::from(json!({"_f": 1, "inner": {"_f": 2}}));
    let result = serialize(&tree);
    let back = deserialize(&result.serialized, None).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn custom_marker_key_is_honored() {
    let serializer = Serializer::with_marker("__tag");
    let deserializer = Deserializer::with_marker("__tag");

    let tree = PropValue::Object(vec![
        ("data".to_string(), PropValue::Bytes(vec![1])),
        ("__tag".to_string(), PropValue::Str("l".to_string())),
        // Not reserved under this configuration; conveyed as-is.
        ("_f".to_string(), PropValue::Str("u8a".to_string())),
    ]);

    let result = serializer.serialize(&tree);
    let wire: serde_json::Value = serde_json::from_str(&result.serialized).unwrap();
    assert_eq!(wire["v"]["data"]["__tag"], json!("u8a"));
    assert_eq!(wire["v"]["_f"], json!("u8a"));

    let back = deserializer.deserialize(&result.serialized, None).unwrap();
    assert_eq!(back, tree);
}
