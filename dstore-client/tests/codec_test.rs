/// End-to-end tests for the pure layers of the client
///
/// These exercise the codec and builders through the public API, without
/// a live service: everything here must hold before a single RPC is
/// issued.
use bytes::Bytes;
use dstore_client::convert::{
    entity_from_proto, entity_to_proto, find_large_properties, key_from_proto, key_to_proto,
    value_from_proto, value_to_proto,
};
use dstore_client::{Entity, GeoPoint, Key, MutationKind, Timestamp, Value};

#[test]
fn entity_survives_a_wire_roundtrip() {
    let entity = Entity::with_key(Key::with_name("Task", "sample").in_namespace("staging"))
        .set("done", false)
        .set("priority", 4i64)
        .set("percent_complete", 66.5)
        .set("created", Timestamp::from_millis(1_609_459_200_000))
        .set("description", "Learn the datastore API")
        .set("payload", Bytes::from_static(b"\x00\xffdata"))
        .set("location", GeoPoint::new(40.6894, -74.0447))
        .set("parent", Key::with_id("Project", 7))
        .set("tags", vec!["fun", "programming"])
        .set(
            "address",
            Entity::new().set("street", "Main St").set("zip", "10001"),
        )
        .exclude_from_indexes("description");

    let decoded = entity_from_proto(entity_to_proto(&entity).unwrap()).unwrap();
    assert_eq!(decoded, entity);
}

#[test]
fn keys_roundtrip_complete_and_incomplete() {
    for key in [
        Key::incomplete("Task"),
        Key::with_id("Task", 42),
        Key::with_name("Company", "acme").child("Employee"),
        Key::incomplete("Task").in_namespace("ns"),
    ] {
        assert_eq!(key_from_proto(key_to_proto(&key)).unwrap(), key);
    }
}

#[test]
fn arrays_of_arrays_are_rejected() {
    let nested = Value::Array(vec![Value::Array(vec![Value::Integer(1)])]);
    assert!(value_to_proto(&nested).is_err());

    // Arrays of anything else are fine.
    let flat = Value::Array(vec![Value::Integer(1), Value::String("two".into())]);
    let decoded = value_from_proto(value_to_proto(&flat).unwrap()).unwrap();
    assert_eq!(decoded, flat);
}

#[test]
fn unknown_mutation_kind_fails_to_parse() {
    assert!("bogus".parse::<MutationKind>().is_err());
    assert_eq!(
        "upsert".parse::<MutationKind>().unwrap(),
        MutationKind::Upsert
    );
}

#[test]
fn oversized_properties_are_discovered_recursively() {
    let oversized = "x".repeat(1501);
    let entity = Entity::with_key(Key::incomplete("Story"))
        .set("title", "short")
        .set("body", oversized.as_str())
        .set(
            "chapters",
            vec![Value::Entity(Entity::new().set("text", oversized.as_str()))],
        );

    let paths = find_large_properties(&entity, 1500);
    assert_eq!(paths, vec!["body", "chapters[].text"]);
}
