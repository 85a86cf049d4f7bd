/// Type conversions between protobuf and local entity types
///
/// This module provides bidirectional conversions for keys, values and
/// entities, applies index-exclusion flags onto the wire representation,
/// and can discover properties whose indexed payload exceeds the
/// service's per-property limit.
///
/// Due to Rust's orphan rules, we use conversion functions instead of
/// trait implementations.

use bytes::Bytes;
use dstore_core::{Entity, GeoPoint, IdOrName, Key, PathElement, Timestamp, Value};
use dstore_proto::{self as proto, value::ValueType};
use std::collections::BTreeSet;

use crate::error::Result;

// ============================================================================
// Key Conversions
// ============================================================================

/// Convert a local Key to a protobuf Key.
///
/// The project id is not carried here; the service normalizes partition
/// ids from the enclosing request. A partition is only attached when the
/// key is scoped to a namespace.
pub fn key_to_proto(key: &Key) -> proto::Key {
    let partition_id = key.namespace.as_ref().map(|ns| proto::PartitionId {
        project_id: String::new(),
        namespace_id: ns.clone(),
    });

    let path = key
        .path
        .iter()
        .map(|element| proto::key::PathElement {
            kind: element.kind.clone(),
            id_type: element.id.as_ref().map(|id| match id {
                IdOrName::Id(id) => proto::key::path_element::IdType::Id(*id),
                IdOrName::Name(name) => {
                    proto::key::path_element::IdType::Name(name.clone())
                }
            }),
        })
        .collect();

    proto::Key { partition_id, path }
}

/// Convert a protobuf Key back to a local Key.
pub fn key_from_proto(key: proto::Key) -> Result<Key> {
    let namespace = key
        .partition_id
        .and_then(|p| (!p.namespace_id.is_empty()).then_some(p.namespace_id));

    let path = key
        .path
        .into_iter()
        .map(|element| PathElement {
            kind: element.kind,
            id: element.id_type.map(|id| match id {
                proto::key::path_element::IdType::Id(id) => IdOrName::Id(id),
                proto::key::path_element::IdType::Name(name) => IdOrName::Name(name),
            }),
        })
        .collect();

    let key = Key { namespace, path };
    key.validate()?;
    Ok(key)
}

// ============================================================================
// Value Conversions
// ============================================================================

pub(crate) fn timestamp_to_proto(ts: Timestamp) -> ::prost_types::Timestamp {
    ::prost_types::Timestamp {
        seconds: ts.seconds,
        nanos: ts.nanos,
    }
}

pub(crate) fn timestamp_from_proto(ts: ::prost_types::Timestamp) -> Timestamp {
    Timestamp {
        seconds: ts.seconds,
        nanos: ts.nanos,
    }
}

/// Convert a local Value to a protobuf Value.
///
/// Fails when an array directly contains another array; the wire format
/// has no representation for it.
pub fn value_to_proto(value: &Value) -> Result<proto::Value> {
    encode_property("", value, &BTreeSet::new())
}

/// Encode one property value, consulting the exclusion set for the flag
/// to stamp onto scalars. `path` is the property path from the entity
/// root (`a`, `a.b`, `a[]`); the exclusion flag never lands on an array
/// value itself, only on its elements.
fn encode_property(
    path: &str,
    value: &Value,
    exclusions: &BTreeSet<String>,
) -> Result<proto::Value> {
    let excluded = exclusions.contains(path);

    let proto_value = match value {
        Value::Array(items) => {
            let element_path = format!("{path}[]");
            let elements_excluded = excluded || exclusions.contains(&element_path);
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                if matches!(item, Value::Array(_)) {
                    return Err(dstore_core::Error::NestedArray(path.to_string()).into());
                }
                let mut element = encode_property(&element_path, item, exclusions)?;
                if elements_excluded {
                    element.exclude_from_indexes = true;
                }
                values.push(element);
            }
            return Ok(proto::Value {
                meaning: 0,
                exclude_from_indexes: false,
                value_type: Some(ValueType::ArrayValue(proto::ArrayValue { values })),
            });
        }
        Value::Entity(inner) => {
            // Dotted exclusion paths descend into the embedded entity,
            // merged with the exclusions the inner entity carries itself.
            let mut inner_exclusions = child_exclusions(exclusions, path);
            inner_exclusions.extend(inner.excluded_from_indexes.iter().cloned());
            ValueType::EntityValue(entity_message(inner, &inner_exclusions)?)
        }
        Value::Null => ValueType::NullValue(0),
        Value::Boolean(b) => ValueType::BooleanValue(*b),
        Value::Integer(i) => ValueType::IntegerValue(*i),
        Value::Double(d) => ValueType::DoubleValue(*d),
        Value::Timestamp(ts) => ValueType::TimestampValue(timestamp_to_proto(*ts)),
        Value::String(s) => ValueType::StringValue(s.clone()),
        Value::Blob(b) => ValueType::BlobValue(b.to_vec()),
        Value::GeoPoint(g) => ValueType::GeoPointValue(proto::LatLng {
            latitude: g.latitude,
            longitude: g.longitude,
        }),
        Value::Key(k) => ValueType::KeyValue(key_to_proto(k)),
    };

    Ok(proto::Value {
        meaning: 0,
        exclude_from_indexes: excluded,
        value_type: Some(proto_value),
    })
}

/// Exclusion paths scoped to a child entity: `a.b` seen from property `a`
/// becomes `b`.
fn child_exclusions(exclusions: &BTreeSet<String>, path: &str) -> BTreeSet<String> {
    let prefix = format!("{path}.");
    exclusions
        .iter()
        .filter_map(|p| p.strip_prefix(&prefix).map(str::to_string))
        .collect()
}

/// Convert a protobuf Value back to a local Value.
pub fn value_from_proto(value: proto::Value) -> Result<Value> {
    let value_type = value
        .value_type
        .ok_or_else(|| dstore_core::Error::InvalidValue("no value type is set".to_string()))?;

    match value_type {
        ValueType::NullValue(_) => Ok(Value::Null),
        ValueType::BooleanValue(b) => Ok(Value::Boolean(b)),
        ValueType::IntegerValue(i) => Ok(Value::Integer(i)),
        ValueType::DoubleValue(d) => Ok(Value::Double(d)),
        ValueType::TimestampValue(ts) => Ok(Value::Timestamp(timestamp_from_proto(ts))),
        ValueType::StringValue(s) => Ok(Value::String(s)),
        ValueType::BlobValue(b) => Ok(Value::Blob(Bytes::from(b))),
        ValueType::GeoPointValue(g) => Ok(Value::GeoPoint(GeoPoint {
            latitude: g.latitude,
            longitude: g.longitude,
        })),
        ValueType::KeyValue(k) => Ok(Value::Key(key_from_proto(k)?)),
        ValueType::EntityValue(e) => Ok(Value::Entity(entity_from_proto(e)?)),
        ValueType::ArrayValue(array) => {
            let items: Result<Vec<Value>> =
                array.values.into_iter().map(value_from_proto).collect();
            Ok(Value::Array(items?))
        }
    }
}

// ============================================================================
// Entity Conversions
// ============================================================================

/// Convert a local Entity to a protobuf Entity, applying its exclusion
/// set per property path.
pub fn entity_to_proto(entity: &Entity) -> Result<proto::Entity> {
    entity_message(entity, &entity.excluded_from_indexes)
}

fn entity_message(entity: &Entity, exclusions: &BTreeSet<String>) -> Result<proto::Entity> {
    let mut properties = std::collections::HashMap::with_capacity(entity.properties.len());
    for (name, value) in &entity.properties {
        properties.insert(name.clone(), encode_property(name, value, exclusions)?);
    }
    Ok(proto::Entity {
        key: entity.key.as_ref().map(key_to_proto),
        properties,
    })
}

/// Convert a protobuf Entity back to a local Entity, reconstructing the
/// exclusion set from the per-value flags. Flags on embedded entity
/// properties end up on the inner entity's own set.
pub fn entity_from_proto(entity: proto::Entity) -> Result<Entity> {
    let key = entity.key.map(key_from_proto).transpose()?;

    let mut properties = std::collections::HashMap::with_capacity(entity.properties.len());
    let mut excluded_from_indexes = BTreeSet::new();

    for (name, value) in entity.properties {
        if value.exclude_from_indexes {
            excluded_from_indexes.insert(name.clone());
        } else if let Some(ValueType::ArrayValue(array)) = &value.value_type {
            let all_excluded =
                !array.values.is_empty() && array.values.iter().all(|v| v.exclude_from_indexes);
            if all_excluded {
                excluded_from_indexes.insert(format!("{name}[]"));
            }
        }
        properties.insert(name, value_from_proto(value)?);
    }

    Ok(Entity {
        key,
        properties,
        excluded_from_indexes,
    })
}

// ============================================================================
// Large-property discovery
// ============================================================================

/// Walk an entity's value tree and return the paths whose indexed payload
/// (UTF-8 string bytes or blob bytes) exceeds `threshold`. Callers can
/// merge the result into the entity's exclusion set instead of letting
/// the service reject the commit.
pub fn find_large_properties(entity: &Entity, threshold: usize) -> Vec<String> {
    let mut paths = Vec::new();
    for (name, value) in &entity.properties {
        walk_large(name, value, threshold, &mut paths);
    }
    paths.sort();
    paths.dedup();
    paths
}

fn indexed_payload_len(value: &Value) -> usize {
    match value {
        Value::String(s) => s.len(),
        Value::Blob(b) => b.len(),
        _ => 0,
    }
}

fn walk_large(path: &str, value: &Value, threshold: usize, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            let element_path = format!("{path}[]");
            for item in items {
                walk_large(&element_path, item, threshold, out);
            }
        }
        Value::Entity(inner) => {
            for (name, value) in &inner.properties {
                walk_large(&format!("{path}.{name}"), value, threshold, out);
            }
        }
        _ => {
            if indexed_payload_len(value) > threshold {
                out.push(path.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_INDEX_SIZE_LIMIT;
    use crate::error::ClientError;

    fn roundtrip(value: Value) {
        let proto = value_to_proto(&value).unwrap();
        assert_eq!(value_from_proto(proto).unwrap(), value);
    }

    #[test]
    fn test_value_roundtrip_all_variants() {
        roundtrip(Value::Null);
        roundtrip(Value::Boolean(true));
        roundtrip(Value::Integer(i64::MIN));
        roundtrip(Value::Double(2.75));
        roundtrip(Value::Timestamp(Timestamp::new(1_609_459_200, 123)));
        roundtrip(Value::String("hello".into()));
        roundtrip(Value::Blob(Bytes::from_static(b"\x00\x01\x02")));
        roundtrip(Value::GeoPoint(GeoPoint::new(40.6894, -74.0447)));
        roundtrip(Value::Key(Key::with_name("Task", "sample").in_namespace("ns")));
        roundtrip(Value::Entity(
            Entity::new().set("inner", 7i64).set("flag", true),
        ));
        roundtrip(Value::Array(vec![
            Value::Integer(1),
            Value::String("two".into()),
            Value::Null,
        ]));
    }

    #[test]
    fn test_key_roundtrip() {
        for key in [
            Key::with_id("Task", 42),
            Key::with_name("Task", "sample"),
            Key::incomplete("Task"),
            Key::with_name("Company", "acme").child_id("Employee", 7),
            Key::with_id("Task", 1).in_namespace("staging"),
            Key::incomplete("Task").in_namespace("staging"),
        ] {
            let proto = key_to_proto(&key);
            assert_eq!(key_from_proto(proto).unwrap(), key);
        }
    }

    #[test]
    fn test_incomplete_key_has_no_id_type() {
        let proto = key_to_proto(&Key::incomplete("Task"));
        assert_eq!(proto.path.len(), 1);
        assert!(proto.path[0].id_type.is_none());
        assert!(proto.partition_id.is_none());
    }

    #[test]
    fn test_nested_array_rejected() {
        let value = Value::Array(vec![Value::Array(vec![Value::Integer(1)])]);
        let err = value_to_proto(&value).unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));

        let entity = Entity::new().set("matrix", value);
        assert!(entity_to_proto(&entity).is_err());
    }

    #[test]
    fn test_missing_value_type_rejected() {
        let proto = proto::Value {
            meaning: 0,
            exclude_from_indexes: false,
            value_type: None,
        };
        // The decode failure surfaces as a local invalid-argument error.
        let err = value_from_proto(proto).unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }

    #[test]
    fn test_scalar_exclusion_flag() {
        let entity = Entity::new()
            .set("description", "long text")
            .set("priority", 4i64)
            .exclude_from_indexes("description");

        let proto = entity_to_proto(&entity).unwrap();
        assert!(proto.properties["description"].exclude_from_indexes);
        assert!(!proto.properties["priority"].exclude_from_indexes);
    }

    #[test]
    fn test_array_exclusion_lands_on_elements() {
        let entity = Entity::new()
            .set("tags", vec!["a", "b"])
            .exclude_from_indexes("tags[]");

        let proto = entity_to_proto(&entity).unwrap();
        let tags = &proto.properties["tags"];
        // The flag lives on the elements, never the array value itself.
        assert!(!tags.exclude_from_indexes);
        match tags.value_type.as_ref().unwrap() {
            ValueType::ArrayValue(array) => {
                assert_eq!(array.values.len(), 2);
                assert!(array.values.iter().all(|v| v.exclude_from_indexes));
            }
            other => panic!("expected array, got {other:?}"),
        }

        // The bare property name has the same effect.
        let entity = Entity::new()
            .set("tags", vec!["a", "b"])
            .exclude_from_indexes("tags");
        let proto = entity_to_proto(&entity).unwrap();
        match proto.properties["tags"].value_type.as_ref().unwrap() {
            ValueType::ArrayValue(array) => {
                assert!(array.values.iter().all(|v| v.exclude_from_indexes))
            }
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_dotted_exclusion_descends_into_embedded_entity() {
        let inner = Entity::new().set("street", "Main St").set("zip", "10001");
        let entity = Entity::new()
            .set("address", inner)
            .exclude_from_indexes("address.street");

        let proto = entity_to_proto(&entity).unwrap();
        match proto.properties["address"].value_type.as_ref().unwrap() {
            ValueType::EntityValue(inner) => {
                assert!(inner.properties["street"].exclude_from_indexes);
                assert!(!inner.properties["zip"].exclude_from_indexes);
            }
            other => panic!("expected entity, got {other:?}"),
        }
    }

    #[test]
    fn test_exclusion_roundtrip() {
        let entity = Entity::with_key(Key::with_name("Task", "t"))
            .set("description", "text")
            .set("tags", vec!["a", "b"])
            .exclude_from_indexes("description")
            .exclude_from_indexes("tags[]");

        let decoded = entity_from_proto(entity_to_proto(&entity).unwrap()).unwrap();
        assert_eq!(decoded, entity);
    }

    #[test]
    fn test_find_large_properties() {
        let oversized = "x".repeat(DEFAULT_INDEX_SIZE_LIMIT + 1);
        let entity = Entity::new()
            .set("small", "fine")
            .set("big", oversized.as_str())
            .set("blob", vec![0u8; DEFAULT_INDEX_SIZE_LIMIT + 1])
            .set("tags", vec![Value::String("ok".into()), Value::String(oversized.clone())])
            .set(
                "nested",
                Entity::new().set("inner", oversized.as_str()).set("n", 1i64),
            );

        let paths = find_large_properties(&entity, DEFAULT_INDEX_SIZE_LIMIT);
        assert_eq!(paths, vec!["big", "blob", "nested.inner", "tags[]"]);

        // Under-threshold values are untouched.
        let small = Entity::new().set("a", "b");
        assert!(find_large_properties(&small, DEFAULT_INDEX_SIZE_LIMIT).is_empty());
    }
}
