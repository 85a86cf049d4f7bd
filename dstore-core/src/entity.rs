use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::value::Value;

/// A keyed mapping of property name to [`Value`], the service's unit of
/// storage. An entity embedded in another value may carry no key.
///
/// `excluded_from_indexes` holds property paths that are omitted from the
/// service's secondary indexes. A path names either a top-level property
/// (`"description"`), a property of a nested entity (`"address.street"`),
/// or the elements of an array property (`"tags[]"`; the bare property name
/// has the same effect, applied to every element).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Entity {
    pub key: Option<Key>,
    pub properties: HashMap<String, Value>,
    pub excluded_from_indexes: BTreeSet<String>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: Key) -> Self {
        Self {
            key: Some(key),
            ..Self::default()
        }
    }

    /// Set a property, replacing any previous value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Mark a property path as excluded from indexing.
    pub fn exclude_from_indexes(mut self, path: impl Into<String>) -> Self {
        self.excluded_from_indexes.insert(path.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let entity = Entity::with_key(Key::with_name("Task", "sample"))
            .set("done", false)
            .set("priority", 4i64)
            .exclude_from_indexes("description")
            .set("description", "a long description");

        assert_eq!(entity.key.as_ref().unwrap().name(), Some("sample"));
        assert_eq!(entity.get("done"), Some(&Value::Boolean(false)));
        assert_eq!(entity.len(), 3);
        assert!(entity.excluded_from_indexes.contains("description"));
    }

    #[test]
    fn test_keyless_embedded_entity() {
        let inner = Entity::new().set("street", "Main St");
        let outer = Entity::with_key(Key::incomplete("Person")).set("address", inner.clone());
        assert_eq!(outer.get("address"), Some(&Value::Entity(inner)));
    }

    #[test]
    fn test_set_replaces() {
        let mut entity = Entity::new().set("n", 1i64).set("n", 2i64);
        assert_eq!(entity.get("n"), Some(&Value::Integer(2)));
        assert_eq!(entity.remove("n"), Some(Value::Integer(2)));
        assert!(entity.is_empty());
    }
}
