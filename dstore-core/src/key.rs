use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a single key path element, assigned either by the caller
/// (name) or by the service (numeric id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IdOrName {
    Id(i64),
    Name(String),
}

/// One `(kind, identifier)` step of a key path. An element with no
/// identifier is incomplete; the service assigns a numeric id on commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathElement {
    pub kind: String,
    pub id: Option<IdOrName>,
}

impl PathElement {
    pub fn incomplete(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
        }
    }

    pub fn with_id(kind: impl Into<String>, id: i64) -> Self {
        Self {
            kind: kind.into(),
            id: Some(IdOrName::Id(id)),
        }
    }

    pub fn with_name(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: Some(IdOrName::Name(name.into())),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.id.is_some()
    }
}

/// Ordered kind/identifier path locating an entity within a namespace
/// partition. The project id is not part of the key; it is supplied by the
/// client when the key is put on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Key {
    pub namespace: Option<String>,
    pub path: Vec<PathElement>,
}

impl Key {
    /// Create an incomplete key of the given kind. The service allocates the
    /// numeric id when the entity is first committed.
    pub fn incomplete(kind: impl Into<String>) -> Self {
        Self {
            namespace: None,
            path: vec![PathElement::incomplete(kind)],
        }
    }

    /// Create a complete key with a numeric id.
    pub fn with_id(kind: impl Into<String>, id: i64) -> Self {
        Self {
            namespace: None,
            path: vec![PathElement::with_id(kind, id)],
        }
    }

    /// Create a complete key with a caller-assigned name.
    pub fn with_name(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            path: vec![PathElement::with_name(kind, name)],
        }
    }

    /// Scope the key to a namespace.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Extend the path with an incomplete child element.
    pub fn child(mut self, kind: impl Into<String>) -> Self {
        self.path.push(PathElement::incomplete(kind));
        self
    }

    /// Extend the path with a child element identified by numeric id.
    pub fn child_id(mut self, kind: impl Into<String>, id: i64) -> Self {
        self.path.push(PathElement::with_id(kind, id));
        self
    }

    /// Extend the path with a child element identified by name.
    pub fn child_name(mut self, kind: impl Into<String>, name: impl Into<String>) -> Self {
        self.path.push(PathElement::with_name(kind, name));
        self
    }

    /// Kind of the entity the key points at (the last path element).
    pub fn kind(&self) -> Option<&str> {
        self.path.last().map(|e| e.kind.as_str())
    }

    /// Numeric id of the last path element, if assigned.
    pub fn id(&self) -> Option<i64> {
        match self.path.last().and_then(|e| e.id.as_ref()) {
            Some(IdOrName::Id(id)) => Some(*id),
            _ => None,
        }
    }

    /// Name of the last path element, if assigned.
    pub fn name(&self) -> Option<&str> {
        match self.path.last().and_then(|e| e.id.as_ref()) {
            Some(IdOrName::Name(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    /// A key is complete when every path element carries an id or name.
    pub fn is_complete(&self) -> bool {
        !self.path.is_empty() && self.path.iter().all(PathElement::is_complete)
    }

    /// The key of the parent entity, or `None` for a root key.
    pub fn parent(&self) -> Option<Key> {
        if self.path.len() < 2 {
            return None;
        }
        Some(Key {
            namespace: self.namespace.clone(),
            path: self.path[..self.path.len() - 1].to_vec(),
        })
    }

    /// Check the structural invariants: the path is non-empty and only the
    /// last element may be incomplete.
    pub fn validate(&self) -> Result<()> {
        if self.path.is_empty() {
            return Err(Error::EmptyKeyPath);
        }
        for element in &self.path[..self.path.len() - 1] {
            if !element.is_complete() {
                return Err(Error::InvalidKeyPath(element.kind.clone()));
            }
        }
        Ok(())
    }

    /// Assign a server-allocated id to the trailing incomplete element.
    /// Used to backfill keys after a commit allocates ids.
    pub fn complete_with_id(&mut self, id: i64) -> Result<()> {
        let last = self.path.last_mut().ok_or(Error::EmptyKeyPath)?;
        if last.id.is_some() {
            return Err(Error::CompleteKey(last.kind.clone()));
        }
        last.id = Some(IdOrName::Id(id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_and_incomplete() {
        assert!(Key::with_id("Task", 42).is_complete());
        assert!(Key::with_name("Task", "sample").is_complete());
        assert!(!Key::incomplete("Task").is_complete());
    }

    #[test]
    fn test_kind_id_name_accessors() {
        let key = Key::with_id("Task", 42);
        assert_eq!(key.kind(), Some("Task"));
        assert_eq!(key.id(), Some(42));
        assert_eq!(key.name(), None);

        let key = Key::with_name("Task", "sample");
        assert_eq!(key.name(), Some("sample"));
        assert_eq!(key.id(), None);
    }

    #[test]
    fn test_parent() {
        let key = Key::with_name("Company", "acme").child_id("Employee", 7);
        let parent = key.parent().unwrap();
        assert_eq!(parent, Key::with_name("Company", "acme"));
        assert_eq!(parent.parent(), None);
    }

    #[test]
    fn test_parent_keeps_namespace() {
        let key = Key::with_id("A", 1).in_namespace("ns").child("B");
        assert_eq!(key.parent().unwrap().namespace.as_deref(), Some("ns"));
    }

    #[test]
    fn test_validate_rejects_interior_incomplete() {
        let key = Key {
            namespace: None,
            path: vec![
                PathElement::incomplete("Company"),
                PathElement::with_id("Employee", 7),
            ],
        };
        assert_eq!(key.validate(), Err(Error::InvalidKeyPath("Company".into())));

        let empty = Key::default();
        assert_eq!(empty.validate(), Err(Error::EmptyKeyPath));
    }

    #[test]
    fn test_complete_with_id() {
        let mut key = Key::incomplete("Task");
        key.complete_with_id(99).unwrap();
        assert_eq!(key.id(), Some(99));

        // A second assignment must fail.
        assert_eq!(key.complete_with_id(100), Err(Error::CompleteKey("Task".into())));
    }
}
