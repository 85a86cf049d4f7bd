/// Mutation planning for the commit RPC
///
/// Turns caller-supplied entities into wire mutations, remembers which
/// entities had incomplete keys at call time, and writes server-allocated
/// ids back onto those keys in order after a successful commit.
use std::str::FromStr;

use dstore_core::{Entity, Key};
use dstore_proto as proto;

use crate::convert::{entity_to_proto, find_large_properties, key_to_proto};
use crate::error::{ClientError, Result};

/// The four mutation operations a commit accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Insert,
    Update,
    Upsert,
    Delete,
}

impl FromStr for MutationKind {
    type Err = dstore_core::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "insert" => Ok(MutationKind::Insert),
            "update" => Ok(MutationKind::Update),
            "upsert" => Ok(MutationKind::Upsert),
            "delete" => Ok(MutationKind::Delete),
            other => Err(dstore_core::Error::UnknownMutationKind(other.to_string())),
        }
    }
}

/// The wire mutations for one commit, plus the ordered indices of the
/// entities whose keys were incomplete when the plan was built.
#[derive(Debug, Clone, Default)]
pub(crate) struct MutationPlan {
    pub mutations: Vec<proto::Mutation>,
    pub incomplete: Vec<usize>,
}

/// Build insert/update/upsert mutations for a batch of entities.
///
/// Validation happens here, before any serialization reaches the network:
/// every entity must have a key, key paths must be structurally valid,
/// and update requires a complete key. When `auto_exclude` carries a
/// threshold, properties whose indexed payload exceeds it are marked
/// excluded from indexing instead of letting the service reject the save.
pub(crate) fn plan_puts(
    kind: MutationKind,
    entities: &[Entity],
    auto_exclude: Option<usize>,
) -> Result<MutationPlan> {
    let mut plan = MutationPlan {
        mutations: Vec::with_capacity(entities.len()),
        incomplete: Vec::new(),
    };

    for (index, entity) in entities.iter().enumerate() {
        let key = entity.key.as_ref().ok_or(dstore_core::Error::MissingKey)?;
        key.validate()?;

        if !key.is_complete() {
            if kind == MutationKind::Update {
                return Err(dstore_core::Error::IncompleteKey(
                    key.kind().unwrap_or_default().to_string(),
                )
                .into());
            }
            plan.incomplete.push(index);
        }

        let message = match auto_exclude {
            Some(threshold) => {
                let mut entity = entity.clone();
                for path in find_large_properties(&entity, threshold) {
                    entity.excluded_from_indexes.insert(path);
                }
                entity_to_proto(&entity)?
            }
            None => entity_to_proto(entity)?,
        };

        let operation = match kind {
            MutationKind::Insert => proto::mutation::Operation::Insert(message),
            MutationKind::Update => proto::mutation::Operation::Update(message),
            MutationKind::Upsert => proto::mutation::Operation::Upsert(message),
            MutationKind::Delete => {
                return Err(ClientError::InvalidArgument(
                    "delete takes keys, not entities".into(),
                ))
            }
        };

        plan.mutations.push(proto::Mutation {
            operation: Some(operation),
            conflict_detection_strategy: None,
        });
    }

    Ok(plan)
}

/// Build delete mutations for a batch of keys. Keys must be complete.
pub(crate) fn plan_deletes(keys: &[Key]) -> Result<Vec<proto::Mutation>> {
    keys.iter()
        .map(|key| {
            key.validate()?;
            if !key.is_complete() {
                return Err(dstore_core::Error::IncompleteKey(
                    key.kind().unwrap_or_default().to_string(),
                )
                .into());
            }
            Ok(proto::Mutation {
                operation: Some(proto::mutation::Operation::Delete(key_to_proto(key))),
                conflict_detection_strategy: None,
            })
        })
        .collect()
}

/// Extract the allocated numeric id from one mutation result, if the
/// server assigned one.
pub(crate) fn allocated_id(result: &proto::MutationResult) -> Option<i64> {
    result
        .key
        .as_ref()
        .and_then(|k| k.path.last())
        .and_then(|e| match e.id_type {
            Some(proto::key::path_element::IdType::Id(id)) => Some(id),
            _ => None,
        })
}

/// Backfill server-allocated ids onto the caller's keys.
///
/// The i-th mutation result corresponds to the i-th mutation; `incomplete`
/// holds the mutation indices whose entity keys need an id, so each
/// original key receives the id at its own index, never a swapped or
/// skipped one.
pub(crate) fn backfill_ids(
    entities: &mut [Entity],
    incomplete: &[usize],
    results: &[proto::MutationResult],
) -> Result<()> {
    for &index in incomplete {
        let allocated = results
            .get(index)
            .and_then(allocated_id)
            .ok_or_else(|| {
                ClientError::Unknown(format!(
                    "commit response missing allocated id for mutation {index}"
                ))
            })?;

        let entity = entities
            .get_mut(index)
            .ok_or_else(|| ClientError::Unknown(format!("no entity at index {index}")))?;
        if let Some(key) = entity.key.as_mut() {
            key.complete_with_id(allocated)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dstore_proto::key::path_element::IdType;

    fn allocated_result(id: i64) -> proto::MutationResult {
        proto::MutationResult {
            key: Some(proto::Key {
                partition_id: None,
                path: vec![proto::key::PathElement {
                    kind: "Task".into(),
                    id_type: Some(IdType::Id(id)),
                }],
            }),
            version: 1,
            conflict_detected: false,
        }
    }

    #[test]
    fn test_mutation_kind_parsing() {
        assert_eq!("insert".parse::<MutationKind>().unwrap(), MutationKind::Insert);
        assert_eq!("upsert".parse::<MutationKind>().unwrap(), MutationKind::Upsert);

        let err = "bogus".parse::<MutationKind>().unwrap_err();
        assert_eq!(err, dstore_core::Error::UnknownMutationKind("bogus".into()));
    }

    #[test]
    fn test_plan_tracks_incomplete_indices() {
        let entities = vec![
            Entity::with_key(Key::incomplete("Task")).set("n", 1i64),
            Entity::with_key(Key::with_id("Task", 7)).set("n", 2i64),
            Entity::with_key(Key::incomplete("Task")).set("n", 3i64),
        ];

        let plan = plan_puts(MutationKind::Upsert, &entities, None).unwrap();
        assert_eq!(plan.mutations.len(), 3);
        assert_eq!(plan.incomplete, vec![0, 2]);
    }

    #[test]
    fn test_update_requires_complete_key() {
        let entities = vec![Entity::with_key(Key::incomplete("Task"))];
        assert!(plan_puts(MutationKind::Update, &entities, None).is_err());
    }

    #[test]
    fn test_missing_key_rejected() {
        let entities = vec![Entity::new().set("n", 1i64)];
        let err = plan_puts(MutationKind::Upsert, &entities, None).unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }

    #[test]
    fn test_backfill_matches_indices() {
        let mut entities = vec![
            Entity::with_key(Key::incomplete("Task")),
            Entity::with_key(Key::with_id("Task", 7)),
            Entity::with_key(Key::incomplete("Task")),
        ];
        let plan = plan_puts(MutationKind::Upsert, &entities, None).unwrap();

        let results = vec![
            allocated_result(100),
            proto::MutationResult::default(),
            allocated_result(200),
        ];
        backfill_ids(&mut entities, &plan.incomplete, &results).unwrap();

        // Each original key receives the id at its own index.
        assert_eq!(entities[0].key.as_ref().unwrap().id(), Some(100));
        assert_eq!(entities[1].key.as_ref().unwrap().id(), Some(7));
        assert_eq!(entities[2].key.as_ref().unwrap().id(), Some(200));
    }

    #[test]
    fn test_backfill_missing_id_is_an_error() {
        let mut entities = vec![Entity::with_key(Key::incomplete("Task"))];
        let results = vec![proto::MutationResult::default()];
        assert!(backfill_ids(&mut entities, &[0], &results).is_err());
    }

    #[test]
    fn test_plan_deletes_requires_complete_keys() {
        let mutations = plan_deletes(&[Key::with_id("Task", 1)]).unwrap();
        assert_eq!(mutations.len(), 1);
        assert!(matches!(
            mutations[0].operation,
            Some(proto::mutation::Operation::Delete(_))
        ));

        assert!(plan_deletes(&[Key::incomplete("Task")]).is_err());
    }

    #[test]
    fn test_auto_exclude_marks_large_properties() {
        let oversized = "x".repeat(32);
        let entities = vec![Entity::with_key(Key::incomplete("Task"))
            .set("big", oversized.as_str())
            .set("small", "ok")];

        let plan = plan_puts(MutationKind::Upsert, &entities, Some(16)).unwrap();
        let entity = match plan.mutations[0].operation.as_ref().unwrap() {
            proto::mutation::Operation::Upsert(e) => e,
            other => panic!("expected upsert, got {other:?}"),
        };
        assert!(entity.properties["big"].exclude_from_indexes);
        assert!(!entity.properties["small"].exclude_from_indexes);
        // The caller's entity is untouched.
        assert!(entities[0].excluded_from_indexes.is_empty());
    }
}
