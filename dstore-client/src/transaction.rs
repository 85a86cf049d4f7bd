/// Transactions with a client-side mutation buffer
///
/// Writes inside a transaction are validated immediately but buffered
/// locally; nothing reaches the network until `commit`, which flushes the
/// whole ordered buffer as one transactional commit RPC and then writes
/// server-allocated ids back onto the keys that were incomplete when
/// buffered. Reads go through the transaction id so they see the
/// transaction's snapshot.
use dstore_core::{Entity, Key};
use dstore_proto as proto;

use crate::client::{CommitSummary, Datastore};
use crate::error::{ClientError, Result};
use crate::mutation::{allocated_id, plan_deletes, plan_puts, MutationKind};
use crate::query::{Query, QueryResponse};

/// Ordered buffer of wire mutations awaiting a transactional commit.
///
/// Owned by a single transaction and only ever appended to sequentially;
/// no locking is needed. Entities buffered with incomplete keys keep a
/// backfill slot (mutation index, key) so the ids allocated at commit
/// land on the caller's keys.
#[derive(Debug, Default)]
pub(crate) struct MutationBuffer<'k> {
    mutations: Vec<proto::Mutation>,
    backfill: Vec<(usize, &'k mut Key)>,
}

impl<'k> MutationBuffer<'k> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and buffer one entity write. No RPC is issued. An
    /// incomplete key is remembered for id backfill at commit.
    pub fn push_put(&mut self, kind: MutationKind, entity: &'k mut Entity) -> Result<()> {
        let plan = plan_puts(kind, std::slice::from_ref(&*entity), None)?;
        let index = self.mutations.len();
        self.mutations.extend(plan.mutations);
        if !plan.incomplete.is_empty() {
            if let Some(key) = entity.key.as_mut() {
                self.backfill.push((index, key));
            }
        }
        Ok(())
    }

    /// Validate and buffer one delete. No RPC is issued.
    pub fn push_delete(&mut self, key: &Key) -> Result<()> {
        self.mutations.extend(plan_deletes(std::slice::from_ref(key))?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn into_parts(self) -> (Vec<proto::Mutation>, Vec<(usize, &'k mut Key)>) {
        (self.mutations, self.backfill)
    }
}

/// Build the single commit request that flushes a transaction's buffer.
pub(crate) fn transactional_commit_request(
    project_id: &str,
    transaction: Vec<u8>,
    mutations: Vec<proto::Mutation>,
) -> proto::CommitRequest {
    proto::CommitRequest {
        project_id: project_id.to_string(),
        mode: proto::commit_request::Mode::Transactional as i32,
        mutations,
        transaction_selector: Some(proto::commit_request::TransactionSelector::Transaction(
            transaction,
        )),
    }
}

/// Write the ids allocated by a commit onto the buffered keys, each at
/// its own mutation index.
fn apply_backfill(
    backfill: Vec<(usize, &mut Key)>,
    results: &[proto::MutationResult],
) -> Result<()> {
    for (index, key) in backfill {
        let id = results.get(index).and_then(allocated_id).ok_or_else(|| {
            ClientError::Unknown(format!(
                "commit response missing allocated id for mutation {index}"
            ))
        })?;
        key.complete_with_id(id)?;
    }
    Ok(())
}

/// An open transaction
///
/// Obtained from [`Datastore::transaction`]. Writes are buffered and sent
/// as one atomic commit; entities buffered with incomplete keys get their
/// server-allocated ids written back in place when `commit` returns, in
/// buffer order. The entity borrows are held until commit or rollback.
///
/// # Example
/// ```no_run
/// # use dstore_client::{Datastore, DatastoreConfig, Entity, Key};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut ds = Datastore::connect(DatastoreConfig::new().with_project_id("p")).await?;
/// let mut task = Entity::with_key(Key::incomplete("Task")).set("done", false);
/// let mut tx = ds.transaction().await?;
/// tx.insert(&mut task)?;
/// tx.commit().await?;
/// // The incomplete key now carries its server-allocated id.
/// assert!(task.key.as_ref().unwrap().id().is_some());
/// # Ok(())
/// # }
/// ```
pub struct Transaction<'a, 'k> {
    ds: &'a mut Datastore,
    id: Vec<u8>,
    buffer: MutationBuffer<'k>,
}

impl<'a, 'k> Transaction<'a, 'k> {
    pub(crate) fn new(ds: &'a mut Datastore, id: Vec<u8>) -> Self {
        Self {
            ds,
            id,
            buffer: MutationBuffer::new(),
        }
    }

    /// The server-assigned transaction identifier.
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    /// Number of buffered mutations.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Buffer an upsert (the default save semantics).
    pub fn save(&mut self, entity: &'k mut Entity) -> Result<()> {
        self.upsert(entity)
    }

    /// Buffer an insert.
    pub fn insert(&mut self, entity: &'k mut Entity) -> Result<()> {
        self.buffer.push_put(MutationKind::Insert, entity)
    }

    /// Buffer an update.
    pub fn update(&mut self, entity: &'k mut Entity) -> Result<()> {
        self.buffer.push_put(MutationKind::Update, entity)
    }

    /// Buffer an upsert.
    pub fn upsert(&mut self, entity: &'k mut Entity) -> Result<()> {
        self.buffer.push_put(MutationKind::Upsert, entity)
    }

    /// Buffer a delete.
    pub fn delete(&mut self, key: &Key) -> Result<()> {
        self.buffer.push_delete(key)
    }

    /// Look up a single entity through this transaction's snapshot.
    pub async fn get(&mut self, key: &Key) -> Result<Option<Entity>> {
        let read_options = self.read_options();
        let mut results = self
            .ds
            .lookup(std::slice::from_ref(key), Some(read_options))
            .await?;
        Ok(results.found.pop())
    }

    /// Run a query through this transaction's snapshot.
    pub async fn run_query(&mut self, query: &Query) -> Result<QueryResponse> {
        let read_options = self.read_options();
        self.ds.run_query_with_options(query, Some(read_options)).await
    }

    /// Flush the buffered mutations as one transactional commit, then
    /// backfill allocated ids onto the buffered keys.
    pub async fn commit(self) -> Result<CommitSummary> {
        let (mutations, backfill) = self.buffer.into_parts();
        let request =
            transactional_commit_request(self.ds.project_id(), self.id, mutations);
        let response = self.ds.commit_proto(request).await?;
        apply_backfill(backfill, &response.mutation_results)?;
        CommitSummary::from_proto(response)
    }

    /// Abort the transaction, discarding the buffer.
    pub async fn rollback(self) -> Result<()> {
        self.ds.rollback_raw(self.id).await
    }

    fn read_options(&self) -> proto::ReadOptions {
        proto::ReadOptions {
            consistency_type: Some(proto::read_options::ConsistencyType::Transaction(
                self.id.clone(),
            )),
        }
    }
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
    fn test_buffer_accumulates_without_rpc() {
        let mut first = Entity::with_key(Key::incomplete("Task")).set("n", 1i64);
        let mut second = Entity::with_key(Key::with_name("Task", "t2"));
        let mut buffer = MutationBuffer::new();
        buffer.push_put(MutationKind::Upsert, &mut first).unwrap();
        buffer.push_put(MutationKind::Insert, &mut second).unwrap();
        buffer.push_delete(&Key::with_id("Task", 3)).unwrap();

        assert_eq!(buffer.len(), 3);
        let (mutations, backfill) = buffer.into_parts();
        assert!(matches!(
            mutations[0].operation,
            Some(proto::mutation::Operation::Upsert(_))
        ));
        assert!(matches!(
            mutations[1].operation,
            Some(proto::mutation::Operation::Insert(_))
        ));
        assert!(matches!(
            mutations[2].operation,
            Some(proto::mutation::Operation::Delete(_))
        ));
        // Only the incomplete key gets a backfill slot.
        assert_eq!(backfill.len(), 1);
        assert_eq!(backfill[0].0, 0);
    }

    #[test]
    fn test_buffer_validates_before_buffering() {
        let mut keyless = Entity::new().set("n", 1i64);
        let mut buffer = MutationBuffer::new();
        // An entity without a key never reaches the buffer.
        assert!(buffer.push_put(MutationKind::Upsert, &mut keyless).is_err());
        // Deletes require complete keys.
        assert!(buffer.push_delete(&Key::incomplete("Task")).is_err());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_commit_request_is_transactional() {
        let mut entity = Entity::with_key(Key::with_name("Task", "t"));
        let mut buffer = MutationBuffer::new();
        buffer.push_put(MutationKind::Upsert, &mut entity).unwrap();

        let (mutations, _) = buffer.into_parts();
        let request = transactional_commit_request("proj", b"txid".to_vec(), mutations);
        assert_eq!(request.project_id, "proj");
        assert_eq!(request.mode, proto::commit_request::Mode::Transactional as i32);
        assert_eq!(request.mutations.len(), 1);
        assert_eq!(
            request.transaction_selector,
            Some(proto::commit_request::TransactionSelector::Transaction(
                b"txid".to_vec()
            ))
        );
    }

    #[test]
    fn test_commit_backfills_buffered_incomplete_keys() {
        let mut first = Entity::with_key(Key::incomplete("Task"));
        let mut third = Entity::with_key(Key::incomplete("Task"));
        let mut buffer = MutationBuffer::new();
        buffer.push_put(MutationKind::Upsert, &mut first).unwrap();
        buffer.push_delete(&Key::with_id("Task", 5)).unwrap();
        buffer.push_put(MutationKind::Upsert, &mut third).unwrap();

        let (mutations, backfill) = buffer.into_parts();
        assert_eq!(mutations.len(), 3);

        let results = vec![
            allocated_result(100),
            proto::MutationResult::default(),
            allocated_result(200),
        ];
        apply_backfill(backfill, &results).unwrap();

        // Each buffered key receives the id at its own mutation index,
        // with the interleaved delete leaving the alignment intact.
        assert_eq!(first.key.as_ref().unwrap().id(), Some(100));
        assert_eq!(third.key.as_ref().unwrap().id(), Some(200));
    }

    #[test]
    fn test_commit_backfill_missing_id_is_an_error() {
        let mut entity = Entity::with_key(Key::incomplete("Task"));
        let mut buffer = MutationBuffer::new();
        buffer.push_put(MutationKind::Upsert, &mut entity).unwrap();

        let (_, backfill) = buffer.into_parts();
        let results = vec![proto::MutationResult::default()];
        assert!(apply_backfill(backfill, &results).is_err());
    }
}
