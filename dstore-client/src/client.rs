/// Datastore gRPC client implementation
use dstore_core::{Entity, Key};
use dstore_proto::{
    self as proto,
    admin::{self, datastore_admin_client::DatastoreAdminClient},
    datastore_client::DatastoreClient,
    Operation,
};
use tonic::transport::Channel;
use tracing::debug;

use crate::admin::{ExportOptions, ImportOptions, IndexList};
use crate::config::{DatastoreConfig, DEFAULT_INDEX_SIZE_LIMIT};
use crate::convert::{entity_from_proto, key_from_proto, key_to_proto};
use crate::error::{ClientError, Result};
use crate::mutation::{backfill_ids, plan_deletes, plan_puts, MutationKind, MutationPlan};
use crate::query::{parse_query_response, MoreResults, Query, QueryResponse};
use crate::transaction::Transaction;

/// The result of applying one mutation.
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    /// The allocated key, set only when the mutation allocated one.
    pub key: Option<Key>,
    /// The entity's version on the server after the mutation.
    pub version: i64,
    /// Whether the server detected a conflict for this mutation.
    pub conflict_detected: bool,
}

/// The per-mutation results of one commit RPC.
#[derive(Debug, Clone)]
pub struct CommitSummary {
    /// Results in mutation order.
    pub mutation_results: Vec<MutationOutcome>,
    /// Number of index entries updated during the commit.
    pub index_updates: i32,
}

impl CommitSummary {
    pub(crate) fn from_proto(response: proto::CommitResponse) -> Result<Self> {
        let mutation_results = response
            .mutation_results
            .into_iter()
            .map(|r| {
                Ok(MutationOutcome {
                    key: r.key.map(key_from_proto).transpose()?,
                    version: r.version,
                    conflict_detected: r.conflict_detected,
                })
            })
            .collect::<Result<_>>()?;
        Ok(Self {
            mutation_results,
            index_updates: response.index_updates,
        })
    }
}

/// The result of a batch lookup.
#[derive(Debug, Clone, Default)]
pub struct LookupResults {
    /// Entities that were found, reordered to match the request order
    /// where their keys allow it.
    pub found: Vec<Entity>,
    /// Keys of entities that do not exist.
    pub missing: Vec<Key>,
    /// Keys the service did not look up due to resource constraints;
    /// retry these in a follow-up lookup.
    pub deferred: Vec<Key>,
}

/// Datastore remote client
///
/// # Example
/// ```no_run
/// # use dstore_client::{Datastore, DatastoreConfig, Entity, Key};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DatastoreConfig::new().with_project_id("my-project");
/// let mut ds = Datastore::connect(config).await?;
///
/// let mut tasks = vec![Entity::with_key(Key::incomplete("Task"))
///     .set("done", false)
///     .set("priority", 4i64)];
/// ds.save(&mut tasks).await?;
/// // The incomplete key now carries its server-allocated id.
/// assert!(tasks[0].key.as_ref().unwrap().id().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Datastore {
    project_id: String,
    namespace: Option<String>,
    index_size_limit: usize,
    data: DatastoreClient<Channel>,
    admin: DatastoreAdminClient<Channel>,
}

impl Datastore {
    /// Connect to the service.
    ///
    /// The endpoint resolves from the config override, the
    /// `DATASTORE_EMULATOR_HOST` environment variable, or the production
    /// default, in that order. One channel is shared by the data and
    /// admin planes.
    pub async fn connect(config: DatastoreConfig) -> Result<Self> {
        let project_id = config.resolve_project_id()?;
        let endpoint = config.resolve_endpoint();
        debug!(
            host = %endpoint.host,
            port = endpoint.port,
            custom = endpoint.is_custom,
            %project_id,
            "connecting to datastore"
        );

        let channel = Channel::from_shared(endpoint.uri())
            .map_err(|e| ClientError::ConnectionError(format!("Invalid endpoint: {}", e)))?
            .connect()
            .await
            .map_err(|e| ClientError::ConnectionError(format!("Failed to connect: {}", e)))?;

        Ok(Self {
            project_id,
            namespace: config.namespace,
            index_size_limit: config.index_size_limit.unwrap_or(DEFAULT_INDEX_SIZE_LIMIT),
            data: DatastoreClient::new(channel.clone()),
            admin: DatastoreAdminClient::new(channel),
        })
    }

    /// The project id all requests are scoped to.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The default namespace, if configured.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// Look up a single entity by key.
    ///
    /// # Returns
    /// The entity if found, None otherwise
    pub async fn get(&mut self, key: &Key) -> Result<Option<Entity>> {
        let mut results = self.lookup(std::slice::from_ref(key), None).await?;
        Ok(results.found.pop())
    }

    /// Look up a batch of entities by key.
    pub async fn get_many(&mut self, keys: &[Key]) -> Result<LookupResults> {
        self.lookup(keys, None).await
    }

    pub(crate) async fn lookup(
        &mut self,
        keys: &[Key],
        read_options: Option<proto::ReadOptions>,
    ) -> Result<LookupResults> {
        for key in keys {
            key.validate()?;
            if !key.is_complete() {
                return Err(dstore_core::Error::IncompleteKey(
                    key.kind().unwrap_or_default().to_string(),
                )
                .into());
            }
        }

        let request = proto::LookupRequest {
            project_id: self.project_id.clone(),
            read_options,
            keys: keys.iter().map(key_to_proto).collect(),
        };
        debug!(keys = keys.len(), "lookup");

        let response = self.data.lookup(request).await?.into_inner();

        let mut found: Vec<Entity> = response
            .found
            .into_iter()
            .filter_map(|r| r.entity)
            .map(entity_from_proto)
            .collect::<Result<_>>()?;

        // The service returns found entities in undefined order; put them
        // back in request order.
        found.sort_by_key(|entity| {
            keys.iter()
                .position(|k| Some(k) == entity.key.as_ref())
                .unwrap_or(usize::MAX)
        });

        let missing = response
            .missing
            .into_iter()
            .filter_map(|r| r.entity.and_then(|e| e.key))
            .map(key_from_proto)
            .collect::<Result<_>>()?;

        let deferred = response
            .deferred
            .into_iter()
            .map(key_from_proto)
            .collect::<Result<_>>()?;

        Ok(LookupResults {
            found,
            missing,
            deferred,
        })
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Save a batch of entities (upsert semantics).
    ///
    /// Issues exactly one commit RPC. Entities whose keys were incomplete
    /// get their server-allocated ids written back in place, index for
    /// index.
    pub async fn save(&mut self, entities: &mut [Entity]) -> Result<CommitSummary> {
        self.commit_puts(MutationKind::Upsert, entities, None).await
    }

    /// Save with an explicit mutation method name.
    ///
    /// An unrecognized method fails before any serialization or network
    /// work happens.
    pub async fn save_with(
        &mut self,
        entities: &mut [Entity],
        method: &str,
    ) -> Result<CommitSummary> {
        let kind: MutationKind = method.parse().map_err(ClientError::from)?;
        if kind == MutationKind::Delete {
            return Err(ClientError::InvalidArgument(
                "delete takes keys, not entities; use `delete`".into(),
            ));
        }
        self.commit_puts(kind, entities, None).await
    }

    /// Save, excluding any property whose indexed payload exceeds the
    /// configured per-property limit instead of letting the service
    /// reject the commit.
    pub async fn save_auto_exclude(&mut self, entities: &mut [Entity]) -> Result<CommitSummary> {
        let threshold = self.index_size_limit;
        self.commit_puts(MutationKind::Upsert, entities, Some(threshold))
            .await
    }

    /// Insert entities that must not already exist.
    pub async fn insert(&mut self, entities: &mut [Entity]) -> Result<CommitSummary> {
        self.commit_puts(MutationKind::Insert, entities, None).await
    }

    /// Update entities that must already exist. Keys must be complete.
    pub async fn update(&mut self, entities: &mut [Entity]) -> Result<CommitSummary> {
        self.commit_puts(MutationKind::Update, entities, None).await
    }

    /// Upsert entities.
    pub async fn upsert(&mut self, entities: &mut [Entity]) -> Result<CommitSummary> {
        self.commit_puts(MutationKind::Upsert, entities, None).await
    }

    /// Delete a single entity by key.
    pub async fn delete(&mut self, key: &Key) -> Result<CommitSummary> {
        self.delete_many(std::slice::from_ref(key)).await
    }

    /// Delete a batch of entities by key.
    pub async fn delete_many(&mut self, keys: &[Key]) -> Result<CommitSummary> {
        let mutations = plan_deletes(keys)?;
        let response = self
            .commit_raw(non_transactional_commit_request(&self.project_id, mutations))
            .await?;
        Ok(response)
    }

    async fn commit_puts(
        &mut self,
        kind: MutationKind,
        entities: &mut [Entity],
        auto_exclude: Option<usize>,
    ) -> Result<CommitSummary> {
        let MutationPlan {
            mutations,
            incomplete,
        } = plan_puts(kind, entities, auto_exclude)?;

        let request = non_transactional_commit_request(&self.project_id, mutations);
        let response = self.commit_proto(request).await?;

        backfill_ids(entities, &incomplete, &response.mutation_results)?;
        CommitSummary::from_proto(response)
    }

    pub(crate) async fn commit_proto(
        &mut self,
        request: proto::CommitRequest,
    ) -> Result<proto::CommitResponse> {
        debug!(mutations = request.mutations.len(), "commit");
        Ok(self.data.commit(request).await?.into_inner())
    }

    pub(crate) async fn commit_raw(
        &mut self,
        request: proto::CommitRequest,
    ) -> Result<CommitSummary> {
        let response = self.commit_proto(request).await?;
        CommitSummary::from_proto(response)
    }

    // ------------------------------------------------------------------
    // Id allocation
    // ------------------------------------------------------------------

    /// Allocate ids for incomplete keys, returning the completed keys in
    /// request order.
    pub async fn allocate_ids(&mut self, keys: &[Key]) -> Result<Vec<Key>> {
        for key in keys {
            key.validate()?;
            if key.is_complete() {
                return Err(dstore_core::Error::CompleteKey(
                    key.kind().unwrap_or_default().to_string(),
                )
                .into());
            }
        }

        let request = proto::AllocateIdsRequest {
            project_id: self.project_id.clone(),
            keys: keys.iter().map(key_to_proto).collect(),
        };
        let response = self.data.allocate_ids(request).await?.into_inner();
        response.keys.into_iter().map(key_from_proto).collect()
    }

    /// Reserve complete keys so the service never auto-allocates their
    /// ids.
    pub async fn reserve_ids(&mut self, keys: &[Key]) -> Result<()> {
        for key in keys {
            key.validate()?;
            if !key.is_complete() {
                return Err(dstore_core::Error::IncompleteKey(
                    key.kind().unwrap_or_default().to_string(),
                )
                .into());
            }
        }

        let request = proto::ReserveIdsRequest {
            project_id: self.project_id.clone(),
            database_id: String::new(),
            keys: keys.iter().map(key_to_proto).collect(),
        };
        self.data.reserve_ids(request).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Run a query, returning one batch of results.
    pub async fn run_query(&mut self, query: &Query) -> Result<QueryResponse> {
        self.run_query_with_options(query, None).await
    }

    pub(crate) async fn run_query_with_options(
        &mut self,
        query: &Query,
        read_options: Option<proto::ReadOptions>,
    ) -> Result<QueryResponse> {
        let request = proto::RunQueryRequest {
            project_id: self.project_id.clone(),
            partition_id: Some(self.partition(query.namespace_override())),
            read_options,
            query_type: Some(proto::run_query_request::QueryType::Query(query.to_proto()?)),
        };
        let response = self.data.run_query(request).await?.into_inner();
        parse_query_response(response)
    }

    /// Run a query to completion, following not-finished batches cursor
    /// by cursor and collecting every entity.
    ///
    /// Each continuation resumes at the previous batch's end cursor with
    /// the offset and limit adjusted, so results already skipped or
    /// received are not skipped or counted again.
    pub async fn run_query_all(&mut self, query: Query) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();
        let mut page = query;
        loop {
            let response = self.run_query(&page).await?;
            let received = response.entities.len() as i32;
            entities.extend(response.entities);
            if response.more_results != MoreResults::NotFinished {
                return Ok(entities);
            }
            page = page.continuation(
                response.end_cursor.to_vec(),
                response.skipped_results,
                received,
            );
        }
    }

    /// Run a GQL query string through the same RunQuery RPC.
    pub async fn run_gql(&mut self, query_string: impl Into<String>) -> Result<QueryResponse> {
        let request = proto::RunQueryRequest {
            project_id: self.project_id.clone(),
            partition_id: Some(self.partition(None)),
            read_options: None,
            query_type: Some(proto::run_query_request::QueryType::GqlQuery(
                proto::GqlQuery {
                    query_string: query_string.into(),
                    allow_literals: true,
                    named_bindings: Default::default(),
                    positional_bindings: Vec::new(),
                },
            )),
        };
        let response = self.data.run_query(request).await?.into_inner();
        parse_query_response(response)
    }

    fn partition(&self, namespace_override: Option<&str>) -> proto::PartitionId {
        proto::PartitionId {
            project_id: self.project_id.clone(),
            namespace_id: namespace_override
                .or(self.namespace.as_deref())
                .unwrap_or_default()
                .to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    /// Begin a read-write transaction.
    pub async fn transaction<'k>(&mut self) -> Result<Transaction<'_, 'k>> {
        self.begin_transaction(proto::TransactionOptions {
            mode: Some(proto::transaction_options::Mode::ReadWrite(
                proto::transaction_options::ReadWrite {
                    previous_transaction: Vec::new(),
                },
            )),
        })
        .await
    }

    /// Begin a read-write transaction that retries a previous one,
    /// improving the new transaction's priority on the server.
    pub async fn transaction_retrying<'k>(
        &mut self,
        previous_transaction: Vec<u8>,
    ) -> Result<Transaction<'_, 'k>> {
        self.begin_transaction(proto::TransactionOptions {
            mode: Some(proto::transaction_options::Mode::ReadWrite(
                proto::transaction_options::ReadWrite {
                    previous_transaction,
                },
            )),
        })
        .await
    }

    /// Begin a read-only transaction; buffered writes will be rejected by
    /// the service at commit.
    pub async fn read_only_transaction<'k>(&mut self) -> Result<Transaction<'_, 'k>> {
        self.begin_transaction(proto::TransactionOptions {
            mode: Some(proto::transaction_options::Mode::ReadOnly(
                proto::transaction_options::ReadOnly {},
            )),
        })
        .await
    }

    async fn begin_transaction<'k>(
        &mut self,
        options: proto::TransactionOptions,
    ) -> Result<Transaction<'_, 'k>> {
        let request = proto::BeginTransactionRequest {
            project_id: self.project_id.clone(),
            transaction_options: Some(options),
        };
        let response = self.data.begin_transaction(request).await?.into_inner();
        debug!("transaction started");
        Ok(Transaction::new(self, response.transaction))
    }

    pub(crate) async fn rollback_raw(&mut self, transaction: Vec<u8>) -> Result<()> {
        let request = proto::RollbackRequest {
            project_id: self.project_id.clone(),
            transaction,
        };
        self.data.rollback(request).await?;
        debug!("transaction rolled back");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Admin plane
    // ------------------------------------------------------------------

    /// Start a bulk export. Returns the long-running operation handle;
    /// poll it through the operations service to track completion.
    pub async fn export_entities(&mut self, options: ExportOptions) -> Result<Operation> {
        let request = options.into_request(&self.project_id)?;
        debug!(output_url_prefix = %request.output_url_prefix, "export entities");
        Ok(self.admin.export_entities(request).await?.into_inner())
    }

    /// Start a bulk import from a prior export. Returns the long-running
    /// operation handle.
    pub async fn import_entities(&mut self, options: ImportOptions) -> Result<Operation> {
        let request = options.into_request(&self.project_id)?;
        debug!(input_url = %request.input_url, "import entities");
        Ok(self.admin.import_entities(request).await?.into_inner())
    }

    /// Get a composite index by id.
    pub async fn get_index(&mut self, index_id: &str) -> Result<admin::Index> {
        let request = admin::GetIndexRequest {
            project_id: self.project_id.clone(),
            index_id: index_id.to_string(),
        };
        Ok(self.admin.get_index(request).await?.into_inner())
    }

    /// Create a composite index. Returns the long-running operation
    /// handle.
    pub async fn create_index(&mut self, index: admin::Index) -> Result<Operation> {
        let request = admin::CreateIndexRequest {
            project_id: self.project_id.clone(),
            index: Some(index),
        };
        Ok(self.admin.create_index(request).await?.into_inner())
    }

    /// Delete a composite index by id. Returns the long-running operation
    /// handle.
    pub async fn delete_index(&mut self, index_id: &str) -> Result<Operation> {
        let request = admin::DeleteIndexRequest {
            project_id: self.project_id.clone(),
            index_id: index_id.to_string(),
        };
        Ok(self.admin.delete_index(request).await?.into_inner())
    }

    /// List one page of composite indexes. Pass the returned token back
    /// in to fetch the next page.
    pub async fn list_indexes(
        &mut self,
        page_size: i32,
        page_token: Option<&str>,
    ) -> Result<IndexList> {
        let request = admin::ListIndexesRequest {
            project_id: self.project_id.clone(),
            filter: String::new(),
            page_size,
            page_token: page_token.unwrap_or_default().to_string(),
        };
        let response = self.admin.list_indexes(request).await?.into_inner();
        Ok(IndexList {
            indexes: response.indexes,
            next_page_token: response.next_page_token,
        })
    }
}

pub(crate) fn non_transactional_commit_request(
    project_id: &str,
    mutations: Vec<proto::Mutation>,
) -> proto::CommitRequest {
    proto::CommitRequest {
        project_id: project_id.to_string(),
        mode: proto::commit_request::Mode::NonTransactional as i32,
        mutations,
        transaction_selector: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_transactional_commit_request() {
        let request = non_transactional_commit_request("proj", Vec::new());
        assert_eq!(request.project_id, "proj");
        assert_eq!(
            request.mode,
            proto::commit_request::Mode::NonTransactional as i32
        );
        assert!(request.transaction_selector.is_none());
    }

    #[test]
    fn test_commit_summary_from_proto() {
        let response = proto::CommitResponse {
            mutation_results: vec![proto::MutationResult {
                key: Some(key_to_proto(&Key::with_id("Task", 9))),
                version: 3,
                conflict_detected: false,
            }],
            index_updates: 2,
        };
        let summary = CommitSummary::from_proto(response).unwrap();
        assert_eq!(summary.index_updates, 2);
        assert_eq!(
            summary.mutation_results[0].key.as_ref().unwrap().id(),
            Some(9)
        );
        assert_eq!(summary.mutation_results[0].version, 3);
    }
}
