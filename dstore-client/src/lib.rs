/// Datastore gRPC Client Library
///
/// This crate provides a Rust client for a Cloud Datastore-style entity
/// store: entity CRUD over the commit RPC, queries, transactions with a
/// client-side mutation buffer, and admin operations (indexes, bulk
/// export/import).

pub mod admin;
pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod mutation;
pub mod query;
pub mod transaction;

// Re-export key types
pub use admin::{ExportOptions, ImportOptions, IndexList};
pub use client::{CommitSummary, Datastore, LookupResults, MutationOutcome};
pub use config::DatastoreConfig;
pub use dstore_core::{Entity, GeoPoint, IdOrName, Key, PathElement, Timestamp, Value};
pub use error::{ClientError, Result};
pub use mutation::MutationKind;
pub use query::{CompareOp, MoreResults, Query, QueryResponse};
pub use transaction::Transaction;
