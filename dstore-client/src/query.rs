/// Query builder and response types
use bytes::Bytes;
use dstore_core::{Entity, Key, Value};
use dstore_proto::{self as proto, query_result_batch::MoreResultsType};

use crate::convert::{entity_from_proto, key_to_proto, value_to_proto};
use crate::error::{ClientError, Result};

/// Comparison operators for property filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equal,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl CompareOp {
    fn to_proto(self) -> proto::property_filter::Operator {
        use proto::property_filter::Operator;
        match self {
            CompareOp::Equal => Operator::Equal,
            CompareOp::LessThan => Operator::LessThan,
            CompareOp::LessThanOrEqual => Operator::LessThanOrEqual,
            CompareOp::GreaterThan => Operator::GreaterThan,
            CompareOp::GreaterThanOrEqual => Operator::GreaterThanOrEqual,
        }
    }
}

/// Entity query builder
///
/// # Example
/// ```no_run
/// # use dstore_client::{Query, query::CompareOp};
/// let query = Query::new("Task")
///     .filter("done", CompareOp::Equal, false)
///     .order_desc("priority")
///     .limit(10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    kind: Option<String>,
    namespace: Option<String>,
    filters: Vec<FilterSpec>,
    orders: Vec<proto::PropertyOrder>,
    projection: Vec<String>,
    distinct_on: Vec<String>,
    limit: Option<i32>,
    offset: i32,
    start_cursor: Vec<u8>,
    end_cursor: Vec<u8>,
}

impl Query {
    /// Create a query over a single kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Create a kindless query (matches entities of every kind).
    pub fn kindless() -> Self {
        Self::default()
    }

    /// Scope the query to a namespace, overriding the client default.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add a property filter. Multiple filters are combined with AND.
    ///
    /// The operand must be a scalar; an array operand makes the query
    /// fail when it is run, before any RPC is issued.
    pub fn filter(mut self, property: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        self.filters.push(FilterSpec::Property {
            name: property.into(),
            op: op.to_proto(),
            value: value.into(),
        });
        self
    }

    /// Limit results to the given entity and its descendants.
    pub fn ancestor(mut self, key: &Key) -> Self {
        self.filters.push(FilterSpec::Ancestor(key.clone()));
        self
    }

    /// Order results by a property, ascending.
    pub fn order_asc(mut self, property: impl Into<String>) -> Self {
        self.orders.push(property_order(
            property.into(),
            proto::property_order::Direction::Ascending,
        ));
        self
    }

    /// Order results by a property, descending.
    pub fn order_desc(mut self, property: impl Into<String>) -> Self {
        self.orders.push(property_order(
            property.into(),
            proto::property_order::Direction::Descending,
        ));
        self
    }

    /// Project only the given property.
    pub fn project(mut self, property: impl Into<String>) -> Self {
        self.projection.push(property.into());
        self
    }

    /// Return only the first result per distinct value combination.
    pub fn distinct_on(mut self, property: impl Into<String>) -> Self {
        self.distinct_on.push(property.into());
        self
    }

    /// Set the maximum number of results to return.
    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the number of results to skip.
    pub fn offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    /// Resume after a cursor returned by an earlier batch.
    pub fn start_cursor(mut self, cursor: impl Into<Vec<u8>>) -> Self {
        self.start_cursor = cursor.into();
        self
    }

    /// Stop at a cursor returned by an earlier batch.
    pub fn end_cursor(mut self, cursor: impl Into<Vec<u8>>) -> Self {
        self.end_cursor = cursor.into();
        self
    }

    pub(crate) fn namespace_override(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Rebuild the query for the page after a not-finished batch: resume
    /// at the cursor, drop the offset the service already skipped, and
    /// shrink the limit by the results already received. Without this a
    /// continuation would re-skip the offset and re-apply the full limit,
    /// since the service applies both after the start cursor.
    pub(crate) fn continuation(mut self, cursor: Vec<u8>, skipped: i32, received: i32) -> Self {
        self.start_cursor = cursor;
        self.offset = (self.offset - skipped).max(0);
        if let Some(limit) = self.limit {
            self.limit = Some((limit - received).max(0));
        }
        self
    }

    /// Build the wire query. Multiple filters collapse into one composite
    /// AND filter, matching what the service expects.
    pub(crate) fn to_proto(&self) -> Result<proto::Query> {
        let mut filters = self
            .filters
            .iter()
            .map(FilterSpec::to_proto)
            .collect::<Result<Vec<_>>>()?;
        let filter = match filters.len() {
            0 => None,
            1 => filters.pop(),
            _ => Some(proto::Filter {
                filter_type: Some(proto::filter::FilterType::CompositeFilter(
                    proto::CompositeFilter {
                        op: proto::composite_filter::Operator::And as i32,
                        filters,
                    },
                )),
            }),
        };

        Ok(proto::Query {
            projection: self
                .projection
                .iter()
                .map(|name| proto::Projection {
                    property: Some(proto::PropertyReference { name: name.clone() }),
                })
                .collect(),
            kind: self
                .kind
                .iter()
                .map(|name| proto::KindExpression { name: name.clone() })
                .collect(),
            filter,
            order: self.orders.clone(),
            distinct_on: self
                .distinct_on
                .iter()
                .map(|name| proto::PropertyReference { name: name.clone() })
                .collect(),
            start_cursor: self.start_cursor.clone(),
            end_cursor: self.end_cursor.clone(),
            offset: self.offset,
            limit: self.limit,
        })
    }
}

/// A filter as the caller expressed it, encoded to the wire only when the
/// query runs so invalid operands surface as errors instead of silently
/// becoming null comparisons.
#[derive(Debug, Clone)]
enum FilterSpec {
    Property {
        name: String,
        op: proto::property_filter::Operator,
        value: Value,
    },
    Ancestor(Key),
}

impl FilterSpec {
    fn to_proto(&self) -> Result<proto::Filter> {
        let (name, op, value) = match self {
            FilterSpec::Property { name, op, value } => {
                if matches!(value, Value::Array(_)) {
                    return Err(ClientError::InvalidArgument(format!(
                        "Array values cannot be used as filter operands (property `{name}`)"
                    )));
                }
                (name.clone(), *op, value_to_proto(value)?)
            }
            FilterSpec::Ancestor(key) => (
                "__key__".to_string(),
                proto::property_filter::Operator::HasAncestor,
                proto::Value {
                    meaning: 0,
                    exclude_from_indexes: false,
                    value_type: Some(proto::value::ValueType::KeyValue(key_to_proto(key))),
                },
            ),
        };
        Ok(proto::Filter {
            filter_type: Some(proto::filter::FilterType::PropertyFilter(
                proto::PropertyFilter {
                    property: Some(proto::PropertyReference { name }),
                    op: op as i32,
                    value: Some(value),
                },
            )),
        })
    }
}

fn property_order(name: String, direction: proto::property_order::Direction) -> proto::PropertyOrder {
    proto::PropertyOrder {
        property: Some(proto::PropertyReference { name }),
        direction: direction as i32,
    }
}

/// The state of a query after a batch, from the service's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoreResults {
    /// There may be additional batches to fetch.
    NotFinished,
    /// Finished, but there may be more results after the limit.
    AfterLimit,
    /// Finished, but there may be more results after the end cursor.
    AfterCursor,
    /// Finished, no more results.
    NoMore,
}

impl MoreResults {
    fn from_proto(raw: i32) -> Result<Self> {
        match MoreResultsType::try_from(raw) {
            Ok(MoreResultsType::NotFinished) => Ok(MoreResults::NotFinished),
            Ok(MoreResultsType::MoreResultsAfterLimit) => Ok(MoreResults::AfterLimit),
            Ok(MoreResultsType::MoreResultsAfterCursor) => Ok(MoreResults::AfterCursor),
            Ok(MoreResultsType::NoMoreResults) => Ok(MoreResults::NoMore),
            _ => Err(ClientError::Unknown(format!(
                "unrecognized more_results state {raw}"
            ))),
        }
    }
}

/// One batch of query results
pub struct QueryResponse {
    /// Entities in this batch
    pub entities: Vec<Entity>,
    /// Cursor pointing past the last result
    pub end_cursor: Bytes,
    /// Whether the service has more batches for this query
    pub more_results: MoreResults,
    /// Number of results skipped due to the query offset
    pub skipped_results: i32,
}

/// Parse a RunQuery response batch into entities.
pub(crate) fn parse_query_response(response: proto::RunQueryResponse) -> Result<QueryResponse> {
    let batch = response
        .batch
        .ok_or_else(|| ClientError::Unknown("query response missing batch".into()))?;

    let entities: Result<Vec<Entity>> = batch
        .entity_results
        .into_iter()
        .filter_map(|r| r.entity)
        .map(entity_from_proto)
        .collect();

    Ok(QueryResponse {
        entities: entities?,
        end_cursor: Bytes::from(batch.end_cursor),
        more_results: MoreResults::from_proto(batch.more_results)?,
        skipped_results: batch.skipped_results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_filter_is_not_composite() {
        let query = Query::new("Task").filter("done", CompareOp::Equal, false);
        let proto = query.to_proto().unwrap();
        assert!(matches!(
            proto.filter.unwrap().filter_type,
            Some(proto::filter::FilterType::PropertyFilter(_))
        ));
        assert_eq!(proto.kind[0].name, "Task");
    }

    #[test]
    fn test_multiple_filters_compose_with_and() {
        let query = Query::new("Task")
            .filter("done", CompareOp::Equal, false)
            .filter("priority", CompareOp::GreaterThanOrEqual, 4i64);
        let proto = query.to_proto().unwrap();
        match proto.filter.unwrap().filter_type.unwrap() {
            proto::filter::FilterType::CompositeFilter(composite) => {
                assert_eq!(composite.op, proto::composite_filter::Operator::And as i32);
                assert_eq!(composite.filters.len(), 2);
            }
            other => panic!("expected composite filter, got {other:?}"),
        }
    }

    #[test]
    fn test_ancestor_filter() {
        let ancestor = Key::with_name("Company", "acme");
        let proto = Query::new("Employee").ancestor(&ancestor).to_proto().unwrap();
        match proto.filter.unwrap().filter_type.unwrap() {
            proto::filter::FilterType::PropertyFilter(filter) => {
                assert_eq!(filter.property.unwrap().name, "__key__");
                assert_eq!(
                    filter.op,
                    proto::property_filter::Operator::HasAncestor as i32
                );
            }
            other => panic!("expected property filter, got {other:?}"),
        }
    }

    #[test]
    fn test_pagination_and_shaping_options() {
        let proto = Query::new("Task")
            .order_desc("priority")
            .order_asc("created")
            .project("priority")
            .distinct_on("owner")
            .limit(25)
            .offset(5)
            .start_cursor(b"abc".to_vec())
            .to_proto()
            .unwrap();

        assert_eq!(proto.order.len(), 2);
        assert_eq!(
            proto.order[0].direction,
            proto::property_order::Direction::Descending as i32
        );
        assert_eq!(proto.projection[0].property.as_ref().unwrap().name, "priority");
        assert_eq!(proto.distinct_on[0].name, "owner");
        assert_eq!(proto.limit, Some(25));
        assert_eq!(proto.offset, 5);
        assert_eq!(proto.start_cursor, b"abc".to_vec());
    }

    #[test]
    fn test_kindless_query() {
        let proto = Query::kindless().to_proto().unwrap();
        assert!(proto.kind.is_empty());
        assert!(proto.filter.is_none());
    }

    #[test]
    fn test_array_filter_operand_rejected() {
        let query = Query::new("Task").filter("tags", CompareOp::Equal, vec![1i64, 2]);
        assert!(matches!(
            query.to_proto().unwrap_err(),
            ClientError::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_continuation_adjusts_offset_and_limit() {
        let page = Query::new("Task")
            .offset(5)
            .limit(25)
            .continuation(b"cur".to_vec(), 5, 10);
        let proto = page.to_proto().unwrap();
        assert_eq!(proto.start_cursor, b"cur".to_vec());
        // The full offset was skipped in the first batch and the limit
        // shrinks by the results already received.
        assert_eq!(proto.offset, 0);
        assert_eq!(proto.limit, Some(15));

        // A batch that skipped only part of the offset keeps the rest.
        let page = Query::new("Task").offset(5).continuation(b"c".to_vec(), 3, 0);
        assert_eq!(page.to_proto().unwrap().offset, 2);
    }

    #[test]
    fn test_parse_query_response() {
        let response = proto::RunQueryResponse {
            batch: Some(proto::QueryResultBatch {
                skipped_results: 2,
                skipped_cursor: vec![],
                entity_result_type: 1,
                entity_results: vec![proto::EntityResult {
                    entity: Some(proto::Entity {
                        key: Some(crate::convert::key_to_proto(&Key::with_id("Task", 1))),
                        properties: Default::default(),
                    }),
                    version: 1,
                    cursor: vec![],
                }],
                end_cursor: b"cursor".to_vec(),
                more_results: MoreResultsType::NoMoreResults as i32,
                snapshot_version: 0,
            }),
            query: None,
        };

        let parsed = parse_query_response(response).unwrap();
        assert_eq!(parsed.entities.len(), 1);
        assert_eq!(parsed.more_results, MoreResults::NoMore);
        assert_eq!(parsed.skipped_results, 2);
        assert_eq!(parsed.end_cursor, Bytes::from_static(b"cursor"));
    }
}
