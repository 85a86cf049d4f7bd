/// Request builders for the admin plane (export, import, indexes)
///
/// Each builder produces its wire request as a pure function, so the
/// conflicting-option checks run synchronously with zero RPCs issued.
use std::collections::HashMap;

use dstore_proto::admin;

use crate::error::{ClientError, Result};

/// Normalize a bucket or object path to a `gs://` URL.
fn gs_url(location: &str) -> String {
    format!("gs://{}", location.trim_start_matches("gs://"))
}

/// Options for a bulk entity export.
///
/// Provide either a storage bucket shorthand or an explicit output URL
/// prefix, never both. Kinds/namespaces shorthands build the entity
/// filter; they conflict with an explicitly supplied filter.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    bucket: Option<String>,
    output_url_prefix: Option<String>,
    kinds: Vec<String>,
    namespaces: Vec<String>,
    entity_filter: Option<admin::EntityFilter>,
    labels: HashMap<String, String>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export to a storage bucket (with or without the `gs://` prefix).
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Export under an explicit output URL prefix.
    pub fn output_url_prefix(mut self, url: impl Into<String>) -> Self {
        self.output_url_prefix = Some(url.into());
        self
    }

    /// Restrict the export to the given kind.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kinds.push(kind.into());
        self
    }

    /// Restrict the export to the given namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    /// Supply a complete entity filter. Conflicts with `kind`/`namespace`.
    pub fn entity_filter(mut self, filter: admin::EntityFilter) -> Self {
        self.entity_filter = Some(filter);
        self
    }

    /// Attach a client-assigned label to the operation.
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Validate and build the wire request.
    pub(crate) fn into_request(self, project_id: &str) -> Result<admin::ExportEntitiesRequest> {
        if self.bucket.is_some() && self.output_url_prefix.is_some() {
            return Err(ClientError::InvalidArgument(
                "Both `bucket` and `output_url_prefix` were provided.".into(),
            ));
        }
        let output_url_prefix = match (self.output_url_prefix, self.bucket) {
            (Some(url), None) => url,
            (None, Some(bucket)) => gs_url(&bucket),
            (None, None) => {
                return Err(ClientError::InvalidArgument(
                    "A bucket or an output URL prefix must be provided.".into(),
                ))
            }
            (Some(_), Some(_)) => unreachable!(),
        };

        let entity_filter =
            build_entity_filter(self.entity_filter, self.kinds, self.namespaces)?;

        Ok(admin::ExportEntitiesRequest {
            project_id: project_id.to_string(),
            labels: self.labels,
            entity_filter,
            output_url_prefix,
        })
    }
}

/// Options for a bulk entity import.
///
/// Provide either a storage file shorthand or an explicit input URL,
/// never both.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    file: Option<String>,
    input_url: Option<String>,
    kinds: Vec<String>,
    namespaces: Vec<String>,
    entity_filter: Option<admin::EntityFilter>,
    labels: HashMap<String, String>,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import from an export metadata file path in storage
    /// (with or without the `gs://` prefix).
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Import from an explicit input URL.
    pub fn input_url(mut self, url: impl Into<String>) -> Self {
        self.input_url = Some(url.into());
        self
    }

    /// Restrict the import to the given kind.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kinds.push(kind.into());
        self
    }

    /// Restrict the import to the given namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    /// Supply a complete entity filter. Conflicts with `kind`/`namespace`.
    pub fn entity_filter(mut self, filter: admin::EntityFilter) -> Self {
        self.entity_filter = Some(filter);
        self
    }

    /// Attach a client-assigned label to the operation.
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Validate and build the wire request.
    pub(crate) fn into_request(self, project_id: &str) -> Result<admin::ImportEntitiesRequest> {
        if self.file.is_some() && self.input_url.is_some() {
            return Err(ClientError::InvalidArgument(
                "Both `file` and `input_url` were provided.".into(),
            ));
        }
        let input_url = match (self.input_url, self.file) {
            (Some(url), None) => url,
            (None, Some(file)) => gs_url(&file),
            (None, None) => {
                return Err(ClientError::InvalidArgument(
                    "An input URL must be provided.".into(),
                ))
            }
            (Some(_), Some(_)) => unreachable!(),
        };

        let entity_filter =
            build_entity_filter(self.entity_filter, self.kinds, self.namespaces)?;

        Ok(admin::ImportEntitiesRequest {
            project_id: project_id.to_string(),
            labels: self.labels,
            input_url,
            entity_filter,
        })
    }
}

fn build_entity_filter(
    explicit: Option<admin::EntityFilter>,
    kinds: Vec<String>,
    namespaces: Vec<String>,
) -> Result<Option<admin::EntityFilter>> {
    if explicit.is_some() && (!kinds.is_empty() || !namespaces.is_empty()) {
        return Err(ClientError::InvalidArgument(
            "Both `entity_filter` and `kinds`/`namespaces` were provided.".into(),
        ));
    }
    if let Some(filter) = explicit {
        return Ok(Some(filter));
    }
    if kinds.is_empty() && namespaces.is_empty() {
        return Ok(None);
    }
    Ok(Some(admin::EntityFilter {
        kinds,
        namespace_ids: namespaces,
    }))
}

/// One page of composite indexes.
pub struct IndexList {
    pub indexes: Vec<admin::Index>,
    /// Token for the next page; empty when this was the last page.
    pub next_page_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_bucket_shorthand_normalized() {
        let request = ExportOptions::new()
            .bucket("my-bucket")
            .into_request("proj")
            .unwrap();
        assert_eq!(request.output_url_prefix, "gs://my-bucket");
        assert_eq!(request.project_id, "proj");
        assert!(request.entity_filter.is_none());

        // An existing gs:// prefix is not doubled.
        let request = ExportOptions::new()
            .bucket("gs://my-bucket")
            .into_request("proj")
            .unwrap();
        assert_eq!(request.output_url_prefix, "gs://my-bucket");
    }

    #[test]
    fn test_export_bucket_and_prefix_conflict() {
        let err = ExportOptions::new()
            .bucket("my-bucket")
            .output_url_prefix("gs://other")
            .into_request("proj")
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
        assert!(err.to_string().contains("bucket"));
    }

    #[test]
    fn test_export_requires_a_destination() {
        assert!(ExportOptions::new().into_request("proj").is_err());
    }

    #[test]
    fn test_export_kinds_shorthand_builds_filter() {
        let request = ExportOptions::new()
            .bucket("b")
            .kind("Task")
            .namespace("staging")
            .into_request("proj")
            .unwrap();
        let filter = request.entity_filter.unwrap();
        assert_eq!(filter.kinds, vec!["Task"]);
        assert_eq!(filter.namespace_ids, vec!["staging"]);
    }

    #[test]
    fn test_export_filter_conflicts_with_shorthands() {
        let err = ExportOptions::new()
            .bucket("b")
            .kind("Task")
            .entity_filter(admin::EntityFilter::default())
            .into_request("proj")
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }

    #[test]
    fn test_import_file_shorthand_normalized() {
        let request = ImportOptions::new()
            .file("bucket/export.overall_export_metadata")
            .into_request("proj")
            .unwrap();
        assert_eq!(
            request.input_url,
            "gs://bucket/export.overall_export_metadata"
        );
    }

    #[test]
    fn test_import_file_and_url_conflict() {
        let err = ImportOptions::new()
            .file("bucket/meta")
            .input_url("gs://bucket/meta")
            .into_request("proj")
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
        assert!(err.to_string().contains("input_url"));
    }

    #[test]
    fn test_import_requires_a_source() {
        assert!(ImportOptions::new().into_request("proj").is_err());
    }
}
