/// Connection configuration for the Datastore client
///
/// Endpoint resolution order: an explicit override, else the
/// `DATASTORE_EMULATOR_HOST` environment variable, else the production
/// default. Custom endpoints (override or emulator) are dialed in
/// plaintext; the production default is dialed over TLS.
use crate::error::{ClientError, Result};

/// Production service hostname, dialed over TLS.
pub const DEFAULT_HOST: &str = "datastore.googleapis.com";

/// Default service port.
pub const DEFAULT_PORT: u16 = 443;

/// Environment variable naming a local emulator `host:port`.
pub const EMULATOR_HOST_ENV: &str = "DATASTORE_EMULATOR_HOST";

/// Environment variable providing a fallback project id.
pub const PROJECT_ID_ENV: &str = "DATASTORE_PROJECT_ID";

/// The service's documented per-property indexed-size limit, in bytes.
/// Indexed string and blob properties larger than this are rejected by the
/// service unless excluded from indexing.
pub const DEFAULT_INDEX_SIZE_LIMIT: usize = 1500;

/// Client configuration with builder-style setters.
#[derive(Debug, Clone, Default)]
pub struct DatastoreConfig {
    /// Project against which all requests are made. Falls back to the
    /// `DATASTORE_PROJECT_ID` environment variable when unset.
    pub project_id: Option<String>,

    /// Default namespace for keys and queries (None = default namespace).
    pub namespace: Option<String>,

    /// Explicit endpoint override (`host:port`, scheme optional).
    pub endpoint: Option<String>,

    /// Threshold for large-property auto-exclusion, in bytes.
    pub index_size_limit: Option<usize>,
}

impl DatastoreConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project id
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Set the default namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Override the service endpoint (e.g. "localhost:8081")
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Override the large-property auto-exclusion threshold
    pub fn with_index_size_limit(mut self, bytes: usize) -> Self {
        self.index_size_limit = Some(bytes);
        self
    }

    /// Resolve the project id: explicit, else environment, else error.
    pub(crate) fn resolve_project_id(&self) -> Result<String> {
        if let Some(id) = &self.project_id {
            return Ok(id.clone());
        }
        match std::env::var(PROJECT_ID_ENV) {
            Ok(id) if !id.is_empty() => Ok(id),
            _ => Err(ClientError::InvalidArgument(format!(
                "A project id is required: set one explicitly or via {}",
                PROJECT_ID_ENV
            ))),
        }
    }

    /// Resolve the endpoint against the process environment.
    pub(crate) fn resolve_endpoint(&self) -> Endpoint {
        let emulator = std::env::var(EMULATOR_HOST_ENV).ok().filter(|v| !v.is_empty());
        resolve_endpoint(self.endpoint.as_deref(), emulator.as_deref())
    }
}

/// A resolved service endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    /// True when the endpoint came from an override or the emulator
    /// variable rather than the production default.
    pub is_custom: bool,
}

impl Endpoint {
    /// The URI to dial. Custom endpoints get plaintext http, the
    /// production default gets TLS.
    pub fn uri(&self) -> String {
        let scheme = if self.is_custom { "http" } else { "https" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }
}

/// Pure endpoint resolution: override wins, then the emulator address,
/// then the production default. Scheme prefixes and trailing slashes are
/// stripped; a `:port` suffix is extracted, defaulting to 443.
pub(crate) fn resolve_endpoint(
    override_endpoint: Option<&str>,
    emulator_host: Option<&str>,
) -> Endpoint {
    let (raw, is_custom) = match (override_endpoint, emulator_host) {
        (Some(e), _) => (e, true),
        (None, Some(e)) => (e, true),
        (None, None) => (DEFAULT_HOST, false),
    };

    let trimmed = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw)
        .trim_end_matches('/');

    let (host, port) = match trimmed.rsplit_once(':') {
        Some((host, port)) => match port.parse::<u16>() {
            Ok(port) => (host, port),
            Err(_) => (trimmed, DEFAULT_PORT),
        },
        None => (trimmed, DEFAULT_PORT),
    };

    Endpoint {
        host: host.to_string(),
        port,
        is_custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let ep = resolve_endpoint(None, None);
        assert_eq!(ep.host, DEFAULT_HOST);
        assert_eq!(ep.port, DEFAULT_PORT);
        assert!(!ep.is_custom);
        assert_eq!(ep.uri(), "https://datastore.googleapis.com:443");
    }

    #[test]
    fn test_override_beats_emulator() {
        let ep = resolve_endpoint(Some("fake.local:9090"), Some("localhost:8081"));
        assert_eq!(ep.host, "fake.local");
        assert_eq!(ep.port, 9090);
        assert!(ep.is_custom);
    }

    #[test]
    fn test_emulator_host() {
        let ep = resolve_endpoint(None, Some("localhost:8081"));
        assert_eq!(ep.host, "localhost");
        assert_eq!(ep.port, 8081);
        assert!(ep.is_custom);
        // Custom endpoints are dialed in plaintext.
        assert_eq!(ep.uri(), "http://localhost:8081");
    }

    #[test]
    fn test_scheme_and_slashes_stripped() {
        let ep = resolve_endpoint(Some("https://datastore.example.com/"), None);
        assert_eq!(ep.host, "datastore.example.com");
        assert_eq!(ep.port, DEFAULT_PORT);

        let ep = resolve_endpoint(Some("http://localhost:8081///"), None);
        assert_eq!(ep.host, "localhost");
        assert_eq!(ep.port, 8081);
    }

    #[test]
    fn test_port_extraction_without_port() {
        let ep = resolve_endpoint(Some("somehost"), None);
        assert_eq!(ep.host, "somehost");
        assert_eq!(ep.port, DEFAULT_PORT);
    }

    #[test]
    fn test_builder() {
        let config = DatastoreConfig::new()
            .with_project_id("my-project")
            .with_namespace("staging")
            .with_endpoint("localhost:8081")
            .with_index_size_limit(2000);

        assert_eq!(config.project_id.as_deref(), Some("my-project"));
        assert_eq!(config.namespace.as_deref(), Some("staging"));
        assert_eq!(config.endpoint.as_deref(), Some("localhost:8081"));
        assert_eq!(config.index_size_limit, Some(2000));
        assert_eq!(config.resolve_project_id().unwrap(), "my-project");
    }
}
