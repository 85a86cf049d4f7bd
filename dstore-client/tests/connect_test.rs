/// Connection behavior without a reachable service
use dstore_client::{ClientError, Datastore, DatastoreConfig};

#[tokio::test]
async fn connect_failure_surfaces_as_connection_error() {
    // Port 1 is reserved and nothing listens on it, so the dial is
    // refused locally without any network dependence.
    let config = DatastoreConfig::new()
        .with_project_id("test-project")
        .with_endpoint("127.0.0.1:1");

    let err = Datastore::connect(config).await.unwrap_err();
    assert!(matches!(err, ClientError::ConnectionError(_)));
}

#[tokio::test]
async fn connect_requires_a_project_id() {
    // No override and no env fallback fails before any dial happens.
    std::env::remove_var("DATASTORE_PROJECT_ID");
    let config = DatastoreConfig::new().with_endpoint("127.0.0.1:1");

    let err = Datastore::connect(config).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));
}
