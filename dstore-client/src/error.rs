/// Error types for the Datastore client
use thiserror::Error;
use tonic::Status;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Local validation failure, raised before any RPC is issued.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Precondition failed: {0}")]
    FailedPrecondition(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Server unavailable: {0}")]
    Unavailable(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Transaction aborted: {0}")]
    TransactionAborted(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Local data-model errors are validation errors: they are raised before
/// any network call is made.
impl From<dstore_core::Error> for ClientError {
    fn from(err: dstore_core::Error) -> Self {
        ClientError::InvalidArgument(err.to_string())
    }
}

/// Convert gRPC Status to ClientError
impl From<Status> for ClientError {
    fn from(status: Status) -> Self {
        let msg = status.message().to_string();

        match status.code() {
            tonic::Code::NotFound => ClientError::NotFound(msg),
            tonic::Code::InvalidArgument => ClientError::InvalidArgument(msg),
            tonic::Code::FailedPrecondition => ClientError::FailedPrecondition(msg),
            tonic::Code::Unavailable => ClientError::Unavailable(msg),
            tonic::Code::DeadlineExceeded => ClientError::Timeout(msg),
            tonic::Code::Internal => ClientError::InternalError(msg),
            tonic::Code::Aborted => ClientError::TransactionAborted(msg),
            tonic::Code::AlreadyExists => ClientError::AlreadyExists(msg),
            tonic::Code::ResourceExhausted => ClientError::ResourceExhausted(msg),
            tonic::Code::Unimplemented => ClientError::Unimplemented(msg),
            tonic::Code::PermissionDenied => ClientError::PermissionDenied(msg),
            _ => ClientError::Unknown(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ClientError::from(Status::not_found("no such entity"));
        assert!(matches!(err, ClientError::NotFound(_)));

        let err = ClientError::from(Status::aborted("contention"));
        assert!(matches!(err, ClientError::TransactionAborted(_)));

        let err = ClientError::from(Status::data_loss("bad"));
        assert!(matches!(err, ClientError::Unknown(_)));
    }

    #[test]
    fn test_core_error_is_invalid_argument() {
        let err = ClientError::from(dstore_core::Error::EmptyKeyPath);
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }
}
