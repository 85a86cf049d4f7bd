use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Key path is empty")]
    EmptyKeyPath,

    #[error("Only the last key path element may be incomplete: {0}")]
    InvalidKeyPath(String),

    #[error("Key is incomplete: {0}")]
    IncompleteKey(String),

    #[error("Key is already complete: {0}")]
    CompleteKey(String),

    #[error("Entity has no key")]
    MissingKey,

    #[error("Arrays cannot contain other arrays (property `{0}`)")]
    NestedArray(String),

    #[error("Mutation kind `{0}` not recognized")]
    UnknownMutationKind(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns a stable error code for this error variant.
    /// These codes are stable and can be used by callers for error classification.
    pub fn code(&self) -> &'static str {
        match self {
            Error::EmptyKeyPath => "EMPTY_KEY_PATH",
            Error::InvalidKeyPath(_) => "INVALID_KEY_PATH",
            Error::IncompleteKey(_) => "INCOMPLETE_KEY",
            Error::CompleteKey(_) => "COMPLETE_KEY",
            Error::MissingKey => "MISSING_KEY",
            Error::NestedArray(_) => "NESTED_ARRAY",
            Error::UnknownMutationKind(_) => "UNKNOWN_MUTATION_KIND",
            Error::InvalidValue(_) => "INVALID_VALUE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(Error::EmptyKeyPath.code(), "EMPTY_KEY_PATH");
        assert_eq!(
            Error::UnknownMutationKind("bogus".into()).code(),
            "UNKNOWN_MUTATION_KIND"
        );
        assert_eq!(Error::NestedArray("tags".into()).code(), "NESTED_ARRAY");
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnknownMutationKind("bogus".into());
        assert_eq!(err.to_string(), "Mutation kind `bogus` not recognized");
    }
}
