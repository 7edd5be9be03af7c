use thiserror::Error;

/// Error reported by the persistence port
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Username already exists: {0}")]
    UniqueViolation(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for all user-related operations.
///
/// Each variant is one kind transports can switch on; the payload keeps the
/// lower-level cause for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Request invalid: {0}")]
    RequestInvalid(String),

    #[error("Duplicate username: {0}")]
    DuplicateUsername(String),

    #[error("Unknown username: {0}")]
    UnknownUsername(String),

    #[error("Wrong password")]
    WrongPassword,

    #[error("JWT auth: {0}")]
    JwtAuth(#[from] auth::JwtError),

    #[error("Nothing to update")]
    NothingToUpdate,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation(username) => UserError::DuplicateUsername(username),
            RepositoryError::NotFound(_) | RepositoryError::Database(_) => {
                UserError::Internal(err.to_string())
            }
        }
    }
}
