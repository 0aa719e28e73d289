use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Error reported by storage adapters through the outbound ports
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserExists,

    #[error("App not found")]
    AppNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Top-level error for all authentication operations
///
/// The first four variants are caller errors and are safe to show to API
/// consumers verbatim. The rest are internal faults: they carry the failing
/// operation for server-side logs and must be reported generically.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    // Caller errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserExists,

    #[error("Invalid app id")]
    InvalidAppId,

    // Internal faults
    #[error("{operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("{operation}: {source}")]
    Password {
        operation: &'static str,
        #[source]
        source: PasswordError,
    },

    #[error("{operation}: {source}")]
    Token {
        operation: &'static str,
        #[source]
        source: JwtError,
    },
}

impl AuthError {
    /// Whether this error is an internal fault rather than a caller error.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AuthError::Storage { .. } | AuthError::Password { .. } | AuthError::Token { .. }
        )
    }

    pub(crate) fn storage(operation: &'static str, source: StorageError) -> Self {
        AuthError::Storage { operation, source }
    }

    pub(crate) fn password(operation: &'static str, source: PasswordError) -> Self {
        AuthError::Password { operation, source }
    }

    pub(crate) fn token(operation: &'static str, source: JwtError) -> Self {
        AuthError::Token { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_errors_are_not_internal() {
        assert!(!AuthError::InvalidArgument("email is required".to_string()).is_internal());
        assert!(!AuthError::InvalidCredentials.is_internal());
        assert!(!AuthError::UserExists.is_internal());
        assert!(!AuthError::InvalidAppId.is_internal());
    }

    #[test]
    fn test_internal_faults_carry_operation() {
        let err = AuthError::storage(
            "auth.login",
            StorageError::DatabaseError("connection refused".to_string()),
        );

        assert!(err.is_internal());
        assert_eq!(
            err.to_string(),
            "auth.login: Database error: connection refused"
        );
    }
}
