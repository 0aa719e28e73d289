use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod is_admin;
pub mod login;
pub mod register;

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidArgument(_) | AuthError::InvalidAppId => {
                Status::invalid_argument(err.to_string())
            }
            AuthError::InvalidCredentials => Status::unauthenticated(err.to_string()),
            AuthError::UserExists => Status::already_exists(err.to_string()),
            AuthError::Storage { .. } | AuthError::Password { .. } | AuthError::Token { .. } => {
                tracing::error!(error = %err, "Internal error while handling gRPC request");
                Status::internal("internal error")
            }
        }
    }
}
