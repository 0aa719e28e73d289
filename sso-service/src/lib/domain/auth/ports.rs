use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication domain service operations.
///
/// Inputs are primitive-typed; validation happens in the service, not in the
/// inbound adapters.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a token scoped to one application.
    ///
    /// # Arguments
    /// * `email` - Account email
    /// * `password` - Plaintext password
    /// * `app_id` - Application the token is issued for
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `InvalidArgument` - Empty email or password, or unset app id
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * Internal faults - Storage, hashing, or signing failed, or the app does not exist
    async fn login(&self, email: &str, password: &str, app_id: AppId)
        -> Result<String, AuthError>;

    /// Create a new account.
    ///
    /// # Arguments
    /// * `email` - Account email
    /// * `password` - Plaintext password (hashed before it reaches storage)
    ///
    /// # Returns
    /// Identifier assigned to the new user
    ///
    /// # Errors
    /// * `InvalidArgument` - Empty email or password
    /// * `UserExists` - Email is already registered
    /// * Internal faults - Hashing or storage failed
    async fn register(&self, email: &str, password: &str) -> Result<UserId, AuthError>;

    /// Check whether a user holds administrator privileges.
    ///
    /// # Arguments
    /// * `user_id` - User to check
    ///
    /// # Returns
    /// Current admin flag, read from storage on every call
    ///
    /// # Errors
    /// * `InvalidArgument` - Unset user id
    /// * `InvalidAppId` - Storage reported the subject as not found
    /// * Internal faults - Storage failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Persists new users.
#[async_trait]
pub trait UserSaver: Send + Sync + 'static {
    /// Store a user atomically.
    ///
    /// # Arguments
    /// * `email` - Account email, unique across users
    /// * `password_hash` - Hash produced by the password hasher
    ///
    /// # Returns
    /// Identifier assigned by storage
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `DatabaseError` - Storage operation failed
    async fn save_user(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError>;
}

/// Reads users and their privileges.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Retrieve user by email.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `DatabaseError` - Storage operation failed
    async fn user(&self, email: &str) -> Result<User, StorageError>;

    /// Retrieve the admin flag of a user.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this id
    /// * `DatabaseError` - Storage operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError>;
}

/// Reads client applications.
#[async_trait]
pub trait AppProvider: Send + Sync + 'static {
    /// Retrieve application by identifier.
    ///
    /// # Errors
    /// * `AppNotFound` - No application with this id
    /// * `DatabaseError` - Storage operation failed
    async fn app(&self, app_id: AppId) -> Result<App, StorageError>;
}
