use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenSubject;
use tracing::Instrument;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

const LOGIN: &str = "auth.login";
const REGISTER: &str = "auth.register";
const IS_ADMIN: &str = "auth.is_admin";

/// Domain service implementation for authentication operations.
///
/// Holds no mutable state: every call reads storage afresh, so concurrent
/// calls need no coordination.
pub struct AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    user_saver: Arc<US>,
    user_provider: Arc<UP>,
    app_provider: Arc<AP>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_ttl: Duration,
}

impl<US, UP, AP> AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_saver` - User persistence implementation
    /// * `user_provider` - User lookup implementation
    /// * `app_provider` - Application lookup implementation
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(
        user_saver: Arc<US>,
        user_provider: Arc<UP>,
        app_provider: Arc<AP>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(),
            token_ttl,
        }
    }

    async fn login_in_span(
        &self,
        email: &str,
        password: &str,
        app_id: AppId,
    ) -> Result<String, AuthError> {
        if email.is_empty() {
            return Err(AuthError::InvalidArgument("email is required".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::InvalidArgument("password is required".to_string()));
        }
        if app_id.is_unset() {
            return Err(AuthError::InvalidArgument("app_id is required".to_string()));
        }

        tracing::info!("Attempting to login user");

        let user = match self.user_provider.user(email).await {
            Ok(user) => user,
            Err(StorageError::UserNotFound) => {
                tracing::warn!("User not found");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to get user");
                return Err(AuthError::storage(LOGIN, e));
            }
        };

        let matches = self
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Stored password hash is unusable");
                AuthError::password(LOGIN, e)
            })?;

        if !matches {
            tracing::info!(user_id = %user.id, "Invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let app = self.app_provider.app(app_id).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to get app");
            AuthError::storage(LOGIN, e)
        })?;

        let subject = TokenSubject {
            user_id: user.id.0,
            email: &user.email,
            app_id: app.id.0,
            app_secret: app.secret.as_bytes(),
        };

        let token = self
            .token_issuer
            .issue(&subject, self.token_ttl)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to generate token");
                AuthError::token(LOGIN, e)
            })?;

        tracing::info!(user_id = %user.id, "User logged in successfully");

        Ok(token)
    }

    /// Hashing runs on the blocking pool.
    async fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        let hasher = self.password_hasher;
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let hasher = self.password_hasher;
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?
    }

    async fn register_in_span(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        if email.is_empty() {
            return Err(AuthError::InvalidArgument("email is required".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::InvalidArgument("password is required".to_string()));
        }

        tracing::info!("Registering user");

        let password_hash = self.hash_password(password).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AuthError::password(REGISTER, e)
        })?;

        let user_id = match self.user_saver.save_user(email, &password_hash).await {
            Ok(user_id) => user_id,
            Err(StorageError::UserExists) => {
                tracing::warn!("User already exists");
                return Err(AuthError::UserExists);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save user");
                return Err(AuthError::storage(REGISTER, e));
            }
        };

        tracing::info!(user_id = %user_id, "User registered");

        Ok(user_id)
    }

    async fn is_admin_in_span(&self, user_id: UserId) -> Result<bool, AuthError> {
        if user_id.is_unset() {
            return Err(AuthError::InvalidArgument("user_id is required".to_string()));
        }

        tracing::info!("Checking if user is admin");

        // Not-found maps to InvalidAppId for compatibility with existing clients.
        let is_admin = match self.user_provider.is_admin(user_id).await {
            Ok(is_admin) => is_admin,
            Err(e @ (StorageError::UserNotFound | StorageError::AppNotFound)) => {
                tracing::warn!(error = %e, "Admin lookup subject not found");
                return Err(AuthError::InvalidAppId);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to check admin status");
                return Err(AuthError::storage(IS_ADMIN, e));
            }
        };

        tracing::info!(is_admin, "Checked if user is admin");

        Ok(is_admin)
    }
}

#[async_trait]
impl<US, UP, AP> AuthServicePort for AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    async fn login(
        &self,
        email: &str,
        password: &str,
        app_id: AppId,
    ) -> Result<String, AuthError> {
        let span = tracing::info_span!(LOGIN, email = %email, app_id = %app_id);
        self.login_in_span(email, password, app_id)
            .instrument(span)
            .await
    }

    async fn register(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        let span = tracing::info_span!(REGISTER, email = %email);
        self.register_in_span(email, password).instrument(span).await
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        let span = tracing::info_span!(IS_ADMIN, user_id = %user_id);
        self.is_admin_in_span(user_id).instrument(span).await
    }
}
