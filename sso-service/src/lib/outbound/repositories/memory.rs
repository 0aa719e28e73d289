use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

#[derive(Debug)]
struct UserRecord {
    user: User,
    is_admin: bool,
}

#[derive(Debug, Default)]
struct UserTable {
    last_id: i64,
    by_email: HashMap<String, UserRecord>,
    email_by_id: HashMap<UserId, String>,
}

/// Process-local user storage.
///
/// Ids start at 1 and are never reused. The email check and the insert happen
/// under one write lock, so concurrent registrations of the same email
/// produce exactly one user.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the admin flag of an existing user.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this id
    pub async fn set_admin(&self, user_id: UserId, is_admin: bool) -> Result<(), StorageError> {
        let mut table = self.table.write().await;
        let UserTable {
            by_email,
            email_by_id,
            ..
        } = &mut *table;

        let record = email_by_id
            .get(&user_id)
            .and_then(|email| by_email.get_mut(email))
            .ok_or(StorageError::UserNotFound)?;
        record.is_admin = is_admin;

        Ok(())
    }
}

#[async_trait]
impl UserSaver for InMemoryUserRepository {
    async fn save_user(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError> {
        let mut table = self.table.write().await;

        if table.by_email.contains_key(email) {
            return Err(StorageError::UserExists);
        }

        table.last_id += 1;
        let id = UserId(table.last_id);
        let user = User {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };

        table.email_by_id.insert(id, email.to_string());
        table.by_email.insert(
            email.to_string(),
            UserRecord {
                user,
                is_admin: false,
            },
        );

        Ok(id)
    }
}

#[async_trait]
impl UserProvider for InMemoryUserRepository {
    async fn user(&self, email: &str) -> Result<User, StorageError> {
        self.table
            .read()
            .await
            .by_email
            .get(email)
            .map(|record| record.user.clone())
            .ok_or(StorageError::UserNotFound)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError> {
        let table = self.table.read().await;

        table
            .email_by_id
            .get(&user_id)
            .and_then(|email| table.by_email.get(email))
            .map(|record| record.is_admin)
            .ok_or(StorageError::UserNotFound)
    }
}

/// Process-local, read-only application registry.
#[derive(Debug, Default)]
pub struct InMemoryAppRepository {
    apps: HashMap<AppId, App>,
}

impl InMemoryAppRepository {
    pub fn new(apps: impl IntoIterator<Item = App>) -> Self {
        Self {
            apps: apps.into_iter().map(|app| (app.id, app)).collect(),
        }
    }
}

#[async_trait]
impl AppProvider for InMemoryAppRepository {
    async fn app(&self, app_id: AppId) -> Result<App, StorageError> {
        self.apps
            .get(&app_id)
            .cloned()
            .ok_or(StorageError::AppNotFound)
    }
}
