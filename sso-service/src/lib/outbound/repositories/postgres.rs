use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

fn database_error(e: sqlx::Error) -> StorageError {
    StorageError::DatabaseError(e.to_string())
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn user_from_row(row: &PgRow) -> Result<User, StorageError> {
        Ok(User {
            id: UserId(row.try_get("id").map_err(database_error)?),
            email: row.try_get("email").map_err(database_error)?,
            password_hash: row.try_get("pass_hash").map_err(database_error)?,
        })
    }
}

#[async_trait]
impl UserSaver for PostgresUserRepository {
    async fn save_user(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StorageError::UserExists;
                }
            }
            database_error(e)
        })?;

        Ok(UserId(id))
    }
}

#[async_trait]
impl UserProvider for PostgresUserRepository {
    async fn user(&self, email: &str) -> Result<User, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, pass_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(r) => Self::user_from_row(&r),
            None => Err(StorageError::UserNotFound),
        }
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT is_admin
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(StorageError::UserNotFound)
    }
}

pub struct PostgresAppRepository {
    pool: PgPool,
}

impl PostgresAppRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppProvider for PostgresAppRepository {
    async fn app(&self, app_id: AppId) -> Result<App, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, secret
            FROM apps
            WHERE id = $1
            "#,
        )
        .bind(app_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(StorageError::AppNotFound)?;

        Ok(App {
            id: AppId(row.try_get("id").map_err(database_error)?),
            name: row.try_get("name").map_err(database_error)?,
            secret: row.try_get("secret").map_err(database_error)?,
        })
    }
}
