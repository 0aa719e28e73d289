use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an application-scoped identity token.
///
/// Binds one user to the application whose secret signed the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject user identifier
    pub uid: i64,

    /// Subject email, as stored
    pub email: String,

    /// Issuing application identifier
    pub app_id: i32,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user of an application, expiring `ttl` from now.
    ///
    /// The clock is read on every call so the lifetime is measured from the
    /// actual issuance instant.
    ///
    /// # Arguments
    /// * `user_id` - Subject user identifier
    /// * `email` - Subject email
    /// * `app_id` - Issuing application identifier
    /// * `ttl` - Token lifetime
    pub fn for_app_user(
        user_id: i64,
        email: impl Into<String>,
        app_id: i32,
        ttl: Duration,
    ) -> Self {
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

        Self {
            uid: user_id,
            email: email.into(),
            app_id,
            exp: Utc::now().timestamp().saturating_add(ttl_secs),
        }
    }

    /// Check if token is expired.
    ///
    /// A token is no longer valid from its expiry second onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
