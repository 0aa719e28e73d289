use std::fmt;
use std::time::Duration;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Who a token is issued to, and the key of the application issuing it.
pub struct TokenSubject<'a> {
    pub user_id: i64,
    pub email: &'a str,
    pub app_id: i32,
    pub app_secret: &'a [u8],
}

impl fmt::Debug for TokenSubject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSubject")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

/// Issues application-scoped identity tokens.
///
/// Every application signs with its own secret, so a token minted for one
/// application never validates under another application's key.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIssuer;

impl TokenIssuer {
    pub fn new() -> Self {
        Self
    }

    /// Build and sign a token for `subject` valid for `ttl`.
    ///
    /// # Errors
    /// * `SigningFailed` - The application secret is empty or signing failed
    pub fn issue(&self, subject: &TokenSubject<'_>, ttl: Duration) -> Result<String, JwtError> {
        if subject.app_secret.is_empty() {
            return Err(JwtError::SigningFailed(format!(
                "application {} has an empty signing secret",
                subject.app_id
            )));
        }

        let claims = Claims::for_app_user(subject.user_id, subject.email, subject.app_id, ttl);

        JwtHandler::new(subject.app_secret).encode(&claims)
    }
}
