//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the SSO service:
//! - Password hashing (Argon2id)
//! - Application-scoped JWT issuance
//! - JWT decoding for downstream token consumers
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Issuing a token for an application
//! ```
//! use std::time::Duration;
//!
//! use auth::{Claims, JwtHandler, TokenIssuer, TokenSubject};
//!
//! let secret = b"app_secret";
//! let subject = TokenSubject {
//!     user_id: 1,
//!     email: "alice@example.com",
//!     app_id: 1,
//!     app_secret: secret,
//! };
//! let token = TokenIssuer::new().issue(&subject, Duration::from_secs(3600)).unwrap();
//!
//! let claims: Claims = JwtHandler::new(secret).decode(&token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use jwt::TokenSubject;
pub use password::PasswordError;
pub use password::PasswordHasher;
