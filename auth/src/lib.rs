//! Authentication utilities library
//!
//! Provides the credential and token primitives the user service builds on:
//! - Password hashing (bcrypt, 72-byte input limit enforced)
//! - Bearer JWT issuance and validation (HMAC family only)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(PasswordHasher::MIN_COST);
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! assert!(hasher.verify("other_password", &hash).is_err());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.issue(42, Duration::hours(1)).unwrap();
//! assert!(token.starts_with("Bearer "));
//!
//! let claims = handler.parse_and_validate(&token).unwrap();
//! assert_eq!(claims.user_id().unwrap(), 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24))
//!     .with_password_cost(4);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate(1, "password123", &hash).unwrap();
//!
//! // Validate token
//! let user_id = auth.user_id_from_token(&result.access_token).unwrap();
//! assert_eq!(user_id, 1);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
