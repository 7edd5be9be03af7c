use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Built once at startup from configuration and shared read-only between
/// requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Bearer-prefixed JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
        }
    }

    /// Replace the bcrypt cost factor.
    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_hasher = PasswordHasher::with_cost(cost);
        self
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Password too long or hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and generate a token for `user_id`.
    ///
    /// A malformed stored hash counts as a failed verification.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        user_id: i64,
        password: &str,
        stored_hash: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        match self.password_hasher.verify(password, stored_hash) {
            Ok(()) => {}
            Err(PasswordError::Mismatch) => return Err(AuthenticationError::InvalidCredentials),
            Err(PasswordError::VerificationFailed(reason)) => {
                tracing::warn!(user_id, %reason, "Stored password hash could not be verified");
                return Err(AuthenticationError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        }

        let access_token = self.issue_token(user_id)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Generate a bearer token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, user_id: i64) -> Result<String, JwtError> {
        self.jwt_handler.issue(user_id, self.token_ttl)
    }

    /// Validate a bearer token and return its claims.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.parse_and_validate(token)
    }

    /// Validate a bearer token and extract the user it was issued to.
    ///
    /// # Errors
    /// * `JwtError` - Token invalid, or `user_id` claim missing or not an integer
    pub fn user_id_from_token(&self, token: &str) -> Result<i64, JwtError> {
        self.validate_token(token)?.user_id()
    }
}
