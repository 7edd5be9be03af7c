use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::UserError;

/// User aggregate entity.
///
/// `password_hash` never leaves the service: no response type or log line
/// carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A user about to be inserted; storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request to register a new user.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
}

impl RegisterUserRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty.
    pub fn validate(&self) -> Result<(), UserError> {
        require_non_empty("username", &self.username)?;
        require_non_empty("password", &self.password)
    }
}

/// Request to log in with username and password.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginUserRequest {
    pub username: String,
    pub password: String,
}

impl LoginUserRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty.
    pub fn validate(&self) -> Result<(), UserError> {
        require_non_empty("username", &self.username)?;
        require_non_empty("password", &self.password)
    }
}

/// Request to update the caller's profile.
///
/// The bearer token stands in for a session: the user to update is whoever
/// the token was issued to. An empty `password` means "leave unchanged".
#[derive(Clone, PartialEq, Eq)]
pub struct UpdateProfileRequest {
    pub bearer_token: String,
    pub password: String,
}

impl UpdateProfileRequest {
    pub fn new(bearer_token: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            password: password.into(),
        }
    }

    /// The token is required; the password is checked later, after the token
    /// has been validated.
    pub fn validate(&self) -> Result<(), UserError> {
        require_non_empty("bearer token", &self.bearer_token)
    }

    /// True when no mutable field is set.
    pub fn is_empty(&self) -> bool {
        self.password.is_empty()
    }
}

// Requests hold plaintext passwords and tokens; keep them out of debug output.
impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for LoginUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginUserRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for UpdateProfileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateProfileRequest")
            .field("bearer_token", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), UserError> {
    if value.is_empty() {
        Err(UserError::RequestInvalid(format!("{} can not be empty", field)))
    } else {
        Ok(())
    }
}
