use async_trait::async_trait;

use crate::domain::user::models::LoginUserRequest;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Profile;
use crate::domain::user::models::RegisterUserRequest;
use crate::domain::user::models::UpdateProfileRequest;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::RepositoryError;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `request` - Username and plaintext password
    ///
    /// # Returns
    /// Identifier assigned by storage
    ///
    /// # Errors
    /// * `RequestInvalid` - Username or password is empty
    /// * `DuplicateUsername` - Username is already taken
    /// * `Internal` - Hashing (including over-long passwords) or storage failed
    async fn register_user(&self, request: RegisterUserRequest) -> Result<UserId, UserError>;

    /// Log in and receive a bearer token.
    ///
    /// # Arguments
    /// * `request` - Username and plaintext password
    ///
    /// # Returns
    /// `"Bearer <jwt>"` carrying the user's id
    ///
    /// # Errors
    /// * `RequestInvalid` - Username or password is empty
    /// * `UnknownUsername` - No user with this username
    /// * `WrongPassword` - Password does not match
    /// * `Internal` - Storage or token signing failed
    async fn login_user(&self, request: LoginUserRequest) -> Result<String, UserError>;

    /// Retrieve the public profile of a user.
    ///
    /// # Errors
    /// * `RequestInvalid` - Username is empty
    /// * `UnknownUsername` - No user with this username
    /// * `Internal` - Storage failed
    async fn get_profile_by_username(&self, username: &str) -> Result<Profile, UserError>;

    /// Update the profile of the user the bearer token was issued to.
    ///
    /// # Errors
    /// * `RequestInvalid` - Token is empty
    /// * `JwtAuth` - Token is malformed, wrongly signed, expired or has no usable `user_id`
    /// * `NothingToUpdate` - No mutable field is set
    /// * `Internal` - Hashing or storage failed, including the user having vanished
    async fn update_profile_by_user_id(&self, request: UpdateProfileRequest)
        -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Persist new user to storage.
    ///
    /// # Returns
    /// Identifier assigned by storage
    ///
    /// # Errors
    /// * `UniqueViolation` - Username is already taken
    /// * `Database` - Database operation failed
    async fn insert(&self, user: NewUser) -> Result<UserId, RepositoryError>;

    /// Replace a user's password hash and advance `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - No row was updated
    /// * `Database` - Database operation failed
    async fn update_password_by_id(
        &self,
        id: UserId,
        password_hash: &str,
    ) -> Result<(), RepositoryError>;
}
