use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::LoginUserRequest;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Profile;
use crate::domain::user::models::RegisterUserRequest;
use crate::domain::user::models::UpdateProfileRequest;
use crate::domain::user::models::UserId;
use crate::user::errors::RepositoryError;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token handling, built from configuration
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// bcrypt is CPU bound, so it runs on the blocking pool.
    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| UserError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                UserError::Internal(format!("Password hashing failed: {}", e))
            })
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, request: RegisterUserRequest) -> Result<UserId, UserError> {
        request.validate()?;

        let RegisterUserRequest { username, password } = request;
        let password_hash = self.hash_password(password).await?;

        let now = Utc::now();
        let new_user = NewUser {
            username: username.clone(),
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let user_id = self.repository.insert(new_user).await.map_err(|e| {
            match &e {
                RepositoryError::UniqueViolation(_) => {
                    tracing::info!(username = %username, "Registration rejected: duplicate username")
                }
                _ => tracing::error!(username = %username, error = %e, "Failed to insert user"),
            }
            UserError::from(e)
        })?;

        tracing::info!(user_id = %user_id, username = %username, "User registered");

        Ok(user_id)
    }

    async fn login_user(&self, request: LoginUserRequest) -> Result<String, UserError> {
        request.validate()?;

        let LoginUserRequest { username, password } = request;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or_else(|| UserError::UnknownUsername(username.clone()))?;

        let authenticator = Arc::clone(&self.authenticator);
        let user_id = user.id;
        let stored_hash = user.password_hash;

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(user_id.0, &password, &stored_hash)
        })
        .await
        .map_err(|e| UserError::Internal(format!("Password verification task failed: {}", e)))?;

        match result {
            Ok(authentication) => {
                tracing::info!(user_id = %user_id, "User logged in");
                Ok(authentication.access_token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::info!(user_id = %user_id, "Login rejected: wrong password");
                Err(UserError::WrongPassword)
            }
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Login failed");
                Err(UserError::Internal(e.to_string()))
            }
        }
    }

    async fn get_profile_by_username(&self, username: &str) -> Result<Profile, UserError> {
        if username.is_empty() {
            return Err(UserError::RequestInvalid(
                "username can not be empty".to_string(),
            ));
        }

        self.repository
            .find_by_username(username)
            .await?
            .map(Profile::from)
            .ok_or_else(|| UserError::UnknownUsername(username.to_string()))
    }

    async fn update_profile_by_user_id(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<(), UserError> {
        request.validate()?;

        let user_id = self
            .authenticator
            .user_id_from_token(&request.bearer_token)
            .map(UserId)
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected bearer token");
                UserError::JwtAuth(e)
            })?;

        if request.is_empty() {
            return Err(UserError::NothingToUpdate);
        }

        let password_hash = self.hash_password(request.password).await?;

        self.repository
            .update_password_by_id(user_id, &password_hash)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user_id, error = %e, "Failed to update password");
                UserError::from(e)
            })?;

        tracing::info!(user_id = %user_id, "Profile updated");

        Ok(())
    }
}
