use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::LoginUserRequest;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login_user(
    State(state): State<AppState>,
    Json(body): Json<LoginUserRequestBody>,
) -> Result<ApiSuccess<LoginUserResponseData>, ApiError> {
    let token = state
        .user_service
        .login_user(body.into())
        .await
        .map_err(|e| match e {
            // Do not reveal which usernames exist
            UserError::UnknownUsername(_) | UserError::WrongPassword => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginUserResponseData { token },
    ))
}

#[derive(Clone, Deserialize)]
pub struct LoginUserRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

impl From<LoginUserRequestBody> for LoginUserRequest {
    fn from(body: LoginUserRequestBody) -> Self {
        LoginUserRequest::new(body.username, body.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginUserResponseData {
    /// `"Bearer <jwt>"`, ready for the `Authorization` header
    pub token: String,
}
