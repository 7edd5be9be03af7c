use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::RegisterUserRequest;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequestBody>,
) -> Result<ApiSuccess<RegisterUserResponseData>, ApiError> {
    state
        .user_service
        .register_user(body.into())
        .await
        .map_err(ApiError::from)
        .map(|id| ApiSuccess::new(StatusCode::CREATED, id.into()))
}

/// HTTP request body for registering a user (raw JSON)
///
/// Missing fields deserialize as empty and are rejected by the service.
#[derive(Clone, Deserialize)]
pub struct RegisterUserRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

impl From<RegisterUserRequestBody> for RegisterUserRequest {
    fn from(body: RegisterUserRequestBody) -> Self {
        RegisterUserRequest::new(body.username, body.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterUserResponseData {
    pub id: i64,
}

impl From<UserId> for RegisterUserResponseData {
    fn from(id: UserId) -> Self {
        Self { id: id.0 }
    }
}
