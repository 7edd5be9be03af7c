use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::UpdateProfileRequest;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Update the profile of the caller identified by the `Authorization` header.
///
/// The header value is handed to the service as-is; a missing header is
/// treated as an empty token.
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UpdateProfileRequestBody>,
) -> Result<ApiSuccess<()>, ApiError> {
    let bearer_token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    state
        .user_service
        .update_profile_by_user_id(UpdateProfileRequest::new(bearer_token, body.password))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}

/// Mutable profile fields; an absent field is left unchanged.
#[derive(Clone, Deserialize)]
pub struct UpdateProfileRequestBody {
    #[serde(default)]
    password: String,
}
