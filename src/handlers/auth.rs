//! Account registration and login.
//!
//! Login only reports the stored role; no session token or cookie is issued.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;

use crate::AppState;
use crate::error::ApiError;
use crate::models::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::services::users::{authenticate, register_user};
use crate::validation::Choice;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(payload) = payload?;
    let user = payload.validate()?;

    let role = state.config.default_role;
    let saved = register_user(&state.db, user, role, state.config.bcrypt_cost).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: saved.id,
            role,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(payload) = payload?;
    let credentials = payload.validate()?;

    let role = authenticate(&state.db, credentials).await?;
    info!(role = role.as_str(), "Login successful");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        role,
    }))
}
