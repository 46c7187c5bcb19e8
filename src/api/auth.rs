//! Authentication endpoints.

use axum::{extract::State, http::header, http::HeaderMap, Extension, Json};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{ChangePasswordRequest, LoginRequest, LoginResponse, SessionUser};
use crate::AppState;

/// POST /api/auth/login - Exchange credentials for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    match state.identity.login(&request.username, &request.password) {
        Some((token, user)) => {
            tracing::info!(username = %user.username, role = user.role.as_str(), "login");
            success(LoginResponse { token, user })
        }
        None => Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        )),
    }
}

/// POST /api/auth/logout - End the current session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    if let Some(token) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
    {
        state.identity.logout(token);
    }
    success(())
}

/// GET /api/auth/me - The current principal.
pub async fn me(Extension(principal): Extension<SessionUser>) -> ApiResult<SessionUser> {
    success(principal)
}

/// PUT /api/auth/password - Change the current user's password.
pub async fn change_password(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionUser>,
    Json(request): Json<ChangePasswordRequest>,
) -> ApiResult<()> {
    if request.new_password != request.confirm_password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }
    if request.new_password.len() < 4 {
        return Err(AppError::Validation(
            "Password must be at least 4 characters".to_string(),
        ));
    }

    state.identity.change_password(
        &principal.id,
        &request.current_password,
        &request.new_password,
    )?;

    tracing::info!(username = %principal.username, "password changed");
    success(())
}
