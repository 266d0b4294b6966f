//! Handlers for the `/auth` resource (login, register, password reset).
//!
//! These are mocks: credentials are checked against the configured demo
//! account and tokens are a fixed opaque string.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stayhub_core::error::CoreError;
use stayhub_core::wire::{
    AuthGrant, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    ResetPasswordRequest,
};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::fixtures::MOCK_TOKEN;
use crate::state::AppState;

/// POST /api/auth/login
///
/// Accepts only the configured demo credentials.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<AuthGrant>> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "Email and password are required".into(),
        ));
    }

    if !state.config.demo.matches(&input.email, &input.password) {
        tracing::info!(email = %input.email, "Rejected login");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    tracing::info!(email = %input.email, "Login succeeded");
    Ok(Json(AuthGrant::new(state.fixtures.demo_user(), MOCK_TOKEN)))
}

/// POST /api/auth/register
///
/// Any complete request succeeds with 201 unless it reuses the demo email.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthGrant>)> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "Name, email, and password are required".into(),
        ));
    }

    if input.email == state.config.demo.email {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already in use".into(),
        )));
    }

    tracing::info!(email = %input.email, "Registered account");
    let user = state.fixtures.registered_user(&input.name, &input.email);
    Ok((StatusCode::CREATED, Json(AuthGrant::new(user, MOCK_TOKEN))))
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(
    AppJson(input): AppJson<ForgotPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    if !input.is_complete() {
        return Err(AppError::BadRequest("Email is required".into()));
    }

    tracing::info!(email = %input.email, "Password reset requested");
    Ok(Json(MessageResponse::new(
        "Password reset link has been sent to your email",
    )))
}

/// POST /api/auth/reset-password
///
/// Any non-empty token is accepted; no credential is changed.
pub async fn reset_password(
    AppJson(input): AppJson<ResetPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "Token and password are required".into(),
        ));
    }

    tracing::info!("Password reset accepted");
    Ok(Json(MessageResponse::new(
        "Password has been reset successfully",
    )))
}
