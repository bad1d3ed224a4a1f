//! HTTP Handlers

use axum::Extension;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::AppJson;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AccountNameUseCase, ChangePasswordUseCase, LoginUseCase, RegisterUseCase,
};
use crate::application::change_password::ChangePasswordInput;
use crate::application::login::LoginInput;
use crate::application::register::RegisterInput;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AdminNameResponse, LoginRequest, LoginResponse, MessageResponse, PasswordChangeRequest,
    RegisterRequest, RegisterResponse,
};
use crate::presentation::middleware::Principal;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".into(),
            user_id: output.user_id.into_uuid(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        token: output.token,
    }))
}

// ============================================================================
// Password Change
// ============================================================================

/// POST /passwordChange
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<PasswordChangeRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(ChangePasswordInput {
            username: req.username,
            old_password: req.old_password,
            new_password: req.new_password,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Password changed successfully".into(),
    }))
}

// ============================================================================
// Account Name
// ============================================================================

/// GET /admin-name
pub async fn admin_name<R>(
    State(state): State<AuthAppState<R>>,
    Extension(principal): Extension<Principal>,
) -> AuthResult<Json<AdminNameResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = AccountNameUseCase::new(state.repo.clone());

    let output = use_case.execute(&principal.user_id).await?;

    Ok(Json(AdminNameResponse { name: output.name }))
}
