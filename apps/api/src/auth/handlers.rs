//! Axum route handlers for login, registration, token verification and logout.

use axum::{extract::State, http::HeaderMap, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::middleware::bearer_token;
use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::user::{PublicUser, UserType};
use crate::state::AppState;
use crate::store::NewAccount;

const MIN_PASSWORD_LEN: usize = 8;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(rename = "userEmail")]
    pub user_email: String,
    pub password: String,
    #[serde(rename = "userType")]
    pub user_type: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "userType")]
    pub user_type: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// Returned by both login and registration. `access_token` duplicates
/// `token` for clients that read either name.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub access_token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub success: bool,
    pub user_email: String,
    pub user_type: UserType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    require_field("userEmail", &request.user_email)?;
    require_field("password", &request.password)?;
    let user_type: UserType = request.user_type.parse()?;

    info!("Login attempt for {} as {}", request.user_email.trim(), user_type);
    let account = state
        .store
        .authenticate(user_type, &request.user_email, &request.password)
        .await?;

    let token = state.sessions.issue(&account.email, user_type).await;
    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        access_token: token.clone(),
        token,
        user: account.public_view(),
    }))
}

/// POST /register
pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    require_field("email", &request.email)?;
    require_field("password", &request.password)?;
    let user_type: UserType = request.user_type.parse()?;

    if !request.email.contains('@') {
        return Err(AppError::Validation("email must be a valid email address".to_string()));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let account = state
        .store
        .create_account(NewAccount {
            email: request.email,
            user_type,
            name: request.name,
            password: request.password,
            phone: request.phone,
            company: request.company,
        })
        .await?;

    let token = state.sessions.issue(&account.email, user_type).await;
    Ok(Json(AuthResponse {
        success: true,
        message: "Registration successful".to_string(),
        access_token: token.clone(),
        token,
        user: account.public_view(),
    }))
}

/// GET /verify-token
///
/// Public route: reads the bearer token itself so it can report a missing
/// token and an invalid one with different messages.
pub async fn handle_verify_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<VerifyTokenResponse>, AppError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::Unauthorized("Token is required".to_string()))?;

    let user = state
        .sessions
        .resolve(token)
        .await
        .ok_or_else(AppError::invalid_credentials)?;

    Ok(Json(VerifyTokenResponse {
        success: true,
        user_email: user.email,
        user_type: user.user_type,
    }))
}

/// POST /logout
pub async fn handle_logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Json<MessageResponse> {
    state.sessions.revoke(&user.token).await;
    Json(MessageResponse {
        success: true,
        message: "Logged out".to_string(),
    })
}

fn require_field(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} is required")));
    }
    Ok(())
}
