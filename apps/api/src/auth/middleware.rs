use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Resolves `Authorization: Bearer <token>` into a [`CurrentUser`] extension.
///
/// [`CurrentUser`]: crate::auth::CurrentUser
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Unauthorized("Token is required".to_string()))?
        .to_string();

    let Some(user) = state.sessions.resolve(&token).await else {
        tracing::warn!("token rejected, authentication denied");
        return Err(AppError::invalid_credentials());
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Extracts a non-empty bearer token from the request headers.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
