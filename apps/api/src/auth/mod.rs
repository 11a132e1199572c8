//! Accounts and sessions: password digests, the token registry, the bearer
//! middleware guarding protected routes, and the login/register handlers.

pub mod handlers;
pub mod middleware;
pub mod password;
pub mod sessions;

use crate::errors::AppError;
use crate::models::user::UserType;

/// The authenticated caller, inserted into request extensions by
/// [`middleware::require_session`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub token: String,
    pub email: String,
    pub user_type: UserType,
}

impl CurrentUser {
    /// Fails with 403 unless the caller has the given role.
    pub fn require(&self, user_type: UserType) -> Result<(), AppError> {
        if self.user_type != user_type {
            tracing::warn!(
                "Access denied: {} is a {}, expected {}",
                self.email,
                self.user_type,
                user_type
            );
            return Err(AppError::access_denied());
        }
        Ok(())
    }
}
