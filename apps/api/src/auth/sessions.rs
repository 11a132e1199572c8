//! In-process session registry. Tokens are opaque random identifiers; a
//! token is valid exactly as long as its entry exists and has not expired.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::config::MAX_SESSION_TTL_MINUTES;
use crate::models::user::UserType;
use crate::shortlist::Shortlist;

#[derive(Debug)]
pub struct Session {
    pub email: String,
    pub user_type: UserType,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub shortlist: Shortlist,
}

impl Session {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionRegistry {
    /// `ttl_minutes` is clamped to `0..=MAX_SESSION_TTL_MINUTES`.
    pub fn new(ttl_minutes: i64) -> Self {
        let ttl = Duration::try_minutes(ttl_minutes.clamp(0, MAX_SESSION_TTL_MINUTES))
            .unwrap_or_else(Duration::zero);
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Creates a session and returns its token.
    pub async fn issue(&self, email: &str, user_type: UserType) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let now = Utc::now();
        let session = Session {
            email: email.to_string(),
            user_type,
            issued_at: now,
            expires_at: now
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            shortlist: Shortlist::new(),
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        info!("Session issued for {email} as {user_type} ({} active)", sessions.len());
        token
    }

    /// Resolves a token to its user. Expired sessions are removed.
    pub async fn resolve(&self, token: &str) -> Option<CurrentUser> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        match sessions.get(token) {
            Some(session) if session.is_expired(now) => {
                debug!("Session for {} expired at {}", session.email, session.expires_at);
                sessions.remove(token);
                None
            }
            Some(session) => Some(CurrentUser {
                token: token.to_string(),
                email: session.email.clone(),
                user_type: session.user_type,
            }),
            None => None,
        }
    }

    /// Ends a session, discarding its shortlist. Returns whether it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(token);
        if let Some(session) = &removed {
            info!(
                "Session ended for {} after {}s",
                session.email,
                (Utc::now() - session.issued_at).num_seconds()
            );
        }
        removed.is_some()
    }

    /// Runs `f` against the session's shortlist. `None` if the session is gone.
    pub async fn with_shortlist<R>(
        &self,
        token: &str,
        f: impl FnOnce(&mut Shortlist) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(token).map(|session| f(&mut session.shortlist))
    }

    /// Drops every expired session. Returns how many were removed.
    pub async fn prune_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
