use std::sync::Arc;

use crate::auth::sessions::SessionRegistry;
use crate::config::Config;
use crate::matching::{KeywordMatcher, Matcher};
use crate::store::PortalStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PortalStore>,
    /// Token → session map. Recruiter shortlists live inside the sessions.
    pub sessions: Arc<SessionRegistry>,
    /// Pluggable search backend. Default: KeywordMatcher.
    pub matcher: Arc<dyn Matcher>,
    pub config: Config,
}

impl AppState {
    /// Empty store and session registry with the keyword matcher.
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(PortalStore::new()),
            sessions: Arc::new(SessionRegistry::new(config.session_ttl_minutes)),
            matcher: Arc::new(KeywordMatcher),
            config,
        }
    }
}
