use tracing::{info, warn};

use crate::client::error::ClientError;
use crate::client::session::{ClientSession, SessionStore};
use crate::client::{PortalClient, Registration};
use crate::models::user::UserType;

/// Client-side application state: the API client, the session store, and
/// the session currently in effect.
pub struct PortalApp<S: SessionStore> {
    client: PortalClient,
    store: S,
    session: Option<ClientSession>,
}

impl<S: SessionStore> PortalApp<S> {
    pub fn new(client: PortalClient, store: S) -> Self {
        Self {
            client,
            store,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&ClientSession> {
        self.session.as_ref()
    }

    /// Loads the stored session and checks it with the server. A session
    /// the server rejects is discarded; a network failure keeps it stored
    /// but leaves the app logged out.
    pub async fn restore(&mut self) -> Result<Option<&ClientSession>, ClientError> {
        self.session = None;
        let Some(stored) = self.store.load().await? else {
            return Ok(None);
        };

        match self.client.verify_token(&stored.token).await {
            Ok(_) => {
                info!("Restored session for {}", stored.email);
                self.session = Some(stored);
                Ok(self.session.as_ref())
            }
            Err(ClientError::Rejected { detail, .. }) => {
                warn!("Stored session for {} rejected: {detail}", stored.email);
                self.store.clear().await?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<&ClientSession, ClientError> {
        let session = self.client.login(email, password, user_type).await?;
        self.adopt(session).await
    }

    pub async fn register(&mut self, registration: &Registration) -> Result<&ClientSession, ClientError> {
        let session = self.client.register(registration).await?;
        self.adopt(session).await
    }

    async fn adopt(&mut self, session: ClientSession) -> Result<&ClientSession, ClientError> {
        self.store.save(&session).await?;
        Ok(&*self.session.insert(session))
    }

    /// Ends the session on the server, then forgets it locally. Local state
    /// is cleared even when the server call fails.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        let Some(session) = self.session.take() else {
            return self.store.clear().await;
        };

        if let Err(e) = self.client.logout(&session.token).await {
            warn!("Server logout failed for {}: {e}", session.email);
        }
        self.store.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::session::{FileSessionStore, MemorySessionStore};
    use crate::client::test_server;

    #[tokio::test]
    async fn test_login_persists_and_restore_verifies() {
        let base = test_server::spawn().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut app = PortalApp::new(PortalClient::new(&base), FileSessionStore::new(&path));
        app.register(&Registration {
            email: "s@example.com".to_string(),
            password: "password123".to_string(),
            user_type: UserType::Jobseeker,
            name: Some("Kiran".to_string()),
            phone: None,
            company: None,
        })
        .await
        .unwrap();
        app.logout().await.unwrap();
        assert!(app.session().is_none());

        app.login("s@example.com", "password123", UserType::Jobseeker)
            .await
            .unwrap();
        assert!(path.exists());

        // a second app over the same file picks the session up
        let mut restarted = PortalApp::new(PortalClient::new(&base), FileSessionStore::new(&path));
        let restored = restarted.restore().await.unwrap().cloned();
        assert_eq!(restored.map(|s| s.email), Some("s@example.com".to_string()));
    }

    #[tokio::test]
    async fn test_restore_discards_rejected_session() {
        let base = test_server::spawn().await;
        let store = MemorySessionStore::new();
        store
            .save(&ClientSession {
                email: "ghost@example.com".to_string(),
                user_type: UserType::Recruiter,
                token: "not-a-real-token".to_string(),
            })
            .await
            .unwrap();

        let mut app = PortalApp::new(PortalClient::new(base), store);
        assert!(app.restore().await.unwrap().is_none());
        assert!(app.store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_local_state_when_server_unreachable() {
        let store = MemorySessionStore::new();
        let session = ClientSession {
            email: "r@example.com".to_string(),
            user_type: UserType::Recruiter,
            token: "abc".to_string(),
        };
        store.save(&session).await.unwrap();

        let mut app = PortalApp::new(PortalClient::new("http://127.0.0.1:9"), store);
        app.session = Some(session);

        app.logout().await.unwrap();
        assert!(app.session().is_none());
        assert!(app.store.load().await.unwrap().is_none());
    }
}
