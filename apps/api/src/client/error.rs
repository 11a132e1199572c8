use thiserror::Error;

/// Errors surfaced to callers of [`PortalClient`](super::PortalClient).
///
/// `Display` is the message to show the user.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// Transport failure. The underlying error is logged, not shown.
    #[error("Could not reach the portal server. Please try again.")]
    Network(#[source] reqwest::Error),

    /// Non-2xx response. `detail` is the server's message when it sent one.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl ClientError {
    pub fn network(err: reqwest::Error) -> Self {
        tracing::error!("portal request failed: {err}");
        ClientError::Network(err)
    }

    /// Status of a rejected request, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
