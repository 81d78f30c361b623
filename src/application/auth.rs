// Authentication collaborator
use crate::domain::session::Session;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unknown sign-in provider: {0}")]
    UnknownProvider(String),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve the session for a cookie token, if any
    async fn current_session(&self, token: Option<&str>) -> Option<Session>;

    /// Start a session with the named provider and return its token
    async fn sign_in(&self, provider: &str) -> Result<String, AuthError>;

    /// End the session behind `token`. Unknown tokens are ignored.
    async fn sign_out(&self, token: &str);
}
