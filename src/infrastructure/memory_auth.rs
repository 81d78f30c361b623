// In-memory session store keyed by random cookie tokens
use crate::application::auth::{AuthError, AuthProvider};
use crate::domain::session::{Session, User};
use crate::infrastructure::config::AuthSettings;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60 * 24);
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug)]
struct StoredSession {
    session: Session,
    issued_at: Instant,
    /// Issue order, used to pick the oldest entry for eviction
    serial: u64,
}

#[derive(Debug, Default)]
struct SessionStore {
    entries: HashMap<String, StoredSession>,
    next_serial: u64,
}

/// Sessions live until sign-out, expiry after `ttl`, or eviction once
/// `max_sessions` are held.
#[derive(Debug)]
pub struct MemoryAuthProvider {
    providers: HashMap<String, User>,
    sessions: RwLock<SessionStore>,
    ttl: Duration,
    max_sessions: usize,
}

impl MemoryAuthProvider {
    pub fn new(providers: HashMap<String, User>) -> Self {
        Self::with_limits(providers, DEFAULT_SESSION_TTL, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_limits(providers: HashMap<String, User>, ttl: Duration, max_sessions: usize) -> Self {
        Self {
            providers,
            sessions: RwLock::new(SessionStore::default()),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn from_settings(settings: &AuthSettings) -> Self {
        let providers = settings
            .providers
            .iter()
            .map(|(key, p)| {
                let user = User {
                    name: p.name.clone(),
                    email: p.email.clone(),
                };
                (key.clone(), user)
            })
            .collect();
        Self::with_limits(
            providers,
            Duration::from_secs(settings.session_ttl_secs),
            settings.max_sessions,
        )
    }

    fn is_live(&self, stored: &StoredSession, now: Instant) -> bool {
        now.duration_since(stored.issued_at) < self.ttl
    }

    #[cfg(test)]
    async fn stored_count(&self) -> usize {
        self.sessions.read().await.entries.len()
    }
}

#[async_trait]
impl AuthProvider for MemoryAuthProvider {
    async fn current_session(&self, token: Option<&str>) -> Option<Session> {
        let token = token?;
        let now = Instant::now();
        self.sessions
            .read()
            .await
            .entries
            .get(token)
            .filter(|stored| self.is_live(stored, now))
            .map(|stored| stored.session.clone())
    }

    async fn sign_in(&self, provider: &str) -> Result<String, AuthError> {
        let user = self
            .providers
            .get(provider)
            .cloned()
            .ok_or_else(|| AuthError::UnknownProvider(provider.to_string()))?;

        let now = Instant::now();
        let mut store = self.sessions.write().await;

        let before = store.entries.len();
        store.entries.retain(|_, stored| self.is_live(stored, now));
        let expired = before - store.entries.len();
        if expired > 0 {
            tracing::debug!(expired, "Dropped expired sessions");
        }

        while store.entries.len() >= self.max_sessions {
            let oldest = store
                .entries
                .iter()
                .min_by_key(|(_, stored)| stored.serial)
                .map(|(token, _)| token.clone());
            let Some(oldest) = oldest else { break };
            store.entries.remove(&oldest);
            tracing::warn!("Session store full, evicted the oldest session");
        }

        let token = Uuid::new_v4().to_string();
        let serial = store.next_serial;
        store.next_serial += 1;
        store.entries.insert(
            token.clone(),
            StoredSession {
                session: Session::new(user, provider),
                issued_at: now,
                serial,
            },
        );

        tracing::info!(provider, "Signed in");
        Ok(token)
    }

    async fn sign_out(&self, token: &str) {
        if self.sessions.write().await.entries.remove(token).is_some() {
            tracing::info!("Signed out");
        }
    }
}
