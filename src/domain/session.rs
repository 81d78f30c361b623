// Authenticated session model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub provider: String,
}

impl Session {
    pub fn new(user: User, provider: impl Into<String>) -> Self {
        Self {
            user,
            provider: provider.into(),
        }
    }

    /// A session only counts as signed in when the provider gave us an email
    pub fn is_signed_in(&self) -> bool {
        self.user.email.as_deref().is_some_and(|e| !e.is_empty())
    }
}
