use crate::domain::analytics::AnalyticsSnapshot;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    pub analytics: AnalyticsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    #[serde(default)]
    pub providers: HashMap<String, ProviderSettings>,
    /// Sessions older than this are dropped
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Cap on live sessions; the oldest is evicted past it
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            providers: HashMap::new(),
            session_ttl_secs: default_session_ttl_secs(),
            max_sessions: default_max_sessions(),
        }
    }
}

/// Identity handed out when signing in with a provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderSettings {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsSettings {
    /// Path of the analytics fixture, without extension
    pub fixture: String,
}

fn default_max_connections() -> u32 {
    4
}

fn default_session_ttl_secs() -> u64 {
    60 * 60 * 24
}

fn default_max_sessions() -> usize {
    10_000
}

/// Load `config/app.*`, overridden by `DASHBOARD__SECTION__KEY` variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app"))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_analytics_fixture(path: &str) -> anyhow::Result<AnalyticsSnapshot> {
    deserialize_source(config::File::with_name(path))
}

fn deserialize_source<T, S>(source: S) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder().add_source(source).build()?;
    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn test_app_config_defaults() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 3000

            [database]
            url = "sqlite::memory:"

            [analytics]
            fixture = "config/analytics"
        "#;
        let config: AppConfig = deserialize_source(File::from_str(toml, FileFormat::Toml)).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.max_connections, 4);
        assert!(config.auth.providers.is_empty());
        assert_eq!(config.auth.session_ttl_secs, 86_400);
        assert_eq!(config.auth.max_sessions, 10_000);
    }

    #[test]
    fn test_auth_providers() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "sqlite://users.db"
            max_connections = 2

            [auth]
            session_ttl_secs = 600
            max_sessions = 50

            [auth.providers.google]
            name = "Demo User"
            email = "demo@example.com"

            [analytics]
            fixture = "config/analytics"
        "#;
        let config: AppConfig = deserialize_source(File::from_str(toml, FileFormat::Toml)).unwrap();
        let google = &config.auth.providers["google"];
        assert_eq!(google.name, "Demo User");
        assert_eq!(google.email.as_deref(), Some("demo@example.com"));
        assert_eq!(config.auth.session_ttl_secs, 600);
        assert_eq!(config.auth.max_sessions, 50);
    }

    #[test]
    fn test_analytics_fixture() {
        let toml = r#"
            [[time_series]]
            date = "2024-07-20"
            count = 5

            [[categories]]
            name = "IT Support"
            value = 10

            [[conversations]]
            id = 1
            title = "Password Reset Issue"
            category = "IT Support"
            date = "2024-07-20"

            [[conversations.messages]]
            text = "How do I reset my password?"
            is_user = true
        "#;
        let snapshot: AnalyticsSnapshot =
            deserialize_source(File::from_str(toml, FileFormat::Toml)).unwrap();
        assert_eq!(snapshot.time_series[0].count, 5);
        assert_eq!(snapshot.categories[0].name, "IT Support");
        assert_eq!(snapshot.conversations[0].messages.len(), 1);
        assert!(snapshot.conversations[0].messages[0].is_user);
    }

    #[test]
    fn test_shipped_fixture_loads() {
        let snapshot = load_analytics_fixture(concat!(env!("CARGO_MANIFEST_DIR"), "/config/analytics"))
            .unwrap();
        assert!(!snapshot.conversations.is_empty());
        assert!(!snapshot.time_series.is_empty());
    }
}
