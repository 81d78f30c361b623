// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use conversation_dashboard::application::auth::AuthProvider;
use conversation_dashboard::application::page_service::PageService;
use conversation_dashboard::infrastructure::config::{load_analytics_fixture, load_app_config};
use conversation_dashboard::infrastructure::fixture_source::FixtureAnalyticsSource;
use conversation_dashboard::infrastructure::memory_auth::MemoryAuthProvider;
use conversation_dashboard::infrastructure::sqlite_user_repository::SqliteUserRepository;
use conversation_dashboard::infrastructure::templates::PageRenderer;
use conversation_dashboard::presentation::app_state::AppState;
use conversation_dashboard::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;
    let snapshot = load_analytics_fixture(&config.analytics.fixture)?;

    // Create adapters (infrastructure layer)
    let users = Arc::new(
        SqliteUserRepository::connect(&config.database.url, config.database.max_connections)
            .await?,
    );
    let auth: Arc<dyn AuthProvider> = Arc::new(MemoryAuthProvider::from_settings(&config.auth));
    let analytics = Arc::new(FixtureAnalyticsSource::new(snapshot));

    // Create services (application layer)
    let page_service = PageService::new(auth.clone(), users, analytics);

    // Create application state
    let state = Arc::new(AppState {
        page_service,
        auth,
        renderer: Arc::new(PageRenderer::new()?),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Starting conversation-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
