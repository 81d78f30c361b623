// Static analytics data loaded once at startup
use crate::application::analytics_source::AnalyticsSource;
use crate::domain::analytics::AnalyticsSnapshot;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FixtureAnalyticsSource {
    snapshot: Arc<AnalyticsSnapshot>,
}

impl FixtureAnalyticsSource {
    pub fn new(snapshot: AnalyticsSnapshot) -> Self {
        tracing::info!(
            points = snapshot.time_series.len(),
            categories = snapshot.categories.len(),
            conversations = snapshot.conversations.len(),
            "Loaded analytics fixture"
        );
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}

#[async_trait]
impl AnalyticsSource for FixtureAnalyticsSource {
    async fn snapshot(&self) -> anyhow::Result<AnalyticsSnapshot> {
        Ok(self.snapshot.as_ref().clone())
    }
}
