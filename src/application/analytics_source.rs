// Source of the analytics data sets shown on the dashboard
use crate::domain::analytics::AnalyticsSnapshot;
use async_trait::async_trait;

#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    /// Time series, category breakdown and conversation list for one page render
    async fn snapshot(&self) -> anyhow::Result<AnalyticsSnapshot>;
}
