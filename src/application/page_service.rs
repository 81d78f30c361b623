// Page service - Use case for assembling the dashboard page data
use crate::application::analytics_source::AnalyticsSource;
use crate::application::auth::AuthProvider;
use crate::application::user_repository::UserRepository;
use crate::domain::analytics::AnalyticsSnapshot;
use crate::domain::conversation::Conversation;
use crate::domain::dashboard_state::DashboardState;
use crate::domain::session::Session;
use anyhow::Context;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PageData {
    pub session: Option<Session>,
    pub user_count: Option<i64>,
    pub snapshot: AnalyticsSnapshot,
}

#[derive(Clone)]
pub struct PageService {
    auth: Arc<dyn AuthProvider>,
    users: Arc<dyn UserRepository>,
    analytics: Arc<dyn AnalyticsSource>,
}

impl PageService {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        users: Arc<dyn UserRepository>,
        analytics: Arc<dyn AnalyticsSource>,
    ) -> Self {
        Self {
            auth,
            users,
            analytics,
        }
    }

    /// Everything the dashboard page needs for one request
    pub async fn assemble(&self, session_token: Option<&str>) -> anyhow::Result<PageData> {
        let session = self.auth.current_session(session_token).await;

        let user_count = self
            .users
            .count_users()
            .await
            .context("Failed to count users")?;

        let snapshot = self
            .analytics
            .snapshot()
            .await
            .context("Failed to load analytics data")?;

        tracing::debug!(
            signed_in = session.as_ref().is_some_and(Session::is_signed_in),
            conversations = snapshot.conversations.len(),
            "Assembled dashboard page data"
        );

        Ok(PageData {
            session,
            user_count,
            snapshot,
        })
    }

    /// Conversations passing the filters of `state`, in source order
    pub async fn filtered_conversations(
        &self,
        state: &DashboardState,
    ) -> anyhow::Result<Vec<Conversation>> {
        let snapshot = self.analytics.snapshot().await?;
        Ok(state
            .filter()
            .apply(&snapshot.conversations)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::auth::AuthError;
    use async_trait::async_trait;

    struct NoAuth;

    #[async_trait]
    impl AuthProvider for NoAuth {
        async fn current_session(&self, _token: Option<&str>) -> Option<Session> {
            None
        }

        async fn sign_in(&self, provider: &str) -> Result<String, AuthError> {
            Err(AuthError::UnknownProvider(provider.to_string()))
        }

        async fn sign_out(&self, _token: &str) {}
    }

    struct FixedUsers(Option<i64>);

    #[async_trait]
    impl UserRepository for FixedUsers {
        async fn count_users(&self) -> anyhow::Result<Option<i64>> {
            Ok(self.0)
        }
    }

    struct BrokenUsers;

    #[async_trait]
    impl UserRepository for BrokenUsers {
        async fn count_users(&self) -> anyhow::Result<Option<i64>> {
            anyhow::bail!("no such table: users")
        }
    }

    struct Fixed(AnalyticsSnapshot);

    #[async_trait]
    impl AnalyticsSource for Fixed {
        async fn snapshot(&self) -> anyhow::Result<AnalyticsSnapshot> {
            Ok(self.0.clone())
        }
    }

    fn snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot::new(
            vec![],
            vec![],
            vec![
                Conversation::new(1, "Password Reset Issue", "IT Support", "2024-07-20", vec![]),
                Conversation::new(2, "Pricing question", "Sales", "2024-07-21", vec![]),
            ],
        )
    }

    #[tokio::test]
    async fn test_assemble_page_data() {
        let service = PageService::new(
            Arc::new(NoAuth),
            Arc::new(FixedUsers(Some(3))),
            Arc::new(Fixed(snapshot())),
        );
        let data = service.assemble(None).await.unwrap();
        assert!(data.session.is_none());
        assert_eq!(data.user_count, Some(3));
        assert_eq!(data.snapshot.conversations.len(), 2);
    }

    #[tokio::test]
    async fn test_assemble_propagates_count_failure() {
        let service = PageService::new(
            Arc::new(NoAuth),
            Arc::new(BrokenUsers),
            Arc::new(Fixed(snapshot())),
        );
        let err = service.assemble(None).await.unwrap_err();
        assert!(format!("{err:#}").contains("no such table"));
    }

    #[tokio::test]
    async fn test_filtered_conversations() {
        let service = PageService::new(
            Arc::new(NoAuth),
            Arc::new(FixedUsers(None)),
            Arc::new(Fixed(snapshot())),
        );
        let state = DashboardState::default().toggle_category("Sales");
        let convs = service.filtered_conversations(&state).await.unwrap();
        assert_eq!(convs.len(), 1);
        assert_eq!(convs[0].id, 2);
    }
}
