// Repository trait for the user store
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Number of user records, `None` when the store returns no row
    async fn count_users(&self) -> anyhow::Result<Option<i64>>;
}
