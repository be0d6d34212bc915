//! Notification API trait

use async_trait::async_trait;

use crate::client::models::Notification;
use crate::error::Result;

/// Doctor notification operations
#[async_trait]
pub trait NotificationApi: Send + Sync {
    /// List notifications, newest first as the server orders them
    async fn list_notifications(&self, token: &str) -> Result<Vec<Notification>>;

    /// Mark one notification read
    async fn mark_notification_read(&self, token: &str, id: i64) -> Result<()>;

    /// Mark every notification read
    async fn mark_all_notifications_read(&self, token: &str) -> Result<()>;
}
