//! Notification display model

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::client::models::Notification;
use crate::output::formatters::format_timestamp;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct NotificationDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    /// "●" for unread, blank once read
    #[tabled(rename = "NEW")]
    pub unread: String,

    #[tabled(rename = "TYPE")]
    pub kind: String,

    #[tabled(rename = "MESSAGE")]
    pub message: String,

    #[tabled(rename = "RECEIVED")]
    pub received: String,
}

impl From<&Notification> for NotificationDisplay {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id,
            unread: if n.is_read { String::new() } else { "●".to_string() },
            kind: n.kind.clone(),
            message: truncate_string(&n.message, 60),
            received: format_timestamp(&n.created_at),
        }
    }
}

impl From<Notification> for NotificationDisplay {
    fn from(n: Notification) -> Self {
        Self::from(&n)
    }
}
