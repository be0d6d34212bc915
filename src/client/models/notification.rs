//! Notification models

use serde::{Deserialize, Serialize};

/// Doctor notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: String,

    pub message: String,

    #[serde(default)]
    pub redirect_to: Option<String>,

    pub is_read: bool,

    pub created_at: String,
}
