//! Chat API trait

use async_trait::async_trait;

use crate::client::models::{ChatMessage, OutgoingMessage};
use crate::error::Result;

/// Doctor-patient chat
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Messages exchanged with one patient, oldest first
    async fn chat_history(&self, token: &str, patient_id: i64) -> Result<Vec<ChatMessage>>;

    /// Store a message; the server echoes it back with its id
    async fn send_chat_message(
        &self,
        token: &str,
        message: &OutgoingMessage,
    ) -> Result<ChatMessage>;
}
