//! Doctor-patient chat thread with optimistic sending

use log::debug;
use serde::Serialize;

use crate::client::ChatApi;
use crate::client::models::{ChatMessage, ChatSender, OutgoingMessage};
use crate::error::{Result, ValidationError};
use crate::optimistic::Optimistic;
use crate::session::Role;

/// Messages exchanged with one patient, oldest first
#[derive(Debug, Clone, Serialize)]
pub struct ChatThread {
    patient_id: i64,
    messages: Vec<ChatMessage>,
}

impl ChatThread {
    pub fn new(patient_id: i64, messages: Vec<ChatMessage>) -> Self {
        Self {
            patient_id,
            messages,
        }
    }

    pub async fn load<C>(client: &C, token: &str, patient_id: i64) -> Result<Self>
    where
        C: ChatApi + ?Sized,
    {
        let messages = client.chat_history(token, patient_id).await?;
        debug!("Chat with patient {}: {} messages", patient_id, messages.len());
        Ok(Self::new(patient_id, messages))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append `text` as a draft, then send it.
    ///
    /// On success the draft is replaced by the stored message and returned.
    /// On failure the draft is removed again and the error returned.
    pub async fn send<C>(
        &mut self,
        client: &C,
        token: &str,
        sender: ChatSender,
        text: &str,
    ) -> Result<&ChatMessage>
    where
        C: ChatApi + ?Sized,
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::MissingField("message").into());
        }

        let outgoing = OutgoingMessage {
            patient_id: self.patient_id,
            sender,
            text: text.to_string(),
        };

        let index = self.messages.len();
        let pending = Optimistic::apply(&mut self.messages, |messages| {
            messages.push(ChatMessage::draft(sender, text))
        });
        let stored = pending.settle(client.send_chat_message(token, &outgoing).await)?;

        self.messages[index] = stored;
        Ok(&self.messages[index])
    }
}

/// Doctors and admins write as the doctor side; everyone else as the patient
pub fn sender_for(role: Option<Role>) -> ChatSender {
    match role {
        Some(Role::Doctor) | Some(Role::Admin) => ChatSender::Doctor,
        Some(Role::Patient) | None => ChatSender::Patient,
    }
}
