use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    Assistant,
    Visitor,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: ChatSender,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_visitor(content: impl Into<String>) -> Self {
        ChatMessage {
            id: Uuid::new_v4(),
            sender: ChatSender::Visitor,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn from_assistant(content: impl Into<String>) -> Self {
        ChatMessage {
            id: Uuid::new_v4(),
            sender: ChatSender::Assistant,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }
}
