//! Session domain model.
//!
//! One `Session` lives for the duration of one interactive run. It
//! holds the ordered chat transcript and the currently resolved user,
//! and is discarded at process exit; there is no persistence.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::gitlab::UserProfile;

/// Represents the role of a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the assistant.
    Assistant,
}

/// A single message in the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Timestamp when the message was created (RFC 3339).
    pub timestamp: String,
}

impl ChatMessage {
    /// Creates a message stamped with the current time.
    pub fn now(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Process-local state of one interactive session.
///
/// The transcript is append-only: messages are never mutated or
/// removed. The current user is overwritten wholesale on each lookup,
/// never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was started (RFC 3339)
    pub created_at: String,
    /// Ordered chat transcript
    pub messages: Vec<ChatMessage>,
    /// The currently resolved user, if any
    pub current_user: Option<UserProfile>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            messages: Vec::new(),
            current_user: None,
        }
    }

    /// Appends a user message to the transcript.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages
            .push(ChatMessage::now(MessageRole::User, content));
    }

    /// Appends an assistant message to the transcript.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages
            .push(ChatMessage::now(MessageRole::Assistant, content));
    }

    /// Replaces the current user with a freshly resolved profile.
    pub fn set_current_user(&mut self, user: UserProfile) {
        self.current_user = Some(user);
    }

    /// Clears the current user ahead of a new lookup.
    pub fn clear_current_user(&mut self) {
        self.current_user = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
