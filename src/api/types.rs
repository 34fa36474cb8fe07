//! Request and response types for the agent API.
//!
//! These mirror the backend's DTOs; everything is a plain value record.

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// The human at the terminal.
    User,
    /// The store agent.
    Assistant,
}

/// A single message in a conversation.
///
/// Immutable once created; the transcript is append-only apart from a
/// full clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message author.
    pub role: MessageRole,
    /// The message content.
    pub content: String,
    /// Creation time as an RFC 3339 timestamp, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Request to send a chat message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// Thread to continue; omitted on the first turn of a conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    /// Optional customer identity forwarded to the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// Response from the chat endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// The agent's reply text.
    pub message: String,
    /// Server-assigned thread ID, stable for the conversation.
    pub thread_id: String,
    /// Customer identity the agent resolved, if any.
    pub customer_id: Option<String>,
    /// Name of the agent that produced the reply, if reported.
    pub agent_name: Option<String>,
}

/// A stored conversation fetched by thread ID.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationHistory {
    /// The conversation's thread ID.
    pub thread_id: String,
    /// Messages in order.
    pub messages: Vec<ChatMessage>,
    /// Customer identity attached to the conversation, if any.
    pub customer_id: Option<String>,
}

/// Response from the liveness probe.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Reported service status, e.g. `"healthy"`.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_absent_options() {
        let req = ChatRequest {
            message: "hello".into(),
            thread_id: None,
            customer_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "hello" }));
    }

    #[test]
    fn request_carries_thread_and_customer() {
        let req = ChatRequest {
            message: "hello".into(),
            thread_id: Some("t1".into()),
            customer_id: Some("1".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["thread_id"], "t1");
        assert_eq!(json["customer_id"], "1");
    }

    #[test]
    fn roles_use_lowercase_wire_form() {
        let msg: ChatMessage = serde_json::from_value(serde_json::json!({
            "role": "assistant",
            "content": "Hi there!",
        }))
        .unwrap();
        assert_eq!(msg.role, MessageRole::Assistant);
        assert!(msg.timestamp.is_none());
    }
}
