//! Conversation state and send orchestration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::api::{
    Client,
    error::Error,
    types::{ChatMessage, ChatRequest, MessageRole},
};

/// Fallback shown when an error renders to nothing.
const GENERIC_SEND_ERROR: &str = "Failed to send message";

/// Prefix for the synthetic assistant message appended on failure.
const ERROR_REPLY_PREFIX: &str = "Sorry, I encountered an error: ";

/// Result of attempting to send a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The agent replied; a user and an assistant message were appended.
    Replied,
    /// The request failed; the error was recorded and a synthetic assistant
    /// message was appended so the transcript still shows a response.
    Errored,
    /// Nothing happened: the input was blank, or a request was already in
    /// flight (single-flight: concurrent sends are rejected, not queued).
    Ignored,
}

/// A single conversation with the agent.
///
/// Holds the ordered message transcript, the in-flight flag, the
/// server-assigned thread ID, and the last error. Handles are cheap clones
/// sharing the same state; only [`ChatSession::send`] and
/// [`ChatSession::clear`] mutate it.
#[derive(Debug)]
pub struct ChatSession {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Conversation messages, oldest first.
    messages: RwLock<Vec<ChatMessage>>,
    /// Server-assigned thread ID, set from the first response.
    thread_id: RwLock<Option<String>>,
    /// Last send error, cleared on the next send.
    error: RwLock<Option<String>>,
    /// Set while a request is outstanding.
    in_flight: AtomicBool,
    /// Customer identity forwarded on every request, if configured.
    customer_id: Option<String>,
}

impl Clone for ChatSession {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ChatSession {
    /// Create an empty session.
    #[must_use]
    pub fn new(customer_id: Option<String>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                messages: RwLock::new(Vec::new()),
                thread_id: RwLock::new(None),
                error: RwLock::new(None),
                in_flight: AtomicBool::new(false),
                customer_id,
            }),
        }
    }

    /// Send a user message and wait for the agent's reply.
    ///
    /// Blank input and sends while another request is outstanding are
    /// ignored. Otherwise the user message is appended before the request is
    /// issued, so the transcript always shows the turn, and exactly one
    /// assistant message (real or synthetic) follows it.
    pub async fn send(&self, client: &Client, input: &str) -> SendOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }
        if self
            .inner
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Send rejected, request already in flight");
            return SendOutcome::Ignored;
        }

        self.set_error(None);
        self.push_message(MessageRole::User, text.to_string());

        let request = ChatRequest {
            message: text.to_string(),
            thread_id: self.thread_id(),
            customer_id: self.inner.customer_id.clone(),
        };

        let outcome = match client.send_message(&request).await {
            Ok(response) => {
                self.record_thread_id(response.thread_id);
                self.push_message(MessageRole::Assistant, response.message);
                SendOutcome::Replied
            }
            Err(e) => {
                let error_text = surface_error(&e);
                tracing::error!(error = %error_text, "Chat request failed");
                self.set_error(Some(error_text.clone()));
                self.push_message(
                    MessageRole::Assistant,
                    format!("{ERROR_REPLY_PREFIX}{error_text}"),
                );
                SendOutcome::Errored
            }
        };

        self.inner.in_flight.store(false, Ordering::Release);
        outcome
    }

    /// Reset the session: empty transcript, no thread ID, no error.
    pub fn clear(&self) {
        self.inner.messages.write().unwrap().clear();
        *self.inner.thread_id.write().unwrap() = None;
        *self.inner.error.write().unwrap() = None;
    }

    /// Get all messages in the conversation.
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.inner.messages.read().unwrap().clone()
    }

    /// Get the number of messages in the conversation.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.inner.messages.read().unwrap().len()
    }

    /// Get the thread ID, if one has been assigned by the server.
    #[must_use]
    pub fn thread_id(&self) -> Option<String> {
        self.inner.thread_id.read().unwrap().clone()
    }

    /// Get the last send error, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.inner.error.read().unwrap().clone()
    }

    /// Whether a request is currently outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.in_flight.load(Ordering::Acquire)
    }

    fn push_message(&self, role: MessageRole, content: String) {
        let msg = ChatMessage {
            role,
            content,
            timestamp: Some(Utc::now().to_rfc3339()),
        };
        self.inner.messages.write().unwrap().push(msg);
    }

    /// Keep the first thread ID the server hands out; later responses must
    /// carry the same one, so never overwrite it.
    fn record_thread_id(&self, thread_id: String) {
        let mut guard = self.inner.thread_id.write().unwrap();
        if guard.is_none() {
            tracing::debug!(thread_id = %thread_id, "Thread ID assigned");
            *guard = Some(thread_id);
        }
    }

    fn set_error(&self, error: Option<String>) {
        *self.inner.error.write().unwrap() = error;
    }
}

fn surface_error(error: &Error) -> String {
    let text = error.to_string();
    if text.trim().is_empty() {
        GENERIC_SEND_ERROR.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = ChatSession::new(None);
        assert_eq!(session.message_count(), 0);
        assert!(session.thread_id().is_none());
        assert!(session.error().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn clear_resets_everything() {
        let session = ChatSession::new(None);
        session.push_message(MessageRole::User, "hello".into());
        session.record_thread_id("t1".into());
        session.set_error(Some("boom".into()));

        session.clear();

        assert_eq!(session.message_count(), 0);
        assert!(session.thread_id().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn first_thread_id_wins() {
        let session = ChatSession::new(None);
        session.record_thread_id("t1".into());
        session.record_thread_id("t2".into());
        assert_eq!(session.thread_id().as_deref(), Some("t1"));
    }

    #[test]
    fn api_errors_surface_their_message() {
        let err = Error::Api {
            status: 500,
            message: "agent exploded".into(),
        };
        assert_eq!(surface_error(&err), "API error (500): agent exploded");
    }

    #[test]
    fn messages_carry_timestamps() {
        let session = ChatSession::new(None);
        session.push_message(MessageRole::Assistant, "Hi there!".into());
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].timestamp.is_some());
    }
}
