//! HTTP client for interacting with the agent backend.

use url::Url;

use crate::api::{
    error::{Error, Result},
    types::{ChatRequest, ChatResponse, ConversationHistory, HealthStatus},
};

/// HTTP client for the agent API.
///
/// Each operation is a single request/response round trip with JSON bodies.
/// There is no retry, timeout policy, or caching; errors propagate unchanged
/// to the caller.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the agent service (e.g., "http://localhost:8000")
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Create a new client with a custom reqwest client.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self { base_url, http })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Send a chat message to the agent.
    ///
    /// Carries the thread ID when continuing an existing conversation; the
    /// server assigns one on the first turn and returns it in the response.
    pub async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse> {
        tracing::debug!(
            thread_id = ?request.thread_id,
            message_length = request.message.len(),
            "Sending chat message"
        );
        let response = self
            .http
            .post(self.url("/api/chat"))
            .json(request)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Fetch a stored conversation by thread ID.
    pub async fn get_conversation(&self, thread_id: &str) -> Result<ConversationHistory> {
        let response = self
            .http
            .get(self.url(&format!("/api/conversation/{thread_id}")))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Delete a stored conversation by thread ID.
    pub async fn delete_conversation(&self, thread_id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/conversation/{thread_id}")))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Check service liveness.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let response = self.http.get(self.url("/health")).send().await?;
        Self::handle_response(response).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
