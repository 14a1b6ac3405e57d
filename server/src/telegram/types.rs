//! Telegram notifier errors and the notifier trait.

use serde::Deserialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while configuring or calling the Telegram Bot API.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// A required deployment secret is not set.
    #[error("missing config: env var {var} not set")]
    MissingVar { var: &'static str },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to Telegram failed (connect, timeout, body read).
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// Telegram returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// Telegram answered 200 but reported `ok: false`.
    #[error("API rejected message: {0}")]
    Rejected(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, serde::Serialize)]
pub(crate) struct SendMessage<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiReply {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// NOTIFIER TRAIT
// =============================================================================

/// Destination for formatted lead messages. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LeadNotifier: Send + Sync {
    /// Deliver one pre-formatted message.
    ///
    /// # Errors
    ///
    /// Returns a [`TelegramError`] if the request fails or the API rejects it.
    async fn notify(&self, text: &str) -> Result<(), TelegramError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
