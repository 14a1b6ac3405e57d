//! Telegram Bot API collaborator for lead delivery.
//!
//! DESIGN
//! ======
//! One `sendMessage` call per accepted lead, no retry and no queue. The bot
//! token stays on the server: it is read from the environment at startup and
//! only ever appears inside the request URL. `parse_reply` is pure so the
//! response handling is testable without a network.

pub mod config;
pub mod types;

use std::time::Duration;

use config::TelegramConfig;
pub use types::{LeadNotifier, TelegramError};
use types::{ApiReply, SendMessage};

// =============================================================================
// CLIENT
// =============================================================================

pub struct TelegramClient {
    http: reqwest::Client,
    send_url: String,
    chat_id: String,
}

impl TelegramClient {
    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a secret is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, TelegramError> {
        Self::from_config(&TelegramConfig::from_env()?)
    }

    /// Build a client from a parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &TelegramConfig) -> Result<Self, TelegramError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| TelegramError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, send_url: config.send_message_url(), chat_id: config.chat_id.clone() })
    }

    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }
}

#[async_trait::async_trait]
impl LeadNotifier for TelegramClient {
    async fn notify(&self, text: &str) -> Result<(), TelegramError> {
        let body = SendMessage { chat_id: &self.chat_id, text };

        let response = self
            .http
            .post(&self.send_url)
            .json(&body)
            .send()
            .await
            // reqwest errors embed the URL, which carries the token.
            .map_err(|e| TelegramError::ApiRequest(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TelegramError::ApiRequest(e.without_url().to_string()))?;

        parse_reply(status, &text)
    }
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

/// Interpret a `sendMessage` reply.
///
/// Non-2xx is an [`TelegramError::ApiResponse`]. A 2xx with `ok: false` or an
/// unparseable body is a [`TelegramError::Rejected`].
pub(crate) fn parse_reply(status: u16, body: &str) -> Result<(), TelegramError> {
    if !(200..300).contains(&status) {
        return Err(TelegramError::ApiResponse { status, body: body.to_owned() });
    }
    match serde_json::from_str::<ApiReply>(body) {
        Ok(reply) if reply.ok => Ok(()),
        Ok(reply) => Err(TelegramError::Rejected(reply.description.unwrap_or_else(|| "ok=false".into()))),
        Err(e) => Err(TelegramError::Rejected(format!("unparseable reply: {e}"))),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
