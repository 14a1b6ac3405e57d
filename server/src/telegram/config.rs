//! Telegram configuration parsed from environment variables.

use std::fmt;

use super::types::TelegramError;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelegramTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base: String,
    pub timeouts: TelegramTimeouts,
}

// The token grants full control of the bot; keep it out of logs.
impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl TelegramConfig {
    /// Build typed Telegram config from environment variables.
    ///
    /// Required:
    /// - `TELEGRAM_BOT_TOKEN`
    /// - `TELEGRAM_CHAT_ID`
    ///
    /// Optional:
    /// - `TELEGRAM_API_BASE`: default `https://api.telegram.org`
    /// - `TELEGRAM_REQUEST_TIMEOUT_SECS`: default 10
    /// - `TELEGRAM_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`TelegramError::MissingVar`] when a secret is unset or blank.
    pub fn from_env() -> Result<Self, TelegramError> {
        let bot_token = required_var("TELEGRAM_BOT_TOKEN")?;
        let chat_id = required_var("TELEGRAM_CHAT_ID")?;
        let api_base = std::env::var("TELEGRAM_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = TelegramTimeouts {
            request_secs: env_parse_u64("TELEGRAM_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("TELEGRAM_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { bot_token, chat_id, api_base, timeouts })
    }

    /// Full `sendMessage` endpoint. Contains the token; never log it.
    #[must_use]
    pub fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }
}

fn required_var(var: &'static str) -> Result<String, TelegramError> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(TelegramError::MissingVar { var })
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
