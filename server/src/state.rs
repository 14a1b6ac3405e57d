//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional lead notifier and the lead rate limiter. Nothing is
//! persisted; a restart only resets rate-limit windows.

use std::sync::Arc;

use crate::rate_limit::RateLimiter;
use crate::telegram::LeadNotifier;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Lead destination. `None` if the Telegram secrets are not configured.
    pub notifier: Option<Arc<dyn LeadNotifier>>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(notifier: Option<Arc<dyn LeadNotifier>>, rate_limiter: RateLimiter) -> Self {
        Self { notifier, rate_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::rate_limit::RateLimitConfig;
    use crate::telegram::TelegramError;

    /// Notifier that records messages and answers with a canned result.
    #[derive(Default)]
    pub struct MockNotifier {
        pub sent: Mutex<Vec<String>>,
        pub fail: bool,
    }

    impl MockNotifier {
        #[must_use]
        pub fn failing() -> Self {
            Self { sent: Mutex::new(Vec::new()), fail: true }
        }

        #[must_use]
        pub fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl LeadNotifier for MockNotifier {
        async fn notify(&self, text: &str) -> Result<(), TelegramError> {
            self.sent.lock().unwrap().push(text.to_owned());
            if self.fail {
                return Err(TelegramError::ApiResponse { status: 500, body: "boom".into() });
            }
            Ok(())
        }
    }

    /// `AppState` without a notifier (secrets missing).
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, RateLimiter::default())
    }

    /// `AppState` with a mock notifier and the given limits.
    #[must_use]
    pub fn test_app_state_with_notifier(notifier: Arc<MockNotifier>, limits: RateLimitConfig) -> AppState {
        AppState::new(Some(notifier as Arc<dyn LeadNotifier>), RateLimiter::new(limits))
    }
}
