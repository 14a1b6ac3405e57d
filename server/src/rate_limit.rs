//! In-memory rate limiting for lead submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`.
//! Two limits enforced:
//! - Per-client: 5 leads per 10 minutes (keyed by peer IP, see `client_key`)
//! - Global: 60 leads per 10 minutes (caps outbound Telegram traffic)
//!
//! A slot is taken as a [`Reservation`] before the outbound call and handed
//! back on drop unless the caller commits it, so failed deliveries do not
//! count against the client.
//!
//! TRADE-OFFS
//! ==========
//! State is process-local and lost on restart. That is acceptable for a
//! single-instance storefront; the limiter exists to stop a script from
//! flooding the sales chat, not to meter paying customers.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

const DEFAULT_PER_CLIENT_LIMIT: usize = 5;
const DEFAULT_PER_CLIENT_WINDOW_SECS: u64 = 600;

const DEFAULT_GLOBAL_LIMIT: usize = 60;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 600;

const DEFAULT_TRUSTED_PROXY_HOPS: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub per_client_window: Duration,
    pub global_limit: usize,
    pub global_window: Duration,
    /// Reverse proxies in front of the server. `0` ignores forwarding
    /// headers and keys clients by socket peer.
    pub trusted_proxy_hops: usize,
}

impl RateLimitConfig {
    /// Read limits from `LEAD_RATE_LIMIT_*` and `LEAD_TRUSTED_PROXY_HOPS`,
    /// falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let per_client_window_secs =
            env_parse("LEAD_RATE_LIMIT_PER_CLIENT_WINDOW_SECS", DEFAULT_PER_CLIENT_WINDOW_SECS);
        let global_window_secs = env_parse("LEAD_RATE_LIMIT_GLOBAL_WINDOW_SECS", DEFAULT_GLOBAL_WINDOW_SECS);

        Self {
            per_client_limit: env_parse("LEAD_RATE_LIMIT_PER_CLIENT", DEFAULT_PER_CLIENT_LIMIT),
            per_client_window: Duration::from_secs(per_client_window_secs),
            global_limit: env_parse("LEAD_RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(global_window_secs),
            trusted_proxy_hops: env_parse("LEAD_TRUSTED_PROXY_HOPS", DEFAULT_TRUSTED_PROXY_HOPS),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_client_limit: DEFAULT_PER_CLIENT_LIMIT,
            per_client_window: Duration::from_secs(DEFAULT_PER_CLIENT_WINDOW_SECS),
            global_limit: DEFAULT_GLOBAL_LIMIT,
            global_window: Duration::from_secs(DEFAULT_GLOBAL_WINDOW_SECS),
            trusted_proxy_hops: DEFAULT_TRUSTED_PROXY_HOPS,
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-client rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerClientExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: std::sync::Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-client request timestamps.
    client_requests: HashMap<String, VecDeque<Instant>>,
    /// Global request timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: std::sync::Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Limiter configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(RateLimitConfig::from_env())
    }

    #[must_use]
    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Check both per-client and global limits and take a slot in each.
    ///
    /// # Errors
    ///
    /// Returns which limit was exceeded; nothing is recorded in that case.
    pub fn reserve(&self, client_key: &str) -> Result<Reservation, RateLimitError> {
        self.reserve_at(client_key, Instant::now())
    }

    /// Internal: reserve with explicit timestamp (for testing).
    fn reserve_at(&self, client_key: &str, now: Instant) -> Result<Reservation, RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        // Drop idle clients so the map does not grow with every address seen.
        inner.client_requests.retain(|_, deque| {
            prune_window(deque, now, cfg.per_client_window);
            !deque.is_empty()
        });

        prune_window(&mut inner.global_requests, now, cfg.global_window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        let client_deque = inner.client_requests.entry(client_key.to_owned()).or_default();
        if client_deque.len() >= cfg.per_client_limit {
            return Err(RateLimitError::PerClientExceeded {
                limit: cfg.per_client_limit,
                window_secs: cfg.per_client_window.as_secs(),
            });
        }

        client_deque.push_back(now);
        inner.global_requests.push_back(now);

        Ok(Reservation { limiter: self.clone(), client_key: client_key.to_owned(), at: now, committed: false })
    }

    /// Remove one slot recorded at `at` from the client and global windows.
    fn refund(&self, client_key: &str, at: Instant) {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if let Some(deque) = inner.client_requests.get_mut(client_key) {
            remove_latest(deque, at);
            if deque.is_empty() {
                inner.client_requests.remove(client_key);
            }
        }
        remove_latest(&mut inner.global_requests, at);
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .client_requests
            .len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

// =============================================================================
// RESERVATION
// =============================================================================

/// A slot taken by [`RateLimiter::reserve`]. Dropping it without
/// [`Reservation::commit`] gives the slot back.
#[must_use = "dropping a reservation releases the slot"]
pub struct Reservation {
    limiter: RateLimiter,
    client_key: String,
    at: Instant,
    committed: bool,
}

impl Reservation {
    /// Keep the slot for the rest of the window.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        if !self.committed {
            self.limiter.refund(&self.client_key, self.at);
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

fn remove_latest(deque: &mut VecDeque<Instant>, at: Instant) {
    if let Some(pos) = deque.iter().rposition(|&t| t == at) {
        deque.remove(pos);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
