//! Lead service: validate, rate-limit, format, and forward to Telegram.
//!
//! DESIGN
//! ======
//! Checks run cheapest first and never call out on failure: validation, then
//! notifier presence, then the rate limiter, then exactly one `notify` call.
//! A misconfigured deployment therefore never burns rate-limit quota, and an
//! invalid lead never reaches the sales chat. The rate-limit slot is only
//! committed once Telegram accepts the message; a failed delivery hands it
//! back so the customer can retry.

use tandir_ui::net::types::{
    ERR_DELIVERY_FAILED, ERR_INVALID_LEAD, ERR_NOT_CONFIGURED, ERR_RATE_LIMITED, Lead, LeadError, LeadRequest,
};
use tracing::{info, warn};

use crate::rate_limit::RateLimitError;
use crate::state::AppState;
use crate::telegram::TelegramError;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error("invalid lead: {0:?}")]
    Invalid(LeadError),
    #[error("lead notifier not configured")]
    NotConfigured,
    #[error("rate limited: {0}")]
    RateLimited(#[from] RateLimitError),
    #[error("delivery failed: {0}")]
    Delivery(#[from] TelegramError),
}

impl LeadServiceError {
    /// Stable code carried in the `/api/leads` response body.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Invalid(_) => ERR_INVALID_LEAD,
            Self::NotConfigured => ERR_NOT_CONFIGURED,
            Self::RateLimited(_) => ERR_RATE_LIMITED,
            Self::Delivery(_) => ERR_DELIVERY_FAILED,
        }
    }
}

// =============================================================================
// MESSAGE FORMAT
// =============================================================================

/// Render a lead as the Telegram message text. Absent optional fields are
/// omitted rather than rendered empty.
#[must_use]
pub fn format_lead_message(lead: &Lead) -> String {
    let mut lines = vec!["🆕 Yangi buyurtma".to_owned()];
    if let Some(label) = &lead.product_label {
        lines.push(format!("📦 Mahsulot: {label}"));
    }
    lines.push(format!("👤 Ism familiya: {}", lead.full_name));
    lines.push(format!("📞 Telefon: {}", lead.phone));
    if let Some(note) = &lead.note {
        lines.push(format!("📝 Izoh: {note}"));
    }
    lines.join("\n")
}

// =============================================================================
// SUBMIT
// =============================================================================

/// Validate and forward one lead.
///
/// # Errors
///
/// See [`LeadServiceError`]; every variant is terminal for this request.
pub async fn submit(state: &AppState, client_key: &str, request: &LeadRequest) -> Result<(), LeadServiceError> {
    let lead = request.validate().map_err(LeadServiceError::Invalid)?;
    let notifier = state.notifier.as_ref().ok_or(LeadServiceError::NotConfigured)?;

    let reservation = match state.rate_limiter.reserve(client_key) {
        Ok(reservation) => reservation,
        Err(e) => {
            warn!(client = client_key, error = %e, "lead rate limited");
            return Err(e.into());
        }
    };

    let text = format_lead_message(&lead);
    notifier.notify(&text).await?;
    reservation.commit();

    info!(
        client = client_key,
        has_product = lead.product_label.is_some(),
        has_note = lead.note.is_some(),
        "lead delivered"
    );
    Ok(())
}

#[cfg(test)]
#[path = "lead_test.rs"]
mod tests;
