//! REST helpers for talking to the site server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submission only makes
//! sense in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Outcomes collapse into [`SubmitError`] so the form can pick one of two
//! user messages: "contact the administrator" when the server has no
//! Telegram credentials, and a generic retry-later message for everything
//! else. Nothing is retried automatically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::LeadRequest;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ERR_NOT_CONFIGURED, LeadResponse};

pub const LEADS_ENDPOINT: &str = "/api/leads";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The server is missing its messaging credentials.
    NotConfigured,
    /// The server rejected or failed to deliver the lead.
    Rejected { status: u16 },
    /// The request never completed.
    Network(String),
}

impl SubmitError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotConfigured => "Telegram sozlamalarida xatolik. Administrator bilan bog'laning.",
            Self::Rejected { .. } | Self::Network(_) => {
                "Xatolik yuz berdi. Iltimos, birozdan so'ng qayta urinib ko'ring."
            }
        }
    }
}

/// Map a response status and optional parsed body to a submission outcome.
#[cfg(any(test, feature = "hydrate"))]
fn classify_response(status: u16, body: Option<&LeadResponse>) -> Result<(), SubmitError> {
    let code = body.and_then(|b| b.error.as_deref());
    if code == Some(ERR_NOT_CONFIGURED) {
        return Err(SubmitError::NotConfigured);
    }
    if (200..300).contains(&status) && body.is_none_or(|b| b.ok) {
        return Ok(());
    }
    Err(SubmitError::Rejected { status })
}

/// Submit a lead via `POST /api/leads`.
///
/// # Errors
///
/// Returns [`SubmitError`] when the request fails, the server rejects the
/// lead, or messaging is not configured.
pub async fn submit_lead(request: &LeadRequest) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LEADS_ENDPOINT)
            .json(request)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.json::<LeadResponse>().await.ok();
        classify_response(status, body.as_ref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SubmitError::Network("not available on server".to_owned()))
    }
}
