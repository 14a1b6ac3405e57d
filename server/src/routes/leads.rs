//! `POST /api/leads` — accept an order form submission.

use std::net::{IpAddr, SocketAddr};

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::{Extensions, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use tandir_ui::net::types::{ERR_INVALID_LEAD, LeadRequest, LeadResponse};

use crate::services::lead::{self, LeadServiceError};
use crate::state::AppState;

const ANONYMOUS_CLIENT: &str = "anonymous";

pub(crate) fn lead_error_to_status(err: &LeadServiceError) -> StatusCode {
    match err {
        LeadServiceError::Invalid(_) => StatusCode::BAD_REQUEST,
        LeadServiceError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        LeadServiceError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        LeadServiceError::Delivery(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Rate-limit key for a request.
///
/// With no trusted proxies the key is the socket peer address and forwarding
/// headers are ignored. Behind `trusted_proxy_hops` proxies the key is the
/// right-most `X-Forwarded-For` entry that no trusted proxy wrote, falling
/// back to `X-Real-IP` and then the peer. Entries that are not IP addresses
/// are ignored.
pub(crate) fn client_key(headers: &HeaderMap, extensions: &Extensions, trusted_proxy_hops: usize) -> String {
    let peer = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    let forwarded = (trusted_proxy_hops > 0)
        .then(|| forwarded_client(headers, trusted_proxy_hops))
        .flatten();

    forwarded
        .or(peer)
        .map_or_else(|| ANONYMOUS_CLIENT.to_owned(), |ip| ip.to_string())
}

fn forwarded_client(headers: &HeaderMap, trusted_proxy_hops: usize) -> Option<IpAddr> {
    let hops: Vec<&str> = headers
        .get_all("x-forwarded-for")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    if hops.is_empty() {
        return headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());
    }

    // The outermost trusted proxy appended the address it saw; everything to
    // its right came from proxies further in.
    let index = hops.len().checked_sub(trusted_proxy_hops)?;
    hops[index].parse().ok()
}

/// Validate and forward a lead to the sales chat.
///
/// Every outcome answers with a [`LeadResponse`] body so the form can map
/// `error` codes to its messages.
pub async fn submit_lead(
    State(state): State<AppState>,
    headers: HeaderMap,
    extensions: Extensions,
    body: Result<Json<LeadRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "malformed lead body");
            return (StatusCode::BAD_REQUEST, Json(LeadResponse::rejected(ERR_INVALID_LEAD))).into_response();
        }
    };

    let client = client_key(&headers, &extensions, state.rate_limiter.config().trusted_proxy_hops);
    match lead::submit(&state, &client, &request).await {
        Ok(()) => (StatusCode::OK, Json(LeadResponse::accepted())).into_response(),
        Err(e) => {
            let status = lead_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(client = %client, error = %e, "lead not delivered");
            }
            (status, Json(LeadResponse::rejected(e.code()))).into_response()
        }
    }
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
