#![recursion_limit = "256"]

mod rate_limit;
mod routes;
mod services;
mod state;
mod telegram;

use std::net::SocketAddr;
use std::sync::Arc;

use telegram::LeadNotifier;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize Telegram notifier (non-fatal: leads answer `not_configured` if secrets missing).
    let notifier: Option<Arc<dyn LeadNotifier>> = match telegram::TelegramClient::from_env() {
        Ok(client) => {
            tracing::info!(chat_id = client.chat_id(), "Telegram notifier initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Telegram not configured, order form submissions will be rejected");
            None
        }
    };

    let state = state::AppState::new(notifier, rate_limit::RateLimiter::from_env());

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "tandir storefront listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
