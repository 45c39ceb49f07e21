/// Chat forwarding endpoint
///
/// Accepts a sender name and message text, formats them into one chat line,
/// and forwards the line to the configured Discord webhook.

use crate::config::ConfigStore;
use crate::discord::{self, DiscordNotifier};
use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, Router},
};
use serde::{Deserialize, Serialize};

/// Application state shared across forward requests
///
/// Holds no mutable data: the store reads the config file fresh per request
/// and the notifier is a cheaply cloned HTTP client handle.
#[derive(Clone)]
pub struct AppState {
    /// Webhook URL persistence
    pub store: ConfigStore,
    /// Outbound Discord delivery
    pub notifier: DiscordNotifier,
}

/// Required query parameters for a forward request
#[derive(Debug, Deserialize)]
pub struct ForwardParams {
    /// Chat sender name
    pub sender: String,
    /// Chat message text
    pub message: String,
}

/// Outcome of one forward attempt
///
/// Serializes as `{"status": "forwarded"}` or
/// `{"status": "error", "detail": "..."}`.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ForwardResponse {
    /// Message delivered to the webhook
    Forwarded,
    /// Delivery skipped or failed; detail is human-readable
    Error { detail: String },
}

/// Create the forwarding routes
pub fn create_forward_routes() -> Router<AppState> {
    Router::new().route("/webhook", get(forward_chat))
}

/// Forward one chat line to Discord
///
/// GET /webhook?sender=<string>&message=<string>
///
/// Missing parameters are rejected by the Query extractor before this runs.
/// Handler-level failures still answer 200 with an embedded error payload;
/// callers inspect the `status` field, not the HTTP status code.
async fn forward_chat(
    State(state): State<AppState>,
    Query(params): Query<ForwardParams>,
) -> Json<ForwardResponse> {
    tracing::info!("📥 Forward request from sender: {}", params.sender);

    let webhook_url = state.store.load();
    if !discord::is_valid_webhook_url(&webhook_url) {
        tracing::warn!("❌ No valid webhook URL configured, dropping message");
        return Json(ForwardResponse::Error {
            detail: "Discord webhook not configured correctly.".to_string(),
        });
    }

    let timestamp = chrono::Local::now().format("%H:%M").to_string();
    let content = discord::format_chat_line(&timestamp, &params.sender, &params.message);
    tracing::debug!("📦 Outbound content: {}", content);

    match state.notifier.send(&webhook_url, &content).await {
        Ok(()) => {
            tracing::info!("✅ Message forwarded to Discord");
            Json(ForwardResponse::Forwarded)
        }
        Err(e) => {
            tracing::warn!("❌ Delivery failed: {}", e);
            Json(ForwardResponse::Error {
                detail: e.to_string(),
            })
        }
    }
}
