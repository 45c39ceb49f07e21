/// Outbound Discord webhook delivery
///
/// Owns the webhook URL validation rule, the chat-line formatting, and the
/// single outbound POST that carries a forwarded message.

use anyhow::Result;
use serde_json::json;
use std::time::Duration;

/// Every genuine Discord webhook URL starts with this; nothing else about
/// the URL is validated.
pub const WEBHOOK_PREFIX: &str = "https://discord.com/api/webhooks/";

/// Upper bound on the outbound call so a dead webhook cannot hang an inbound
/// request indefinitely
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Check whether a stored URL is usable as a webhook target
pub fn is_valid_webhook_url(url: &str) -> bool {
    url.starts_with(WEBHOOK_PREFIX)
}

/// Format one chat line for Discord
///
/// Sender rendered in bold, message in an inline code span:
/// `14:07 [**Alice**]: \`Hello\``
pub fn format_chat_line(timestamp: &str, sender: &str, message: &str) -> String {
    format!("{timestamp} [**{sender}**]: `{message}`")
}

/// HTTP client wrapper for posting messages to a Discord webhook
#[derive(Debug, Clone)]
pub struct DiscordNotifier {
    client: reqwest::Client,
}

impl DiscordNotifier {
    /// Create a notifier with a bounded request timeout
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Post one message to the webhook
    ///
    /// A non-2xx response or transport failure is an error. Failed sends are
    /// reported to the caller and dropped, never retried.
    pub async fn send(&self, webhook_url: &str, content: &str) -> Result<()> {
        self.client
            .post(webhook_url)
            .json(&json!({ "content": content }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[derive(Clone)]
    struct MockState {
        received: Arc<Mutex<Vec<Value>>>,
        status: StatusCode,
    }

    async fn mock_webhook(State(state): State<MockState>, Json(body): Json<Value>) -> StatusCode {
        state.received.lock().unwrap().push(body);
        state.status
    }

    /// Spawn a throwaway webhook endpoint on an ephemeral port
    async fn spawn_mock(status: StatusCode) -> (String, Arc<Mutex<Vec<Value>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/api/webhooks/{id}/{token}", post(mock_webhook))
            .with_state(MockState {
                received: Arc::clone(&received),
                status,
            });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service()).await.unwrap();
        });

        (format!("http://{addr}/api/webhooks/123/abc"), received)
    }

    #[test]
    fn prefix_check_accepts_real_webhook_urls() {
        assert!(is_valid_webhook_url("https://discord.com/api/webhooks/123/abc"));
    }

    #[test]
    fn prefix_check_rejects_everything_else() {
        assert!(!is_valid_webhook_url(""));
        assert!(!is_valid_webhook_url("notaurl"));
        assert!(!is_valid_webhook_url("http://discord.com/api/webhooks/123/abc"));
        assert!(!is_valid_webhook_url("https://example.com/api/webhooks/123/abc"));
    }

    #[test]
    fn chat_line_wraps_sender_and_message() {
        assert_eq!(
            format_chat_line("14:07", "Alice", "Hello"),
            "14:07 [**Alice**]: `Hello`"
        );
    }

    #[tokio::test]
    async fn send_posts_content_body_once() {
        let (url, received) = spawn_mock(StatusCode::NO_CONTENT).await;
        let notifier = DiscordNotifier::new().unwrap();

        notifier.send(&url, "14:07 [**Alice**]: `Hello`").await.unwrap();

        let bodies = received.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(
            bodies[0],
            serde_json::json!({ "content": "14:07 [**Alice**]: `Hello`" })
        );
    }

    #[tokio::test]
    async fn send_surfaces_non_2xx_without_retry() {
        let (url, received) = spawn_mock(StatusCode::NOT_FOUND).await;
        let notifier = DiscordNotifier::new().unwrap();

        let result = notifier.send(&url, "line").await;

        assert!(result.is_err());
        assert!(!result.unwrap_err().to_string().is_empty());
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn send_surfaces_connection_errors() {
        // Bind then drop a listener so the port is known to be closed
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let notifier = DiscordNotifier::new().unwrap();
        let result = notifier
            .send(&format!("http://{addr}/api/webhooks/1/x"), "line")
            .await;
        assert!(result.is_err());
    }
}
