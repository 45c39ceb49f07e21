/// HTTP API Layer
///
/// This module provides the inbound HTTP surface: the single forwarding
/// endpoint that turns a chat line into an outbound webhook call.

// Chat forwarding endpoint (GET /webhook)
pub mod forward;

// Re-export router builder and shared state
pub use forward::{create_forward_routes, AppState};
