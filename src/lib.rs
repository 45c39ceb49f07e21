/// Chatrelay: minimal chat-to-Discord webhook relay
///
/// This library provides the forwarding path (one inbound HTTP endpoint, one
/// outbound webhook POST) plus on-disk persistence of the webhook URL.

// Core configuration and webhook URL persistence
pub mod config;

// Outbound Discord delivery - validation, formatting, webhook POST
pub mod discord;

// HTTP API layer - the inbound forwarding endpoint
pub mod api;

// Server setup and initialization
pub mod server;

// Interactive first-run setup and console helpers
pub mod setup;

// Re-export commonly used types for external consumers
pub use api::forward::ForwardResponse;
pub use config::{Config, ConfigStore};
pub use discord::{DiscordNotifier, WEBHOOK_PREFIX};
pub use server::start_server;
