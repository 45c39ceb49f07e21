/// Chatrelay: minimal chat-to-Discord webhook relay
///
/// Main entry point. Parses startup options, runs first-run setup when no
/// valid webhook URL is stored, then starts the HTTP server.

use chatrelay::{
    config::{Config, ConfigStore},
    discord,
    server::start_server,
    setup,
};
use clap::Parser;

/// Forwards chat messages from a game server to a Discord webhook
#[derive(Parser, Debug)]
#[command(name = "chatrelay", version, about)]
struct Cli {
    /// Listen address (default 127.0.0.1, env CHATRELAY_HOST)
    #[arg(long)]
    host: Option<String>,

    /// HTTP port (default 8000, env CHATRELAY_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Start the console minimized (Windows only, no-op elsewhere)
    #[arg(long)]
    minimized: bool,
}

/// Application entry point
///
/// The server provides:
/// - Chat forwarding at GET /webhook?sender=...&message=...
/// - Health check at /healthz
#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    setup::print_banner();

    if cli.minimized {
        setup::minimize_console();
    }

    // Env-var defaults with CLI overrides on top
    let mut config = Config::default();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // Ensure a usable webhook URL exists before serving
    let store = ConfigStore::new(&config.storage.config_file);
    if !discord::is_valid_webhook_url(&store.load()) {
        if let Err(e) = setup::prompt_for_webhook(&store) {
            tracing::error!("❌ Setup failed: {:#}", e);
            setup::wait_for_exit();
            return;
        }
    }

    tracing::info!("🚀 Starting chat relay...");
    if let Err(e) = start_server(config).await {
        tracing::error!("❌ {:#}", e);
    }

    setup::wait_for_exit();
}
