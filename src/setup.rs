/// First-run setup and console presentation
///
/// Everything here runs once at startup, outside the request path: banner,
/// interactive webhook prompt, console minimization, and the exit
/// acknowledgment.

use crate::config::ConfigStore;
use crate::discord;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// One-time startup banner
pub fn print_banner() {
    println!(
        r#"
================================================
        Chat Relay -> Discord Forwarder
================================================
"#
    );
}

/// Prompt the operator for a webhook URL until one passes the prefix check,
/// then persist it
///
/// Blocks on stdin. Never invoked during request handling; a bad stored URL
/// at request time is answered with a structured error instead.
pub fn prompt_for_webhook(store: &ConfigStore) -> Result<String> {
    tracing::warn!("⚠️ No valid Discord webhook URL found in config");

    let stdin = io::stdin();
    loop {
        print!("Enter your Discord webhook URL: ");
        io::stdout().flush()?;

        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        let url = line.trim().to_string();

        if discord::is_valid_webhook_url(&url) {
            store.save(&url)?;
            tracing::info!("✅ Webhook URL saved to {}", store.path().display());
            return Ok(url);
        }

        tracing::warn!(
            "❌ Invalid URL. Must start with {}... Please try again",
            discord::WEBHOOK_PREFIX
        );
    }
}

/// Minimize the console window when launched with --minimized
///
/// Only meaningful on Windows, where operators typically start the relay
/// from a shortcut next to the game server.
#[cfg(windows)]
pub fn minimize_console() {
    use winapi::um::wincon::GetConsoleWindow;
    use winapi::um::winuser::{ShowWindow, SW_MINIMIZE};

    unsafe {
        let hwnd = GetConsoleWindow();
        if !hwnd.is_null() {
            ShowWindow(hwnd, SW_MINIMIZE);
        }
    }
}

/// No-op on platforms without a console window to minimize
#[cfg(not(windows))]
pub fn minimize_console() {}

/// Hold the console open until the operator acknowledges
///
/// Runs after any termination, including bind failures, so the error text
/// stays readable in a double-clicked console window.
pub fn wait_for_exit() {
    println!("Press Enter to exit...");
    let _ = io::stdin().read_line(&mut String::new());
}
