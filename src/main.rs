//! Expense Tracker binary entry point.
//!
//! This binary provides a stdio-based MCP server for expense tracking.
//! All logs go to stderr; stdout is reserved for MCP JSON-RPC messages.

use expense_tracker::config::Config;
use expense_tracker::server::McpServer;

#[tokio::main]
async fn main() {
    // Load configuration before logging so LOG_LEVEL from .env applies
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map_or_else(|_| "info".to_string(), |c| c.log_level.clone());

    // Initialize logging to stderr only (stdout is for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            log_level
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("expense-tracker starting...");

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: database={}, max_connections={}",
        config.database_path,
        config.max_connections
    );

    let server = McpServer::new(config);
    if let Err(e) = server.run_stdio().await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("expense-tracker shutdown complete");
}
