//! Shutdown signal handling for long-running server modes.

/// Wait until the process receives Ctrl+C.
pub async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
