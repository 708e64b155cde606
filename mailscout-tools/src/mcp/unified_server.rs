//! MCP server transports.
//!
//! Uses the rmcp library directly rather than reimplementing the protocol:
//!
//! - [`serve_stdio`] runs the server over stdin/stdout and blocks until the
//!   client disconnects; this is the transport MCP-native callers use
//! - [`start_http_server`] serves the streamable-HTTP transport under `/mcp`
//!   with a `/health` endpoint, and returns a handle for graceful shutdown

use std::sync::Arc;

use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use super::server::McpServer;
use crate::search::Searcher;

/// Errors raised while running an MCP transport.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// The requested address could not be bound or resolved.
    #[error("failed to bind {addr}: {message}")]
    Bind {
        /// Address that was requested.
        addr: String,
        /// Underlying failure.
        message: String,
    },

    /// The MCP transport failed to start or terminated abnormally.
    #[error("MCP transport error: {0}")]
    Transport(String),
}

/// Health check endpoint handler.
async fn health_check() -> axum::response::Json<serde_json::Value> {
    axum::response::Json(serde_json::json!({
        "status": "healthy",
        "service": "mailscout-mcp"
    }))
}

/// Run the MCP server over stdio, blocking until the client disconnects.
///
/// stdout belongs to the protocol in this mode; logging must go to stderr.
pub async fn serve_stdio(searcher: Arc<Searcher>) -> Result<(), ServeError> {
    let server = McpServer::new(searcher);

    tracing::info!("starting MCP server in stdio mode");

    let running_service = serve_server(server, stdio())
        .await
        .map_err(|e| ServeError::Transport(e.to_string()))?;

    match running_service.waiting().await {
        Ok(quit_reason) => {
            tracing::info!("MCP stdio server stopped: {:?}", quit_reason);
            Ok(())
        }
        Err(e) => Err(ServeError::Transport(e.to_string())),
    }
}

/// Handle for managing the HTTP MCP server lifecycle.
#[derive(Debug)]
pub struct McpServerHandle {
    url: String,
    port: u16,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl McpServerHandle {
    /// Full connection URL, including the `/mcp` path.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The actually bound port (useful when port 0 was requested).
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Shut the server down gracefully. Idempotent.
    pub async fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            if tx.send(()).is_err() {
                tracing::warn!("server shutdown signal receiver already dropped");
            }
        }
    }
}

/// Start the MCP server with the streamable-HTTP transport on `bind_addr`
/// (e.g. `127.0.0.1:8000`; port 0 picks a free port).
pub async fn start_http_server(
    bind_addr: &str,
    searcher: Arc<Searcher>,
) -> Result<McpServerHandle, ServeError> {
    let server = McpServer::new(searcher);

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new()
        .nest_service("/mcp", service)
        .route("/health", axum::routing::get(health_check));

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| ServeError::Bind {
            addr: bind_addr.to_string(),
            message: e.to_string(),
        })?;
    let local_addr = listener.local_addr().map_err(|e| ServeError::Bind {
        addr: bind_addr.to_string(),
        message: e.to_string(),
    })?;

    let url = format!("http://{local_addr}/mcp");
    tracing::info!("MCP HTTP server ready on {url}");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    tokio::spawn(async move {
        let serve = axum::serve(listener, router).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        if let Err(e) = serve.await {
            tracing::error!("MCP HTTP server error: {e}");
        }
    });

    Ok(McpServerHandle {
        url,
        port: local_addr.port(),
        shutdown_tx: Some(shutdown_tx),
    })
}
