use crate::utils::error::{LauncherError, Result};
use axum::Router;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Static HTTP server for the extracted webapp tree. The webapp is mounted
/// under the context path; everything else is a 404.
pub struct WebServer {
    router: Router,
}

impl WebServer {
    pub fn new(context_path: &str, webapp_root: &Path) -> Self {
        let router = Router::new()
            .nest_service(context_path, ServeDir::new(webapp_root))
            .layer(TraceLayer::new_for_http());
        Self { router }
    }

    /// Serve on the given listener until a shutdown signal arrives. Blocks
    /// the calling task for the server's lifetime.
    pub async fn run(self, listener: TcpListener) -> Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| LauncherError::ServerError {
                message: e.to_string(),
            })?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
