//! Minimal HTTP wrapper around the agenda.
//!
//! Exposes listing and creation of contacts as JSON over axum. The agenda is
//! shared between requests through an explicit handle; each request holds
//! the lock for exactly one synchronous agenda call.

pub mod handlers;

pub use handlers::{router, AppState, SharedAgenda};

use anyhow::Result;
use std::net::SocketAddr;
use tracing::{info, warn};

/// Serve the HTTP API on `addr` until Ctrl-C.
pub async fn run_server(agenda: SharedAgenda, addr: SocketAddr) -> Result<()> {
    let app = router(AppState { agenda });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server bound on {}", addr);

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("HTTP server shutting down gracefully"),
            Err(e) => {
                // Without a signal handler, run until the process is killed
                warn!(error = %e, "Cannot listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
