//! # Service Lifecycle
//!
//! [`OrderSystem`] owns the order store. [`serve`] runs the router until the
//! shutdown future resolves; stop the server before shutting the system down,
//! since the router's clients keep the actor alive.

pub mod order_system;

pub use order_system::*;

use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Serves `app` on `listener` until `shutdown` resolves, then drains in-flight requests.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!(error = %e, "Failed to listen for Ctrl-C"),
    }
}
