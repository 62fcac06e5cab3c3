//! # Service Lifecycle
//!
//! [`ProductSystem`] owns the product store: it starts the actor, hands out
//! clients, loads the demo catalog and stops the actor again. [`serve`] runs
//! the HTTP router until a shutdown signal arrives.
//!
//! Shutdown order matters. The router holds clones of the [`ProductClient`],
//! so the server has to finish first; only then does dropping the system's own
//! client close the actor's channel.
//!
//! ```rust,ignore
//! let system = ProductSystem::new();
//! system.seed_catalog().await?;
//! serve(listener, http::router(system.client()), shutdown_signal()).await?;
//! system.shutdown().await?;
//! ```

pub mod product_system;

pub use product_system::*;

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
