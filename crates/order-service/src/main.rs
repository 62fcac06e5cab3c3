use actor_framework::tracing::setup_tracing;
use order_service::clients::HttpProductClient;
use order_service::config::OrderServiceConfig;
use order_service::http::{self, AppState};
use order_service::lifecycle::{serve, shutdown_signal, OrderSystem};
use order_service::workflow::OrderWorkflow;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = OrderServiceConfig::from_env()?;
    info!(?config, "Starting order service");

    let catalog = HttpProductClient::new(&config.product_service_url)?;
    let system = OrderSystem::new();
    let state = AppState {
        orders: system.client(),
        workflow: OrderWorkflow::new(Arc::new(catalog), system.client()),
    };

    let listener = TcpListener::bind(config.bind_addr()).await?;
    serve(listener, http::router(state), shutdown_signal()).await?;

    system.shutdown().await?;
    info!("Order service stopped");
    Ok(())
}
