use actor_framework::tracing::setup_tracing;
use product_service::config::ProductServiceConfig;
use product_service::http;
use product_service::lifecycle::{serve, shutdown_signal, ProductSystem};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ProductServiceConfig::from_env()?;
    info!(?config, "Starting product service");

    let system = ProductSystem::new();
    if config.seed {
        system.seed_catalog().await?;
    }

    let listener = TcpListener::bind(config.bind_addr()).await?;
    serve(listener, http::router(system.client()), shutdown_signal()).await?;

    system.shutdown().await?;
    info!("Product service stopped");
    Ok(())
}
