use crate::clients::ProductClient;
use crate::model::ProductCreate;
use crate::product_actor::{self, ProductError};
use tracing::{error, info};

/// Runtime owner of the product store.
pub struct ProductSystem {
    pub product_client: ProductClient,
    handle: tokio::task::JoinHandle<()>,
}

impl ProductSystem {
    /// Spawns the Product actor. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (product_actor, product_client) = product_actor::new();
        let handle = tokio::spawn(product_actor.run(()));

        Self {
            product_client: ProductClient::new(product_client),
            handle,
        }
    }

    pub fn client(&self) -> ProductClient {
        self.product_client.clone()
    }

    /// Loads the demo catalog. On an empty store the ids come out as "1", "2", "3".
    pub async fn seed_catalog(&self) -> Result<(), ProductError> {
        for (name, price, quantity) in demo_catalog() {
            let product = self
                .product_client
                .create_product(ProductCreate {
                    name: name.to_string(),
                    description: None,
                    price,
                    quantity,
                })
                .await?;
            info!(product_id = %product.id, name, quantity, "Seeded product");
        }
        Ok(())
    }

    /// Drops the client and waits for the actor to drain.
    ///
    /// Any client clone still alive elsewhere keeps the actor running, so stop
    /// the HTTP server before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down product store...");
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Product store shutdown complete.");
        Ok(())
    }
}

impl Default for ProductSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_catalog() -> [(&'static str, f64, u32); 3] {
    [
        ("Laptop", 1000.0, 50),
        ("Mobile Phone", 500.0, 100),
        ("Tablet", 300.0, 75),
    ]
}
