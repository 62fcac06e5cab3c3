use crate::clients::OrderClient;
use crate::order_actor;
use tracing::{error, info};

/// Runtime owner of the order store.
pub struct OrderSystem {
    pub order_client: OrderClient,
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Spawns the Order actor. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (order_actor, order_client) = order_actor::new();
        let handle = tokio::spawn(order_actor.run(()));

        Self {
            order_client: OrderClient::new(order_client),
            handle,
        }
    }

    pub fn client(&self) -> OrderClient {
        self.order_client.clone()
    }

    /// Drops the client and waits for the actor to drain.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order store...");
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Order store shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
