//! # Order Creation Workflow
//!
//! Turns a [`CreateOrderRequest`] into a stored [`Order`]. Lines are handled
//! one at a time, in request order:
//!
//! 1. fetch the product from the catalog,
//! 2. compare its stock with the requested quantity,
//! 3. add `price * quantity` to the running total,
//! 4. ask the catalog to decrement the stock.
//!
//! The first failing line aborts the whole request and no order is stored.
//! Stock already taken for earlier lines is **not** given back; the abort is
//! logged at `warn` with the affected products. Lines after the failing one
//! are never touched.
//!
//! The workflow runs in the caller's task. Only the final write goes through
//! the order actor, so remote calls never hold up the store.

use crate::clients::{OrderClient, ProductCatalog};
use crate::model::{CreateOrderRequest, Order, OrderCreate, OrderItem, OrderLine};
use crate::order_actor::OrderError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct OrderWorkflow {
    catalog: Arc<dyn ProductCatalog>,
    orders: OrderClient,
}

/// A line whose stock has been taken.
#[derive(Debug, Clone, PartialEq)]
struct TakenStock {
    product_id: String,
    quantity: u32,
}

impl OrderWorkflow {
    pub fn new(catalog: Arc<dyn ProductCatalog>, orders: OrderClient) -> Self {
        Self { catalog, orders }
    }

    #[instrument(skip(self, request), fields(user_id = %request.user_id, lines = request.items.len()))]
    pub async fn place_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        validate_lines(&request.items)?;

        let mut taken = Vec::new();
        let priced = self.take_stock(&request.items, &mut taken).await;

        let result = match priced {
            Ok((items, total_price)) => {
                self.orders
                    .create_order(OrderCreate {
                        user_id: request.user_id,
                        items,
                        total_price,
                        shipping_address: request.shipping_address,
                    })
                    .await
            }
            Err(e) => Err(e),
        };

        match &result {
            Ok(order) => info!(order_id = %order.id, total_price = order.total_price, "Order placed"),
            Err(e) if !taken.is_empty() => {
                warn!(error = %e, ?taken, "Order aborted after stock was decremented; stock not restored")
            }
            Err(e) => warn!(error = %e, "Order rejected"),
        }
        result
    }

    /// Prices and decrements every line, recording each successful decrement in `taken`.
    async fn take_stock(
        &self,
        lines: &[OrderLine],
        taken: &mut Vec<TakenStock>,
    ) -> Result<(Vec<OrderItem>, f64), OrderError> {
        let mut items = Vec::with_capacity(lines.len());
        let mut total_price = 0.0;

        for line in lines {
            let remote = |e: crate::clients::RemoteError| OrderError::RemoteCall {
                product_id: line.product_id.clone(),
                message: e.to_string(),
            };

            let product = self
                .catalog
                .get_product(&line.product_id)
                .await
                .map_err(remote)?
                .ok_or_else(|| OrderError::ProductNotFound(line.product_id.clone()))?;

            if product.quantity < line.quantity {
                return Err(OrderError::InsufficientStock {
                    product_id: line.product_id.clone(),
                    requested: line.quantity,
                    available: product.quantity,
                });
            }

            total_price += product.price * f64::from(line.quantity);

            let decremented = self
                .catalog
                .decrement_stock(&line.product_id, line.quantity)
                .await
                .map_err(remote)?;
            if !decremented {
                return Err(OrderError::StockDecrementRejected(line.product_id.clone()));
            }

            taken.push(TakenStock {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
            });
            items.push(OrderItem {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
                price: product.price,
            });
        }

        Ok((items, total_price))
    }
}

/// Rejects zero-quantity lines before any remote call is made.
fn validate_lines(lines: &[OrderLine]) -> Result<(), OrderError> {
    match lines.iter().find(|line| line.quantity == 0) {
        Some(line) => Err(OrderError::Validation(format!(
            "quantity for product {} must be at least 1",
            line.product_id
        ))),
        None => Ok(()),
    }
}
