/// A customer order.
///
/// Orders are only ever created by the
/// [`OrderWorkflow`](crate::workflow::OrderWorkflow), always in
/// [`OrderStatus::Pending`]. `items` and `total_price` never change afterwards;
/// an update may only touch `status` and `shipping_address`.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders (a UUID v4 string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// No transition table: any status may be set to any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// One line of an order, with the unit price captured when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub total_price: f64,
    pub shipping_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id: params.user_id,
            items: params.items,
            status: OrderStatus::Pending,
            total_price: params.total_price,
            shipping_address: params.shipping_address,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// What the store needs to persist an order. Built by the workflow once every
/// line has been priced and its stock taken.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
    pub shipping_address: String,
}

/// A requested line in `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub items: Vec<OrderLine>,
    pub shipping_address: String,
}

/// Body of `PUT /api/orders/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub shipping_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_uses_upper_case_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Cancelled).unwrap(),
            json!("CANCELLED")
        );
        let parsed: OrderStatus = serde_json::from_value(json!("SHIPPED")).unwrap();
        assert_eq!(parsed, OrderStatus::Shipped);
        assert!(serde_json::from_value::<OrderStatus>(json!("shipped")).is_err());
    }

    #[test]
    fn order_serializes_in_camel_case() {
        let order = Order::new(
            OrderId::from("o-1"),
            OrderCreate {
                user_id: "u-1".to_string(),
                items: vec![OrderItem {
                    product_id: "1".to_string(),
                    quantity: 2,
                    price: 1000.0,
                }],
                total_price: 2000.0,
                shipping_address: "1 Main St".to_string(),
            },
        );

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["userId"], "u-1");
        assert_eq!(value["totalPrice"], 2000.0);
        assert_eq!(value["status"], "PENDING");
        assert_eq!(value["items"][0]["productId"], "1");
        assert!(value["createdAt"].is_string());
    }
}
