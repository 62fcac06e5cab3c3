//! Both services on ephemeral ports, the order service calling the product
//! service over real HTTP.

use order_service::clients::HttpProductClient;
use order_service::http::AppState;
use order_service::lifecycle::OrderSystem;
use order_service::workflow::OrderWorkflow;
use product_service::lifecycle::ProductSystem;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_app(app: axum::Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

struct TestCluster {
    products_url: String,
    orders_url: String,
    client: reqwest::Client,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TestCluster {
    /// Product service seeded with Laptop (id "1", 1000.0, 50), Mobile Phone
    /// ("2", 500.0, 100) and Tablet ("3", 300.0, 75).
    async fn spawn() -> Self {
        let products = ProductSystem::new();
        products.seed_catalog().await.unwrap();
        let (products_url, product_handle) =
            spawn_app(product_service::http::router(products.client())).await;

        let orders = OrderSystem::new();
        let catalog = HttpProductClient::new(&products_url).unwrap();
        let state = AppState {
            orders: orders.client(),
            workflow: OrderWorkflow::new(Arc::new(catalog), orders.client()),
        };
        let (orders_url, order_handle) = spawn_app(order_service::http::router(state)).await;

        Self {
            products_url,
            orders_url,
            client: reqwest::Client::new(),
            handles: vec![product_handle, order_handle],
        }
    }

    async fn stock(&self, product_id: &str) -> u64 {
        let body: Value = self
            .client
            .get(format!("{}/api/products/{}/stock", self.products_url, product_id))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        body["stock"].as_u64().unwrap()
    }

    async fn set_stock(&self, product_id: &str, quantity: u32) {
        let res = self
            .client
            .put(format!("{}/api/products/{}", self.products_url, product_id))
            .json(&json!({ "quantity": quantity }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    async fn place_order(&self, user_id: &str, items: Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/orders", self.orders_url))
            .json(&json!({
                "userId": user_id,
                "items": items,
                "shippingAddress": "221B Baker Street",
            }))
            .send()
            .await
            .unwrap()
    }

    async fn orders_of(&self, user_id: &str) -> Vec<Value> {
        self.client
            .get(format!("{}/api/orders/user/{}", self.orders_url, user_id))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

impl Drop for TestCluster {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

#[tokio::test]
async fn ordering_a_laptop_takes_stock_and_stores_a_pending_order() {
    let cluster = TestCluster::spawn().await;

    let res = cluster
        .place_order("alice", json!([{ "productId": "1", "quantity": 2 }]))
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let order: Value = res.json().await.unwrap();

    assert_eq!(order["userId"], "alice");
    assert_eq!(order["status"], "PENDING");
    assert_eq!(order["totalPrice"], 2000.0);
    assert_eq!(order["shippingAddress"], "221B Baker Street");
    assert_eq!(
        order["items"],
        json!([{ "productId": "1", "quantity": 2, "price": 1000.0 }])
    );
    assert_eq!(cluster.stock("1").await, 48);

    let id = order["id"].as_str().unwrap();
    let fetched: Value = cluster
        .client
        .get(format!("{}/api/orders/{}", cluster.orders_url, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, order);
}

#[tokio::test]
async fn insufficient_stock_rejects_the_order() {
    let cluster = TestCluster::spawn().await;
    cluster.set_stock("1", 1).await;

    let res = cluster
        .place_order("bob", json!([{ "productId": "1", "quantity": 5 }]))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Insufficient stock for product 1"));

    assert_eq!(cluster.stock("1").await, 1);
    assert!(cluster.orders_of("bob").await.is_empty());
}

#[tokio::test]
async fn failure_on_a_later_line_keeps_earlier_decrements() {
    let cluster = TestCluster::spawn().await;
    cluster.set_stock("2", 1).await;

    let res = cluster
        .place_order(
            "carol",
            json!([
                { "productId": "1", "quantity": 2 },
                { "productId": "2", "quantity": 5 },
                { "productId": "3", "quantity": 1 },
            ]),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert_eq!(cluster.stock("1").await, 48);
    assert_eq!(cluster.stock("2").await, 1);
    assert_eq!(cluster.stock("3").await, 75);
    assert!(cluster.orders_of("carol").await.is_empty());
}

#[tokio::test]
async fn unknown_product_is_rejected() {
    let cluster = TestCluster::spawn().await;

    let res = cluster
        .place_order("dave", json!([{ "productId": "999", "quantity": 1 }]))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn dot_segment_product_ids_are_unknown() {
    let cluster = TestCluster::spawn().await;

    for id in [".", ".."] {
        let res = cluster
            .place_order("dora", json!([{ "productId": id, "quantity": 1 }]))
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], format!("Product not found: {id}"));
    }

    assert!(cluster.orders_of("dora").await.is_empty());
    assert_eq!(cluster.stock("1").await, 50);
}

#[tokio::test]
async fn malformed_orders_are_rejected_before_touching_stock() {
    let cluster = TestCluster::spawn().await;

    let res = cluster
        .place_order("erin", json!([{ "productId": "1", "quantity": 0 }]))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = cluster
        .client
        .post(format!("{}/api/orders", cluster.orders_url))
        .json(&json!({ "userId": "erin" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert_eq!(cluster.stock("1").await, 50);
}

#[tokio::test]
async fn orders_are_listed_per_user_in_creation_order() {
    let cluster = TestCluster::spawn().await;

    for (user, product) in [("frank", "1"), ("grace", "2"), ("frank", "3")] {
        let res = cluster
            .place_order(user, json!([{ "productId": product, "quantity": 1 }]))
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let frank = cluster.orders_of("frank").await;
    let products: Vec<&str> = frank
        .iter()
        .map(|o| o["items"][0]["productId"].as_str().unwrap())
        .collect();
    assert_eq!(products, vec!["1", "3"]);

    assert!(cluster.orders_of("nobody").await.is_empty());

    let all: Vec<Value> = cluster
        .client
        .get(format!("{}/api/orders", cluster.orders_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn order_update_and_delete() {
    let cluster = TestCluster::spawn().await;

    let order: Value = cluster
        .place_order("heidi", json!([{ "productId": "3", "quantity": 2 }]))
        .await
        .json()
        .await
        .unwrap();
    let id = order["id"].as_str().unwrap();
    let url = format!("{}/api/orders/{}", cluster.orders_url, id);

    let res = cluster
        .client
        .put(&url)
        .json(&json!({ "status": "SHIPPED" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["status"], "SHIPPED");
    assert_eq!(updated["totalPrice"], 600.0);
    assert_eq!(updated["shippingAddress"], "221B Baker Street");

    let res = cluster
        .client
        .put(&url)
        .json(&json!({ "status": "LOST" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = cluster.client.delete(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let ack: Value = res.json().await.unwrap();
    assert_eq!(ack, json!({ "message": "Order deleted successfully", "id": id }));

    let res = cluster.client.get(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = cluster.client.delete(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = cluster
        .client
        .put(&url)
        .json(&json!({ "status": "CANCELLED" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn browser_origins_are_allowed() {
    let cluster = TestCluster::spawn().await;

    let res = cluster
        .client
        .get(format!("{}/api/orders", cluster.orders_url))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("access-control-allow-origin"));

    let preflight = cluster
        .client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/orders", cluster.orders_url),
        )
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();
    assert!(preflight.status().is_success());
    assert!(preflight
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn unreachable_product_service_rejects_the_order() {
    let orders = OrderSystem::new();
    let catalog = HttpProductClient::new("http://127.0.0.1:9").unwrap();
    let state = AppState {
        orders: orders.client(),
        workflow: OrderWorkflow::new(Arc::new(catalog), orders.client()),
    };
    let (orders_url, handle) = spawn_app(order_service::http::router(state)).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/orders", orders_url))
        .json(&json!({
            "userId": "ivan",
            "items": [{ "productId": "1", "quantity": 1 }],
            "shippingAddress": "nowhere",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to process product 1"));

    handle.abort();
}
