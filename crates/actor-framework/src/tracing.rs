//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber used by the
//! service binaries.
//!
//! - Level filtering through `RUST_LOG`, falling back to `info`.
//! - Compact output with spans inline (`place_order: ...`).
//! - Module paths hidden; log lines carry `entity_type` and id fields instead.
//!
//! ```bash
//! RUST_LOG=info cargo run --bin order-service
//! RUST_LOG=debug cargo run --bin product-service   # full payloads
//! RUST_LOG=order_service=debug,actor_framework=info cargo run --bin order-service
//! ```
//!
//! At `info` a successful order reads roughly:
//!
//! ```text
//! INFO Created entity_type="Order" id=3f0c... size=1
//! INFO place_order{user_id=u1 lines=1}: Order placed order_id=3f0c... total_price=2000.0
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
