//! Pure data structures (DTOs) for orders.

pub mod order;

pub use order::*;
