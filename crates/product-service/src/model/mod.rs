//! Pure data structures (DTOs) for the product catalog.

pub mod product;

pub use product::*;
