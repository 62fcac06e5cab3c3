//! Custom actions for the Product actor.
//!
//! Stock operations that go beyond CRUD. They run inside the actor loop, so a
//! decrement's check and subtraction can never interleave with another request
//! for the same product.

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    GetStock,
    /// Subtracts the given number of units if that many are in stock.
    ///
    /// Insufficient stock is an outcome, not an error: the action answers
    /// [`ProductActionResult::Decremented(false)`](ProductActionResult::Decremented)
    /// and leaves the product untouched. Zero units is rejected as invalid.
    DecrementStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    Stock(u32),
    Decremented(bool),
}
