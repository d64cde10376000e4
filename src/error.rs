//! Error types for the cafe engine.
//!
//! Every variant is an ordinary, recoverable outcome. The caller decides how
//! to surface it; nothing in the engine panics on well-typed input.

use rust_decimal::Decimal;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type CafeResult<T> = Result<T, CafeError>;

/// Reasons an engine operation can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CafeError {
    /// No item with this name is in the catalog
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Tried to complete an order with nothing pending
    #[error("order queue is empty")]
    QueueEmpty,

    /// No catalog item belongs to the requested category
    #[error("no item in category: {0}")]
    NoMatch(String),

    /// Item names are unique within the catalog
    #[error("item already exists: {0}")]
    DuplicateItem(String),

    /// Prices must be non-negative
    #[error("invalid price: {0}")]
    InvalidPrice(Decimal),

    /// Orders must be for at least one unit
    #[error("order quantity must be positive")]
    InvalidQuantity,
}
