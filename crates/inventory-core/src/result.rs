//! Result type aliases for Inventory Cloud.

use crate::InventoryError;

/// A specialized `Result` type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
