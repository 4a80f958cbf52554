//! MySQL repository implementations.

mod item_repository;
mod user_repository;

pub use item_repository::*;
pub use user_repository::*;

use inventory_core::{InventoryError, InventoryResult};

/// Converts an AUTO_INCREMENT id reported by the driver into a signed key.
fn inserted_id(last_insert_id: u64) -> InventoryResult<i64> {
    i64::try_from(last_insert_id)
        .map_err(|_| InventoryError::Internal(format!("Inserted id out of range: {}", last_insert_id)))
}
