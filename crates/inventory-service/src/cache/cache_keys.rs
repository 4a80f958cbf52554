//! Cache key generators for consistent key naming.
//!
//! Keys are unprefixed so they stay compatible with existing cache contents.

use inventory_core::ItemId;

/// Key holding the snapshot of all items.
pub const ITEM_LIST: &str = "item_list";

/// Generate the key for the item list snapshot.
#[must_use]
pub fn item_list() -> String {
    ITEM_LIST.to_string()
}

/// Generate a cache key for a single item by ID.
#[must_use]
pub fn item_by_id(id: ItemId) -> String {
    format!("item_{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_list_key() {
        assert_eq!(item_list(), "item_list");
    }

    #[test]
    fn test_item_by_id_key() {
        assert_eq!(item_by_id(ItemId(1)), "item_1");
        assert_eq!(item_by_id(ItemId(999)), "item_999");
    }
}
