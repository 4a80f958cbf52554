//! Item entity.

use crate::ItemId;
use serde::{Deserialize, Serialize};

/// An inventory item as stored and as returned over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Item {
    /// Store-assigned identifier.
    pub id: ItemId,
    /// Unique item name.
    pub name: String,
    /// Free-form description, empty when not provided.
    #[serde(default)]
    pub description: String,
}

impl Item {
    /// Creates an item from its stored parts.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns a copy with name and description replaced.
    #[must_use]
    pub fn with_changes(&self, changes: &NewItem) -> Self {
        Self {
            id: self.id,
            name: changes.name.clone(),
            description: changes.description.clone(),
        }
    }
}

/// The writable fields of an item, used for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl NewItem {
    /// Creates a new item payload.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Attaches a store-assigned id.
    #[must_use]
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
