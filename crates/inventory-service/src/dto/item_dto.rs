//! Item-related DTOs.

use inventory_core::validation::rules::not_blank;
use inventory_core::NewItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Maximum length of an item name.
pub const MAX_NAME_LENGTH: u64 = 255;

/// Maximum length of an item description.
pub const MAX_DESCRIPTION_LENGTH: u64 = 10_000;

/// Body of create and update requests.
///
/// Missing fields deserialize to empty strings so that validation, not the
/// JSON parser, reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "not_blank", message = "Name may not be blank")
    )]
    #[schema(example = "Widget", max_length = 255)]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 10000, message = "Description must be at most 10000 characters"))]
    #[schema(example = "A small widget")]
    pub description: String,
}

impl ItemRequest {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl From<ItemRequest> for NewItem {
    fn from(request: ItemRequest) -> Self {
        NewItem::new(request.name, request.description)
    }
}
