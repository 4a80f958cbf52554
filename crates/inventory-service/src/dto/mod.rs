//! Data Transfer Objects (DTOs).

mod auth_dto;
mod item_dto;

pub use auth_dto::*;
pub use item_dto::*;
