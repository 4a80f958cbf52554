//! In-memory repository implementations.

mod item_repository;
mod user_repository;

pub use item_repository::*;
pub use user_repository::*;
