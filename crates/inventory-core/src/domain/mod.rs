//! Domain entities.

mod item;
mod user;

pub use item::*;
pub use user::*;
