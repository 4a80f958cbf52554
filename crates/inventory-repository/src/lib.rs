//! # Inventory Repository
//!
//! Data access for items and users:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ItemRepository> / Arc<dyn UserRepository>
//! MySqlItemRepository | InMemoryItemRepository
//!   ↓
//! MySQL (SQLx pool)   | process memory
//! ```
//!
//! The in-memory implementations share the trait contracts, including
//! unique-name enforcement, and back both tests and `database.backend = "memory"`.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::*;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
