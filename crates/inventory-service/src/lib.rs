//! # Inventory Service
//!
//! Business logic for Inventory Cloud: item management behind a
//! read-through cache, user registration/login, and dependency health.

pub mod auth_service;
pub mod cache;
pub mod dto;
pub mod health_service;
pub mod r#impl;
pub mod item_service;

pub use auth_service::*;
pub use cache::*;
pub use dto::*;
pub use health_service::*;
pub use item_service::*;
pub use r#impl::*;
