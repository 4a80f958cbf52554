//! # Inventory Config
//!
//! Configuration management for Inventory Cloud.
//! Supports layered configuration from TOML files and environment variables.

mod app_config;
mod backend;
mod loader;

pub use app_config::*;
pub use backend::*;
pub use loader::*;
