//! Service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `item_service.rs`).

pub mod item_service_impl;

pub use item_service_impl::ItemServiceImpl;
