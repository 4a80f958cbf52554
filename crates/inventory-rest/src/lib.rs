//! # Inventory REST
//!
//! REST API layer using Axum for Inventory Cloud.
//! Provides HTTP endpoints for items, authentication, and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
