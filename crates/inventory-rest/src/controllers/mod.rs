//! REST API controllers.

pub mod auth_controller;
pub mod health_controller;
pub mod item_controller;
