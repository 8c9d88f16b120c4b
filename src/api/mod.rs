//! API module
//!
//! Contains HTTP request handlers for the pet registry endpoints

pub mod health;
pub mod pets;
pub mod response;

pub use health::{endpoint_not_found, health_check};
