//! Pet Registry Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
/// Application state management
///
/// Holds the pet collection and the identifier counter.
pub mod state;
