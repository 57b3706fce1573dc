//! Barbershop Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod scheduling;
/// Shared application state
pub mod state;
pub mod store;
