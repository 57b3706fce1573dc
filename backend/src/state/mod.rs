// State management module
// Holds the shared application context passed to handlers

pub mod app_state;

pub use app_state::AppState;
