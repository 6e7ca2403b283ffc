//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: HTTP request worker
//! - player: mpv-backed media engine

pub mod api;
pub mod player;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
pub use player::{MediaCommand, MediaEvent};
