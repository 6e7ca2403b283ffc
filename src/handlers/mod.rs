//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: API responses from background service
//! - keyboard: User keyboard input
//! - player: Events from the media engine
//!
//! Handlers take &mut App and dispatch to the controllers in src/app/.

pub mod api;
pub mod keyboard;
pub mod player;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
pub use player::handle_media_event;
