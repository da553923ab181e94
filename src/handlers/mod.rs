//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: API responses from the background service
//! - events: Terminal events (mouse clicks, pasted/dropped files)
//! - keyboard: User keyboard input
//!
//! Handlers take `&mut App`, update the model and send requests; none of
//! them block on the network.

pub mod api;
pub mod events;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use events::handle_event;
pub use keyboard::handle_key;
