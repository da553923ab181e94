//! External Services
//!
//! This module contains services that talk to the file server in the
//! background:
//! - api: request/response worker between the UI loop and the server
//! - upload: upload batch coordinator

pub mod api;
pub mod upload;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
pub use upload::{BatchEvent, BatchId, BatchSummary};
