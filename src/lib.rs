//! filedeck library
//!
//! A terminal client for a remote file store: list, upload, download and
//! delete files over the store's REST API. The binary in `main.rs` wires
//! these modules to a terminal; everything here is usable and testable
//! without one.

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;
