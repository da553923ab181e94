//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Transfer error taxonomy and classification
//! - file: File categories and name sanitizing
//! - formatting: Size and timestamp display strings
//! - grid: Card views built from a snapshot
//! - layout: Grid geometry and selection movement
//! - paths: Parsing dropped or typed paths
//! - ui: Notification and indicator timing

pub mod errors;
pub mod file;
pub mod formatting;
pub mod grid;
pub mod layout;
pub mod paths;
pub mod ui;
