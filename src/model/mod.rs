//! Application Model
//!
//! This module defines the state owned by the controller. It is organized
//! into focused sub-models:
//!
//! - **FileListModel**: the file list snapshot and reload epochs
//! - **UiModel**: notifications, dialogs, selection, activity indicator
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the API service
//! - Pure accessors: Helper methods are side-effect free

pub mod files;
pub mod types;
pub mod ui;

pub use files::{ApplyOutcome, FileListModel};
pub use types::*;
pub use ui::UiModel;

use crate::api::FileEntry;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Snapshot of the remote file list
    pub files: FileListModel,

    /// UI state and popups
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            files: FileListModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Entry under the grid selection
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.ui.selected.and_then(|idx| self.files.get(idx))
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.ui.notify(message, kind);
    }
}
