//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! notifications, dialogs, the activity indicator and grid selection.

use std::time::Instant;

use super::types::{Activity, ActivityId, NotificationKind, Toast, UploadPromptState};
use crate::logic::ui::TOAST_DURATION_MS;

/// UI state and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// How long a toast stays visible
    pub toast_duration_ms: u64,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Delete confirmation dialog (literal file name)
    pub confirm_delete: Option<String>,

    /// Upload picker prompt
    pub upload_prompt: Option<UploadPromptState>,

    /// Current notification
    pub toast: Option<Toast>,

    /// Whether the help overlay is showing
    pub show_help: bool,

    // ============================================
    // GRID
    // ============================================
    /// Selected card index
    pub selected: Option<usize>,

    /// First visible grid row
    pub scroll_row: usize,

    /// Number of columns in the last rendered grid
    pub grid_columns: usize,

    // ============================================
    // ACTIVITY
    // ============================================
    /// Running operations, oldest first
    pub activities: Vec<Activity>,

    next_activity_id: ActivityId,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            toast_duration_ms: TOAST_DURATION_MS,
            confirm_delete: None,
            upload_prompt: None,
            toast: None,
            show_help: false,
            selected: None,
            scroll_row: 0,
            grid_columns: 1,
            activities: Vec::new(),
            next_activity_id: 0,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.confirm_delete.is_some() || self.upload_prompt.is_some() || self.show_help
    }

    /// Show a notification, replacing whatever is visible and restarting
    /// the auto-hide timer
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        tracing::debug!(?kind, %message, "notify");
        self.toast = Some(Toast {
            message,
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Check if the toast has outlived its duration
    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast {
            Some(toast) => crate::logic::ui::should_dismiss_toast(
                toast.shown_at.elapsed().as_millis(),
                self.toast_duration_ms,
            ),
            None => false,
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Start showing an operation in the activity indicator
    pub fn begin_activity(&mut self, label: impl Into<String>) -> ActivityId {
        self.next_activity_id += 1;
        let id = self.next_activity_id;
        self.activities.push(Activity {
            id,
            label: label.into(),
        });
        id
    }

    /// Stop showing an operation; unknown ids are ignored
    pub fn end_activity(&mut self, id: ActivityId) {
        self.activities.retain(|activity| activity.id != id);
    }

    /// Label of the newest running operation
    pub fn current_activity(&self) -> Option<&str> {
        self.activities.last().map(|activity| activity.label.as_str())
    }

    pub fn is_busy(&self) -> bool {
        !self.activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert!(!model.vim_mode);
        assert!(!model.should_quit);
        assert!(model.toast.is_none());
        assert_eq!(model.toast_duration_ms, 3000);
    }

    #[test]
    fn test_has_modal() {
        let mut model = UiModel::new(false);
        assert!(!model.has_modal());

        model.confirm_delete = Some("a.txt".to_string());
        assert!(model.has_modal());
    }

    #[test]
    fn test_notify_replaces_previous_message() {
        let mut model = UiModel::new(false);
        model.notify("first", NotificationKind::Success);
        let first_shown = model.toast.as_ref().unwrap().shown_at;

        model.notify("second", NotificationKind::Error);
        let toast = model.toast.as_ref().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, NotificationKind::Error);
        assert!(toast.shown_at >= first_shown);
    }

    #[test]
    fn test_toast_dismissal_uses_duration() {
        let mut model = UiModel::new(false);
        model.notify("hello", NotificationKind::Warning);
        assert!(!model.should_dismiss_toast());

        model.toast_duration_ms = 0;
        assert!(model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast.is_none());
        assert!(!model.should_dismiss_toast());
    }

    #[test]
    fn test_activities_track_newest_label() {
        let mut model = UiModel::new(false);
        assert!(!model.is_busy());

        let upload = model.begin_activity("Uploading 3 files");
        let listing = model.begin_activity("Loading file list");
        assert_eq!(model.current_activity(), Some("Loading file list"));

        model.end_activity(listing);
        assert_eq!(model.current_activity(), Some("Uploading 3 files"));

        model.end_activity(upload);
        assert!(!model.is_busy());

        // Ending twice is harmless
        model.end_activity(upload);
        assert!(!model.is_busy());
    }
}
