//! Shared types for the Model
//!
//! These types are used across multiple sub-models and by the renderer and
//! handlers.

use std::time::Instant;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

/// The single visible notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

/// Action a card button performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    Download,
    Delete,
}

/// An action bound to one entry at render time.
///
/// Carries the literal file name, never a display-sanitized or escaped
/// form, so dispatch targets exactly the entry that was drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundAction {
    pub action: CardAction,
    pub file_name: String,
}

impl BoundAction {
    pub fn download(file_name: impl Into<String>) -> Self {
        Self {
            action: CardAction::Download,
            file_name: file_name.into(),
        }
    }

    pub fn delete(file_name: impl Into<String>) -> Self {
        Self {
            action: CardAction::Delete,
            file_name: file_name.into(),
        }
    }
}

/// Identifier of a running operation shown in the activity indicator
pub type ActivityId = u64;

/// A running operation (upload batch, listing, delete, download)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: ActivityId,
    pub label: String,
}

/// State of the upload picker prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadPromptState {
    pub input: String,
}
