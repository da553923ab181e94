//! File operation methods
//!
//! User actions that reach the server:
//! - Upload a batch of local files (drop, picker, command line)
//! - Delete a stored file after confirmation
//! - Download a stored file into the download directory

use std::path::PathBuf;

use crate::logic::file::sanitize_display_name;
use crate::model::{BoundAction, CardAction, NotificationKind};
use crate::services::api::ApiRequest;
use crate::services::BatchId;
use crate::App;

impl App {
    /// Start one upload batch from local paths.
    ///
    /// Anything that is not a regular file is skipped with a warning. Returns
    /// `None` when nothing is left to upload; no request is sent then.
    pub fn start_upload(&mut self, paths: Vec<PathBuf>) -> Option<BatchId> {
        let (files, skipped): (Vec<PathBuf>, Vec<PathBuf>) =
            paths.into_iter().partition(|path| path.is_file());

        for path in &skipped {
            tracing::debug!(path = %path.display(), "skipping non-file upload source");
            self.model.notify(
                format!(
                    "Skipped {}: not a file",
                    sanitize_display_name(&path.display().to_string())
                ),
                NotificationKind::Warning,
            );
        }

        if files.is_empty() {
            return None;
        }

        self.next_batch_id += 1;
        let batch_id = self.next_batch_id;
        let label = match files.len() {
            1 => "Uploading 1 file".to_string(),
            n => format!("Uploading {} files", n),
        };
        let activity = self.model.ui.begin_activity(label);
        self.batch_activities.insert(batch_id, activity);

        tracing::info!(batch_id, count = files.len(), "starting upload");
        self.send(ApiRequest::UploadBatch { batch_id, files });
        Some(batch_id)
    }

    /// Ask for confirmation before deleting `name`
    pub fn request_delete(&mut self, name: impl Into<String>) {
        self.model.ui.confirm_delete = Some(name.into());
    }

    /// Confirmed: send the delete for the name held by the dialog
    pub fn confirm_delete(&mut self) {
        let Some(name) = self.model.ui.confirm_delete.take() else {
            return;
        };

        let activity = self
            .model
            .ui
            .begin_activity(format!("Deleting {}", sanitize_display_name(&name)));
        self.delete_activities.push((name.clone(), activity));

        tracing::info!(file = %name, "deleting file");
        self.send(ApiRequest::DeleteFile { name });
    }

    /// Declined: close the dialog, nothing else happens
    pub fn cancel_delete(&mut self) {
        self.model.ui.confirm_delete = None;
    }

    /// Start downloading `name` into the download directory
    pub fn download(&mut self, name: impl Into<String>) {
        let name = name.into();
        let display = sanitize_display_name(&name);

        let activity = self.model.ui.begin_activity(format!("Downloading {}", display));
        self.download_activities.push((name.clone(), activity));
        self.model
            .notify(format!("\"{}\" download started", display), NotificationKind::Success);

        tracing::info!(file = %name, "downloading file");
        self.send(ApiRequest::DownloadFile { name });
    }

    /// Run the action a card button is bound to
    pub fn dispatch_action(&mut self, action: BoundAction) {
        match action.action {
            CardAction::Download => self.download(action.file_name),
            CardAction::Delete => self.request_delete(action.file_name),
        }
    }

    /// Upload whatever was typed into the picker prompt
    pub fn submit_upload_prompt(&mut self) -> Option<BatchId> {
        let prompt = self.model.ui.upload_prompt.take()?;
        let paths = crate::logic::paths::parse_dropped_paths(&prompt.input);
        self.start_upload(paths)
    }

    /// Files dropped onto the terminal arrive as pasted text
    pub fn handle_drop(&mut self, text: &str) -> Option<BatchId> {
        let paths = crate::logic::paths::parse_dropped_paths(text);
        if paths.is_empty() {
            return None;
        }
        self.start_upload(paths)
    }
}
