//! API Response Handler
//!
//! Applies responses from the background API service to the model and
//! turns every outcome into a notification.

use std::time::Instant;

use crate::logic::errors::{classify_error, format_error_message, ErrorKind, TransferError};
use crate::logic::file::sanitize_display_name;
use crate::model::{ApplyOutcome, NotificationKind};
use crate::services::api::ApiResponse;
use crate::App;

/// Error text as shown to the user; server messages may carry control characters
fn error_text(error: &TransferError) -> String {
    sanitize_display_name(&format_error_message(error))
}

/// Handle API response from background service
///
/// Response types:
/// - FileList: a listing tagged with the epoch it was requested under
/// - UploadSettled: one file of a batch finished
/// - BatchSettled: every file of a batch finished; schedules one reload
/// - DeleteResult: reloads immediately on success
/// - DownloadResult: reports where the file was saved
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::FileList { epoch, files } => {
            app.end_listing_activity(epoch);

            match files {
                Ok(entries) => {
                    let count = entries.len();
                    match app.model.files.apply_listing(epoch, entries) {
                        ApplyOutcome::Applied => {
                            tracing::debug!(epoch, count, "file list applied");
                            app.clamp_selection();
                        }
                        ApplyOutcome::Stale => {
                            tracing::debug!(
                                epoch,
                                applied = app.model.files.applied_epoch(),
                                "discarding stale file list"
                            );
                        }
                    }
                }
                Err(e) => {
                    let message = error_text(&e);
                    let kind = classify_error(&e);
                    tracing::warn!(epoch, ?kind, error = %message, "file list failed");
                    app.model
                        .notify(format!("Failed to load file list: {}", message), NotificationKind::Error);

                    // Short form for the status bar
                    let status = match kind {
                        ErrorKind::ConnectionRefused => format!("Cannot reach {}", app.base_url),
                        ErrorKind::Timeout => "Server timed out".to_string(),
                        _ => message,
                    };
                    app.model.files.fail_listing(epoch, status);
                }
            }
        }

        ApiResponse::UploadSettled {
            batch_id,
            file_name,
            result,
        } => {
            let display = sanitize_display_name(&file_name);
            match result {
                Ok(receipt) => {
                    let message = if receipt.stored_name == file_name {
                        format!("\"{}\" uploaded", display)
                    } else {
                        format!(
                            "\"{}\" uploaded as \"{}\"",
                            display,
                            sanitize_display_name(&receipt.stored_name)
                        )
                    };
                    app.model.notify(message, NotificationKind::Success);
                }
                Err(e) => {
                    tracing::warn!(batch_id, file = %file_name, error = %e, "upload failed");
                    app.model.notify(
                        format!("\"{}\" upload failed: {}", display, error_text(&e)),
                        NotificationKind::Error,
                    );
                }
            }
        }

        ApiResponse::BatchSettled(summary) => {
            tracing::info!(
                batch_id = summary.batch_id,
                total = summary.total,
                succeeded = summary.succeeded,
                failed = summary.failed,
                "upload batch settled"
            );
            app.end_batch_activity(summary.batch_id);
            app.schedule_reload(Instant::now());
        }

        ApiResponse::DeleteResult { name, result } => {
            app.end_delete_activity(&name);
            let display = sanitize_display_name(&name);

            match result {
                Ok(()) => {
                    app.model
                        .notify(format!("\"{}\" deleted", display), NotificationKind::Success);
                    app.request_reload();
                }
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "delete failed");
                    app.model.notify(
                        format!("Delete failed: {}", error_text(&e)),
                        NotificationKind::Error,
                    );
                }
            }
        }

        ApiResponse::DownloadResult { name, result } => {
            app.end_download_activity(&name);
            let display = sanitize_display_name(&name);

            match result {
                Ok(path) => {
                    app.model.notify(
                        format!("\"{}\" saved to {}", display, path.display()),
                        NotificationKind::Success,
                    );
                }
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "download failed");
                    app.model.notify(
                        format!("\"{}\" download failed: {}", display, error_text(&e)),
                        NotificationKind::Error,
                    );
                }
            }
        }
    }
}
