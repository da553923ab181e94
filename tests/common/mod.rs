//! Shared test fixtures: an in-memory file store and app builders

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use filedeck::api::{FileEntry, FileStore, UploadReceipt};
use filedeck::config::Config;
use filedeck::logic::errors::TransferError;
use filedeck::services::api::{spawn_api_service, ApiRequest, ApiResponse};
use filedeck::App;
use tokio::sync::mpsc;

/// How the fake store answers an upload
#[derive(Debug, Clone)]
pub enum Outcome {
    Ok,
    /// Server answered `success: false` with this message
    Application(String),
    /// No HTTP response at all
    Transport,
    /// The upload task dies without reporting
    Panic,
}

/// In-memory `FileStore` recording every call
#[derive(Default)]
pub struct FakeStore {
    outcomes: Mutex<HashMap<String, (Outcome, Duration)>>,
    listing: Mutex<Vec<FileEntry>>,
    delete_error: Mutex<Option<String>>,
    pub uploads: Mutex<Vec<String>>,
    pub deletes: Mutex<Vec<String>>,
    pub downloads: Mutex<Vec<String>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer uploads of `file_name` with `outcome` after `delay`
    pub fn set_outcome(&self, file_name: &str, outcome: Outcome, delay: Duration) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(file_name.to_string(), (outcome, delay));
    }

    pub fn set_listing(&self, entries: Vec<FileEntry>) {
        *self.listing.lock().unwrap() = entries;
    }

    pub fn fail_deletes_with(&self, message: &str) {
        *self.delete_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

/// A real reqwest error without touching the network
async fn transport_error() -> TransferError {
    match reqwest::Client::new().get("not a url").send().await {
        Err(e) => TransferError::from(e),
        Ok(_) => unreachable!("relative URL cannot be sent"),
    }
}

impl FileStore for FakeStore {
    async fn upload(&self, path: PathBuf) -> Result<UploadReceipt, TransferError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.uploads.lock().unwrap().push(name.clone());

        let (outcome, delay) = self
            .outcomes
            .lock()
            .unwrap()
            .get(&name)
            .cloned()
            .unwrap_or((Outcome::Ok, Duration::ZERO));

        tokio::time::sleep(delay).await;

        match outcome {
            Outcome::Ok => Ok(UploadReceipt {
                local_name: name.clone(),
                stored_name: name,
            }),
            Outcome::Application(message) => Err(TransferError::Application(message)),
            Outcome::Transport => Err(transport_error().await),
            Outcome::Panic => panic!("upload task for {} died", name),
        }
    }

    async fn list_files(&self) -> Result<Vec<FileEntry>, TransferError> {
        Ok(self.listing.lock().unwrap().clone())
    }

    async fn delete_file(&self, name: &str) -> Result<(), TransferError> {
        self.deletes.lock().unwrap().push(name.to_string());
        let error = self.delete_error.lock().unwrap().clone();
        match error {
            Some(message) => Err(TransferError::Application(message)),
            None => {
                self.listing.lock().unwrap().retain(|entry| entry.name != name);
                Ok(())
            }
        }
    }

    async fn download_file(&self, name: &str, dest_dir: &Path) -> Result<PathBuf, TransferError> {
        self.downloads.lock().unwrap().push(name.to_string());
        Ok(dest_dir.join(name))
    }
}

pub fn entry(name: &str, size: u64) -> FileEntry {
    FileEntry {
        name: name.to_string(),
        size,
        modified: "2020-01-01 00:00:00".to_string(),
        file_type: "application/octet-stream".to_string(),
    }
}

/// App wired to bare channels: requests can be inspected, responses injected
pub fn detached_app() -> (
    App,
    mpsc::UnboundedReceiver<ApiRequest>,
    mpsc::UnboundedSender<ApiResponse>,
) {
    let (api_tx, api_rx) = mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::unbounded_channel();
    (App::new(&Config::default(), api_tx, response_rx), api_rx, response_tx)
}

/// App wired to a running API service backed by `store`
pub fn connected_app(store: Arc<FakeStore>, download_dir: PathBuf) -> App {
    let (api_tx, api_rx) = spawn_api_service(store, download_dir);
    App::new(&Config::default(), api_tx, api_rx)
}

/// Wait for the next response and apply it, returning a short tag for it
pub async fn handle_next(app: &mut App) -> &'static str {
    let response = tokio::time::timeout(Duration::from_secs(5), app.api_rx.recv())
        .await
        .expect("timed out waiting for api response")
        .expect("api service stopped");

    let tag = match &response {
        ApiResponse::FileList { .. } => "list",
        ApiResponse::UploadSettled { .. } => "upload",
        ApiResponse::BatchSettled(_) => "batch",
        ApiResponse::DeleteResult { .. } => "delete",
        ApiResponse::DownloadResult { .. } => "download",
    };
    filedeck::handlers::handle_api_response(app, response);
    tag
}

/// Current toast text, if any
pub fn toast_text(app: &App) -> Option<String> {
    app.model.ui.toast.as_ref().map(|toast| toast.message.clone())
}
