use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{FileEntry, FileStore, UploadReceipt};
use crate::logic::errors::TransferError;
use crate::services::upload::{self, BatchEvent, BatchId, BatchSummary};

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch the file list; `epoch` identifies this request
    ListFiles { epoch: u64 },

    /// Upload a batch of local files concurrently
    UploadBatch { batch_id: BatchId, files: Vec<PathBuf> },

    /// Delete one stored file
    DeleteFile { name: String },

    /// Download one stored file into the download directory
    DownloadFile { name: String },
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    FileList {
        epoch: u64,
        files: Result<Vec<FileEntry>, TransferError>,
    },

    UploadSettled {
        batch_id: BatchId,
        file_name: String,
        result: Result<UploadReceipt, TransferError>,
    },

    BatchSettled(BatchSummary),

    DeleteResult {
        name: String,
        result: Result<(), TransferError>,
    },

    DownloadResult {
        name: String,
        result: Result<PathBuf, TransferError>,
    },
}

impl From<BatchEvent> for ApiResponse {
    fn from(event: BatchEvent) -> Self {
        match event {
            BatchEvent::FileSettled {
                batch_id,
                file_name,
                result,
            } => ApiResponse::UploadSettled {
                batch_id,
                file_name,
                result,
            },
            BatchEvent::BatchSettled(summary) => ApiResponse::BatchSettled(summary),
        }
    }
}

/// API service worker that executes requests in the background
///
/// Every request runs on its own task: nothing is queued, deduplicated or
/// rate limited, so overlapping listings really do race and the epoch on
/// each response is what sorts them out.
pub struct ApiService<S: FileStore> {
    store: Arc<S>,
    download_dir: PathBuf,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
}

impl<S: FileStore> ApiService<S> {
    pub fn new(
        store: Arc<S>,
        download_dir: PathBuf,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
    ) -> Self {
        Self {
            store,
            download_dir,
            response_tx,
        }
    }

    /// Spawn a task for one request
    pub fn dispatch(&self, request: ApiRequest) {
        tracing::debug!(?request, "dispatching api request");

        let store = self.store.clone();
        let response_tx = self.response_tx.clone();

        match request {
            ApiRequest::ListFiles { epoch } => {
                tokio::spawn(async move {
                    let files = store.list_files().await;
                    if let Err(e) = &files {
                        tracing::debug!(epoch, error = %e, "listing failed");
                    }
                    let _ = response_tx.send(ApiResponse::FileList { epoch, files });
                });
            }

            ApiRequest::UploadBatch { batch_id, files } => {
                tokio::spawn(Self::forward_batch(store, batch_id, files, response_tx));
            }

            ApiRequest::DeleteFile { name } => {
                tokio::spawn(async move {
                    let result = store.delete_file(&name).await;
                    let _ = response_tx.send(ApiResponse::DeleteResult { name, result });
                });
            }

            ApiRequest::DownloadFile { name } => {
                let download_dir = self.download_dir.clone();
                tokio::spawn(async move {
                    let result = store.download_file(&name, &download_dir).await;
                    let _ = response_tx.send(ApiResponse::DownloadResult { name, result });
                });
            }
        }
    }

    /// Run a batch, forwarding its events as responses as they happen
    async fn forward_batch(
        store: Arc<S>,
        batch_id: BatchId,
        files: Vec<PathBuf>,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
    ) {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let forward = tokio::spawn(async move {
            while let Some(event) = event_rx.recv().await {
                let _ = response_tx.send(ApiResponse::from(event));
            }
        });

        upload::run_batch(store, batch_id, files, event_tx).await;
        let _ = forward.await;
    }
}

/// Spawn the API service worker
pub fn spawn_api_service<S: FileStore>(
    store: Arc<S>,
    download_dir: PathBuf,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let service = ApiService::new(store, download_dir, response_tx);

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }

        tracing::debug!("api request channel closed, service stopping");
    });

    (request_tx, response_rx)
}
