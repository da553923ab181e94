//! Upload batch coordinator
//!
//! Fans one user gesture out into concurrent uploads and reports every file
//! as it settles, followed by exactly one batch settlement.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{FileStore, UploadReceipt};
use crate::logic::errors::TransferError;

/// Identifier of one upload gesture
pub type BatchId = u64;

/// Counters for one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBatch {
    pub id: BatchId,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl UploadBatch {
    pub fn new(id: BatchId, total: usize) -> Self {
        Self {
            id,
            total,
            succeeded: 0,
            failed: 0,
        }
    }

    /// Count one settlement; returns true once every file has settled
    pub fn record(&mut self, success: bool) -> bool {
        if success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        self.succeeded + self.failed >= self.total
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            batch_id: self.id,
            total: self.total,
            succeeded: self.succeeded,
            failed: self.failed,
        }
    }
}

/// Final counts reported once per batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub batch_id: BatchId,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Progress of a batch, in settlement order
#[derive(Debug)]
pub enum BatchEvent {
    /// One file finished, successfully or not
    FileSettled {
        batch_id: BatchId,
        file_name: String,
        result: Result<UploadReceipt, TransferError>,
    },
    /// Every file of the batch has settled
    BatchSettled(BatchSummary),
}

/// Display name of a local path
pub fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Upload `files` concurrently and report each settlement on `events`.
///
/// One task per file, no limit. Settlement order is whatever the network
/// produces; completion is detected by counting. A task that dies before
/// reporting is counted as failed, so the batch always settles.
/// An empty batch is a no-op and emits nothing.
pub async fn run_batch<S: FileStore>(
    store: Arc<S>,
    batch_id: BatchId,
    files: Vec<PathBuf>,
    events: mpsc::UnboundedSender<BatchEvent>,
) -> Option<BatchSummary> {
    if files.is_empty() {
        return None;
    }

    let mut batch = UploadBatch::new(batch_id, files.len());
    let names: Vec<String> = files.iter().map(|path| display_name(path)).collect();
    let mut reported = vec![false; files.len()];

    tracing::debug!(batch_id, total = batch.total, "starting upload batch");

    let (settled_tx, mut settled_rx) = mpsc::unbounded_channel();
    for (index, path) in files.into_iter().enumerate() {
        let store = store.clone();
        let settled_tx = settled_tx.clone();
        tokio::spawn(async move {
            let result = store.upload(path).await;
            let _ = settled_tx.send((index, result));
        });
    }
    // Only the tasks hold senders now; the channel closes once all are done
    drop(settled_tx);

    while let Some((index, result)) = settled_rx.recv().await {
        reported[index] = true;
        batch.record(result.is_ok());

        match &result {
            Ok(receipt) => tracing::debug!(batch_id, file = %names[index], stored = %receipt.stored_name, "upload settled"),
            Err(e) => tracing::debug!(batch_id, file = %names[index], error = %e, "upload failed"),
        }

        let _ = events.send(BatchEvent::FileSettled {
            batch_id,
            file_name: names[index].clone(),
            result,
        });
    }

    for (index, done) in reported.iter().enumerate() {
        if !done {
            batch.record(false);
            let _ = events.send(BatchEvent::FileSettled {
                batch_id,
                file_name: names[index].clone(),
                result: Err(TransferError::Aborted(names[index].clone())),
            });
        }
    }

    let summary = batch.summary();
    tracing::debug!(
        batch_id,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "upload batch settled"
    );
    let _ = events.send(BatchEvent::BatchSettled(summary));

    Some(summary)
}
