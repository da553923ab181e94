//! File List Model
//!
//! Holds the snapshot of the last applied listing together with the reload
//! epoch bookkeeping that keeps late responses from overwriting newer ones.

use crate::api::FileEntry;

/// Outcome of offering a listing response to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The snapshot was replaced
    Applied,
    /// A response for a newer request is already displayed
    Stale,
}

/// File listing state
#[derive(Clone, Debug, Default)]
pub struct FileListModel {
    /// Entries of the last applied listing, in server order
    snapshot: Vec<FileEntry>,

    /// Epoch handed to the most recently issued listing request
    issued_epoch: u64,

    /// Epoch of the listing currently in `snapshot` (0 = nothing loaded yet)
    applied_epoch: u64,

    /// Whether any listing has been applied
    loaded: bool,

    /// Error of the newest failed listing, cleared by the next applied one
    last_error: Option<String>,
}

impl FileListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, read-only
    pub fn snapshot(&self) -> &[FileEntry] {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Whether a listing has ever been applied
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.snapshot.get(index)
    }

    /// Allocate the epoch for a new listing request
    pub fn begin_reload(&mut self) -> u64 {
        self.issued_epoch += 1;
        self.issued_epoch
    }

    pub fn issued_epoch(&self) -> u64 {
        self.issued_epoch
    }

    pub fn applied_epoch(&self) -> u64 {
        self.applied_epoch
    }

    /// Replace the snapshot with a listing fetched under `epoch`.
    ///
    /// Responses resolve in network order, not issue order. A response is
    /// applied only if it was issued after the one currently displayed.
    pub fn apply_listing(&mut self, epoch: u64, entries: Vec<FileEntry>) -> ApplyOutcome {
        if epoch <= self.applied_epoch {
            return ApplyOutcome::Stale;
        }

        self.snapshot = entries;
        self.applied_epoch = epoch;
        self.loaded = true;
        self.last_error = None;
        ApplyOutcome::Applied
    }

    /// Record that the listing for `epoch` failed.
    ///
    /// The snapshot stays as it is. The epoch is not marked applied, so a
    /// slower successful response from an older request can still land.
    /// Failures older than the displayed listing are ignored.
    pub fn fail_listing(&mut self, epoch: u64, message: String) {
        if epoch > self.applied_epoch {
            self.last_error = Some(message);
        }
    }

    /// Error of the newest failed listing newer than the snapshot
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            size: 1,
            modified: "2025-01-01 00:00:00".to_string(),
            file_type: "text/plain".to_string(),
        }
    }

    #[test]
    fn test_new_model_is_empty_and_unloaded() {
        let model = FileListModel::new();
        assert!(model.is_empty());
        assert!(!model.is_loaded());
        assert_eq!(model.applied_epoch(), 0);
    }

    #[test]
    fn test_epochs_increase() {
        let mut model = FileListModel::new();
        assert_eq!(model.begin_reload(), 1);
        assert_eq!(model.begin_reload(), 2);
        assert_eq!(model.issued_epoch(), 2);
        assert_eq!(model.applied_epoch(), 0);
    }

    #[test]
    fn test_apply_replaces_wholesale() {
        let mut model = FileListModel::new();
        let e1 = model.begin_reload();
        model.apply_listing(e1, vec![entry("a"), entry("b")]);
        let e2 = model.begin_reload();
        model.apply_listing(e2, vec![entry("c")]);

        assert_eq!(model.len(), 1);
        assert_eq!(model.snapshot()[0].name, "c");
        assert_eq!(model.applied_epoch(), e2);
    }

    #[test]
    fn test_late_older_response_is_discarded() {
        let mut model = FileListModel::new();
        let older = model.begin_reload();
        let newer = model.begin_reload();

        assert_eq!(model.apply_listing(newer, vec![entry("new")]), ApplyOutcome::Applied);
        assert_eq!(model.apply_listing(older, vec![entry("old")]), ApplyOutcome::Stale);
        assert_eq!(model.snapshot()[0].name, "new");
    }

    #[test]
    fn test_older_response_first_is_applied_then_replaced() {
        let mut model = FileListModel::new();
        let older = model.begin_reload();
        let newer = model.begin_reload();

        assert_eq!(model.apply_listing(older, vec![entry("old")]), ApplyOutcome::Applied);
        assert_eq!(model.applied_epoch(), older);
        assert_eq!(model.apply_listing(newer, vec![entry("new")]), ApplyOutcome::Applied);
        assert_eq!(model.snapshot()[0].name, "new");
    }

    #[test]
    fn test_duplicate_epoch_is_stale() {
        let mut model = FileListModel::new();
        let epoch = model.begin_reload();
        model.apply_listing(epoch, vec![entry("a")]);
        assert_eq!(model.apply_listing(epoch, vec![]), ApplyOutcome::Stale);
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_failure_keeps_snapshot() {
        let mut model = FileListModel::new();
        let e1 = model.begin_reload();
        model.apply_listing(e1, vec![entry("a")]);
        let e2 = model.begin_reload();
        model.fail_listing(e2, "connection refused".to_string());
        assert_eq!(model.snapshot()[0].name, "a");
        assert_eq!(model.last_error(), Some("connection refused"));

        let e3 = model.begin_reload();
        model.apply_listing(e3, vec![entry("b")]);
        assert!(model.last_error().is_none());
    }

    #[test]
    fn test_failure_older_than_snapshot_is_ignored() {
        let mut model = FileListModel::new();
        let older = model.begin_reload();
        let newer = model.begin_reload();
        model.apply_listing(newer, vec![entry("a")]);
        model.fail_listing(older, "timed out".to_string());
        assert!(model.last_error().is_none());
    }
}
