//! Pending-download record: a single-assignment outcome slot.
//!
//! The interceptor's worker thread stores exactly one outcome per download.
//! Wizard validation peeks at the slot; commit consumes it. A later download
//! overwrites whatever is there, success or failure, so the record can never
//! silently point at a stale archive.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// A completed archive download waiting for wizard commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDownload {
    /// Path of the downloaded `<name>.zip` inside its fresh temp directory.
    pub archive_path: PathBuf,
    /// Project name derived from the generate request.
    pub project_name: String,
}

/// Result of the most recent intercepted download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The archive was fetched and renamed into place.
    Completed(PendingDownload),
    /// The fetch failed; the message is shown to the user at commit.
    Failed(String),
}

/// Cloneable handle to the shared outcome slot. One side is held by the
/// interceptor's worker, the other by the wizard on the UI thread.
#[derive(Clone, Default)]
pub struct DownloadSlot {
    inner: Arc<RwLock<Option<DownloadOutcome>>>,
}

impl DownloadSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an outcome, replacing any unconsumed previous one.
    pub fn store(&self, outcome: DownloadOutcome) {
        *self.inner.write().unwrap() = Some(outcome);
    }

    /// Consume the outcome. Commit calls this exactly once per attempt.
    pub fn take(&self) -> Option<DownloadOutcome> {
        self.inner.write().unwrap().take()
    }

    /// Peek at the outcome without consuming it.
    pub fn snapshot(&self) -> Option<DownloadOutcome> {
        self.inner.read().unwrap().clone()
    }

    /// Discard any stored outcome (wizard step re-entry).
    pub fn clear(&self) {
        *self.inner.write().unwrap() = None;
    }

    /// True when a successful download is waiting to be committed.
    pub fn has_completed_download(&self) -> bool {
        matches!(
            self.inner.read().unwrap().as_ref(),
            Some(DownloadOutcome::Completed(_))
        )
    }
}
