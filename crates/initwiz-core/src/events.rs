//! Download lifecycle events for the host's progress UI.
//!
//! The interceptor runs on a background thread while the user keeps browsing,
//! so progress reaches the host through a sink instead of a return value. A
//! wizard host typically maps these to its status label; the CLI prints them.

use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// What happened to an intercepted generate-archive download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadEvent {
    /// The generate request was recognized and the fetch is starting.
    Started { project_name: String },
    /// The archive was saved; the record is already stored when this fires.
    Completed {
        project_name: String,
        archive_path: PathBuf,
    },
    /// The fetch failed; the same message is stored in the record.
    Failed {
        project_name: String,
        message: String,
    },
}

/// Receives download events. Implementations must tolerate being called from
/// a non-UI thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: DownloadEvent);
}

/// Sink that forwards events over an mpsc channel (used by tests and by
/// hosts that marshal onto their own event loop).
pub struct ChannelEventSink {
    tx: Sender<DownloadEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: Sender<DownloadEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: DownloadEvent) {
        // Receiver gone means nobody is watching; that's fine.
        let _ = self.tx.send(event);
    }
}

/// Sink that drops everything, for headless callers.
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn emit(&self, _event: DownloadEvent) {}
}
