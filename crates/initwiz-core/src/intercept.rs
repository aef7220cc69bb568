//! Browser-request interception and the background archive download.
//!
//! `observe` is called for every outbound request URL the embedded browser
//! emits. Non-generate requests pass through untouched. A generate request
//! kicks off one worker thread that fetches the archive into a fresh temp
//! directory and stores the outcome in the shared slot; the Completed event
//! fires only after the record is stored.

use crate::events::{DownloadEvent, EventSink};
use crate::fetch::{self, FetchError, FetchOptions};
use crate::generate_url::{self, GenerateRequest};
use crate::slot::{DownloadOutcome, DownloadSlot, PendingDownload};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Handle for one intercepted download. A wizard host drops it and listens
/// for events instead; tests and the CLI `wait` on it.
pub struct InterceptedDownload {
    project_name: String,
    handle: JoinHandle<()>,
}

impl InterceptedDownload {
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Block until the worker has stored its outcome.
    pub fn wait(self) {
        if self.handle.join().is_err() {
            tracing::error!("download worker panicked");
        }
    }
}

/// Watches request URLs for the generate endpoint and owns the download side
/// of the pending-download slot.
pub struct RequestInterceptor {
    generate_path: String,
    options: FetchOptions,
    slot: DownloadSlot,
    events: Arc<dyn EventSink>,
}

impl RequestInterceptor {
    pub fn new(
        generate_path: impl Into<String>,
        options: FetchOptions,
        slot: DownloadSlot,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            generate_path: generate_path.into(),
            options,
            slot,
            events,
        }
    }

    /// Inspect one outbound request URL.
    ///
    /// Returns `None` for everything that is not a generate request; those
    /// stay with the browser and the slot is left untouched. For a generate
    /// request the interceptor takes over the download and returns a handle
    /// naming the project.
    pub fn observe(&self, url: &str) -> Option<InterceptedDownload> {
        let request = generate_url::match_generate_request(url, &self.generate_path)?;
        let project_name = request.project_name.clone();
        tracing::info!(
            "intercepted generate request for project '{}'",
            project_name
        );
        self.events.emit(DownloadEvent::Started {
            project_name: project_name.clone(),
        });

        let options = self.options.clone();
        let slot = self.slot.clone();
        let events = Arc::clone(&self.events);
        let handle = std::thread::spawn(move || run_download(request, options, slot, events));

        Some(InterceptedDownload {
            project_name,
            handle,
        })
    }
}

/// Worker body: temp dir, fetch, store the outcome, then signal.
fn run_download(
    request: GenerateRequest,
    options: FetchOptions,
    slot: DownloadSlot,
    events: Arc<dyn EventSink>,
) {
    match download_archive(&request, &options) {
        Ok(pending) => {
            tracing::info!(
                "downloaded project '{}' archive to {}",
                pending.project_name,
                pending.archive_path.display()
            );
            let project_name = pending.project_name.clone();
            let archive_path = pending.archive_path.clone();
            // Store before signaling so a host reacting to Completed always
            // sees the record.
            slot.store(DownloadOutcome::Completed(pending));
            events.emit(DownloadEvent::Completed {
                project_name,
                archive_path,
            });
        }
        Err(err) => {
            tracing::warn!(
                "download for project '{}' failed: {}",
                request.project_name,
                err
            );
            let message = err.to_string();
            slot.store(DownloadOutcome::Failed(message.clone()));
            events.emit(DownloadEvent::Failed {
                project_name: request.project_name,
                message,
            });
        }
    }
}

fn download_archive(
    request: &GenerateRequest,
    options: &FetchOptions,
) -> Result<PendingDownload, FetchError> {
    let temp_dir = tempfile::Builder::new().prefix("initwiz-").tempdir()?;
    // The archive must outlive this worker, so hand the directory over to
    // the record instead of letting the guard delete it.
    let temp_dir = temp_dir.keep();
    let archive_path = temp_dir.join(request.archive_file_name());
    fetch::fetch_archive(&request.url, &archive_path, options)?;
    Ok(PendingDownload {
        archive_path,
        project_name: request.project_name.clone(),
    })
}
