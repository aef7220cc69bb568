//! Wizard flow façade: interception, validation, and commit in one place.
//!
//! A host builds one `WizardFlow` per wizard session, forwards browser
//! requests to `observe_request`, gates the Next button with `validate`, and
//! calls `commit` when the user finishes. `reset` re-arms the flow when the
//! step is re-entered.

use crate::config::WizardConfig;
use crate::events::EventSink;
use crate::fetch::FetchOptions;
use crate::host::{DialogSurface, ProjectHost};
use crate::intercept::{InterceptedDownload, RequestInterceptor};
use crate::materialize::{MaterializeError, MaterializedProject, ProjectMaterializer};
use crate::slot::{DownloadOutcome, DownloadSlot};
use std::path::Path;
use std::sync::Arc;

const MUST_GENERATE_TITLE: &str = "Must Generate Project First";

pub struct WizardFlow {
    service_url: String,
    slot: DownloadSlot,
    interceptor: RequestInterceptor,
}

impl WizardFlow {
    pub fn new(config: &WizardConfig, events: Arc<dyn EventSink>) -> Self {
        let slot = DownloadSlot::new();
        let interceptor = RequestInterceptor::new(
            config.generate_path.clone(),
            FetchOptions::from(config),
            slot.clone(),
            events,
        );
        Self {
            service_url: config.service_url.clone(),
            slot,
            interceptor,
        }
    }

    /// Page the host's embedded browser should open.
    pub fn start_url(&self) -> &str {
        &self.service_url
    }

    pub fn slot(&self) -> &DownloadSlot {
        &self.slot
    }

    /// Forward one outbound browser request to the interceptor.
    pub fn observe_request(&self, url: &str) -> Option<InterceptedDownload> {
        self.interceptor.observe(url)
    }

    /// Discard any recorded download. Hosts call this when the wizard step
    /// is entered or re-entered so an earlier visit can't leak its archive.
    pub fn reset(&self) {
        self.slot.clear();
    }

    /// Project name of the waiting download, for prefilling the host's
    /// module-name field. Does not consume the record.
    pub fn suggested_project_name(&self) -> Option<String> {
        match self.slot.snapshot() {
            Some(DownloadOutcome::Completed(pending)) => Some(pending.project_name),
            _ => None,
        }
    }

    /// Leave gate for the step: true when a completed download is waiting,
    /// otherwise shows the must-generate warning and returns false.
    pub fn validate(&self, dialogs: &dyn DialogSurface) -> bool {
        if self.slot.has_completed_download() {
            return true;
        }
        dialogs.show_warning(
            MUST_GENERATE_TITLE,
            "You need to generate the project first. Use the Generate button on the starter page.",
        );
        false
    }

    /// Consume the recorded outcome and materialize the project into
    /// `target_dir`.
    pub fn commit(
        &self,
        target_dir: &Path,
        host: &dyn ProjectHost,
        dialogs: &dyn DialogSurface,
    ) -> Result<MaterializedProject, MaterializeError> {
        let outcome = self.slot.take();
        ProjectMaterializer::new(host, dialogs).run(outcome, target_dir)
    }
}
