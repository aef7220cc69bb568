//! `initwiz fetch <url>` – download the generated archive only.

use crate::cli::host::TerminalHost;
use anyhow::{anyhow, Result};
use initwiz_core::config::WizardConfig;
use initwiz_core::slot::DownloadOutcome;
use initwiz_core::wizard::WizardFlow;
use std::sync::Arc;

pub fn run_fetch(cfg: &WizardConfig, url: &str) -> Result<()> {
    let flow = WizardFlow::new(cfg, Arc::new(TerminalHost));
    let download = flow.observe_request(url).ok_or_else(|| {
        anyhow!(
            "not a generate request: expected path {} with a name parameter",
            cfg.generate_path
        )
    })?;
    download.wait();

    match flow.slot().take() {
        Some(DownloadOutcome::Completed(pending)) => {
            // Bare path on stdout so the result is easy to script with.
            println!("{}", pending.archive_path.display());
            Ok(())
        }
        Some(DownloadOutcome::Failed(message)) => Err(anyhow!("download failed: {message}")),
        None => Err(anyhow!("download produced no record")),
    }
}
