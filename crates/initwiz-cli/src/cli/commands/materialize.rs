//! `initwiz materialize <archive>` – commit stage from an archive on disk.

use crate::cli::host::TerminalHost;
use anyhow::{anyhow, Result};
use initwiz_core::generate_url::sanitize_project_name;
use initwiz_core::materialize::ProjectMaterializer;
use initwiz_core::slot::{DownloadOutcome, PendingDownload};
use std::path::Path;

pub fn run_materialize(archive: &Path, dest: Option<&Path>, name: Option<&str>) -> Result<()> {
    let project_name = match name {
        Some(name) => sanitize_project_name(name),
        None => archive
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(sanitize_project_name)
            .unwrap_or_default(),
    };
    if project_name.is_empty() {
        return Err(anyhow!(
            "cannot derive a project name from {}; pass --name",
            archive.display()
        ));
    }

    let target_dir = match dest {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?.join(&project_name),
    };

    let outcome = Some(DownloadOutcome::Completed(PendingDownload {
        archive_path: archive.to_path_buf(),
        project_name,
    }));

    let host = TerminalHost;
    let project = ProjectMaterializer::new(&host, &host).run(outcome, &target_dir)?;
    println!(
        "Project '{}' ready at {}",
        project.project_name,
        project.root.display()
    );
    Ok(())
}
