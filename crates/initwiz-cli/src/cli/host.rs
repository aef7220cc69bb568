//! Terminal implementations of the host seams.
//!
//! The CLI has no IDE project model to drive, so host calls become output:
//! dialogs map to stdout/stderr, project registration is reported, and
//! download events turn into progress lines.

use initwiz_core::build_system::BuildSystem;
use initwiz_core::events::{DownloadEvent, EventSink};
use initwiz_core::host::{DialogSurface, ProjectHost, RefreshMode};
use std::path::Path;

pub struct TerminalHost;

impl DialogSurface for TerminalHost {
    fn show_error(&self, title: &str, message: &str) {
        eprintln!("[{title}] {message}");
    }

    fn show_warning(&self, title: &str, message: &str) {
        eprintln!("[{title}] {message}");
    }

    fn show_info(&self, title: &str, message: &str) {
        println!("[{title}] {message}");
    }
}

impl ProjectHost for TerminalHost {
    fn create_project(&self, name: &str, root: &Path) -> anyhow::Result<()> {
        tracing::info!("registering project '{}' at {}", name, root.display());
        println!("Created project '{}' at {}", name, root.display());
        Ok(())
    }

    fn set_module_file_path(&self, path: &Path) {
        tracing::debug!("module file path would be {}", path.display());
    }

    fn refresh_external_project(
        &self,
        system: BuildSystem,
        root: &Path,
        _mode: RefreshMode,
    ) -> anyhow::Result<()> {
        println!(
            "{} project detected at {}; open it in your IDE to finish the import.",
            system,
            root.display()
        );
        Ok(())
    }
}

impl EventSink for TerminalHost {
    fn emit(&self, event: DownloadEvent) {
        match event {
            DownloadEvent::Started { project_name } => {
                println!("Generating and downloading project '{project_name}' archive...");
            }
            DownloadEvent::Completed {
                project_name,
                archive_path,
            } => {
                println!(
                    "Downloaded project '{project_name}' archive to: {}",
                    archive_path.display()
                );
            }
            DownloadEvent::Failed {
                project_name,
                message,
            } => {
                eprintln!("Download of project '{project_name}' failed: {message}");
            }
        }
    }
}
