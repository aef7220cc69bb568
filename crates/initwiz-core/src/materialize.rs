//! Commit-time materialization: archive to registered project.
//!
//! Runs once per wizard commit on the committing thread. The sequence is
//! linear: gate on the download outcome, extract, resolve the effective
//! root, classify the build system, then drive the host. Every fatal error
//! is shown on the dialog surface and returned as a typed error; nothing is
//! retried and no partial cleanup is attempted.

use crate::archive::{self, ArchiveError};
use crate::build_system::{self, BuildSystem};
use crate::host::{DialogSurface, ProjectHost, RefreshMode};
use crate::slot::DownloadOutcome;
use std::path::{Path, PathBuf};
use thiserror::Error;

const ERROR_TITLE: &str = "Error";
const MAVEN_IMPORT_TITLE: &str = "Manual Maven Import Required";
const NO_BUILD_FILE_TITLE: &str = "No Build File Found";

/// Why a commit failed. Each variant has already been shown to the user by
/// the time the caller sees it.
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("no generated archive to import")]
    DownloadNotPerformed,
    #[error("archive download failed: {0}")]
    DownloadFailed(String),
    #[error("downloaded archive does not exist at {}", .0.display())]
    ArchiveMissing(PathBuf),
    #[error("failed to unpack archive {}: {source}", .archive.display())]
    Extract {
        archive: PathBuf,
        #[source]
        source: ArchiveError,
    },
    #[error("failed to inspect extracted project at {}: {source}", .dir.display())]
    Inspect {
        dir: PathBuf,
        #[source]
        source: ArchiveError,
    },
    #[error("project creation failed: {0:#}")]
    CreateProject(anyhow::Error),
    #[error("{0} import failed: {1:#}")]
    Refresh(BuildSystem, anyhow::Error),
}

/// A successfully registered project.
#[derive(Debug, Clone)]
pub struct MaterializedProject {
    pub project_name: String,
    /// Effective project root (extraction target, or its single collapsed
    /// subdirectory).
    pub root: PathBuf,
    /// `None` when no recognized build descriptor was found.
    pub build_system: Option<BuildSystem>,
}

/// Drives one commit against the host seams.
pub struct ProjectMaterializer<'a> {
    host: &'a dyn ProjectHost,
    dialogs: &'a dyn DialogSurface,
}

impl<'a> ProjectMaterializer<'a> {
    pub fn new(host: &'a dyn ProjectHost, dialogs: &'a dyn DialogSurface) -> Self {
        Self { host, dialogs }
    }

    /// Materializes the downloaded archive into `target_dir`.
    ///
    /// `outcome` is whatever the slot held at commit; `target_dir` is the
    /// directory the wizard was pointed at, assumed fresh or empty.
    pub fn run(
        &self,
        outcome: Option<DownloadOutcome>,
        target_dir: &Path,
    ) -> Result<MaterializedProject, MaterializeError> {
        let pending = match outcome {
            Some(DownloadOutcome::Completed(pending)) => pending,
            Some(DownloadOutcome::Failed(message)) => {
                self.dialogs.show_error(
                    ERROR_TITLE,
                    &format!("Project archive download failed: {message}"),
                );
                return Err(MaterializeError::DownloadFailed(message));
            }
            None => {
                self.dialogs.show_error(
                    ERROR_TITLE,
                    "No generated archive to import. Use the Generate button on the starter page first.",
                );
                return Err(MaterializeError::DownloadNotPerformed);
            }
        };

        if !pending.archive_path.is_file() {
            self.dialogs.show_error(
                ERROR_TITLE,
                &format!(
                    "Downloaded archive does not exist at: {}",
                    pending.archive_path.display()
                ),
            );
            return Err(MaterializeError::ArchiveMissing(pending.archive_path));
        }

        tracing::info!(
            "materializing project '{}' from {} into {}",
            pending.project_name,
            pending.archive_path.display(),
            target_dir.display()
        );

        if let Err(source) = archive::extract_zip(&pending.archive_path, target_dir) {
            self.dialogs.show_error(
                ERROR_TITLE,
                &format!("Failed to unpack project archive: {source}"),
            );
            return Err(MaterializeError::Extract {
                archive: pending.archive_path,
                source,
            });
        }

        let root = match archive::effective_root(target_dir) {
            Ok(root) => root,
            Err(source) => {
                self.dialogs.show_error(
                    ERROR_TITLE,
                    &format!("Failed to inspect extracted project: {source}"),
                );
                return Err(MaterializeError::Inspect {
                    dir: target_dir.to_path_buf(),
                    source,
                });
            }
        };

        let build_system = build_system::detect_build_system(&root);

        let module_file = root.join(format!("{}.iml", pending.project_name));
        self.host.set_module_file_path(&module_file);

        if let Err(err) = self.host.create_project(&pending.project_name, &root) {
            self.dialogs
                .show_error(ERROR_TITLE, &format!("Failed to create project: {err:#}"));
            return Err(MaterializeError::CreateProject(err));
        }

        match build_system {
            Some(BuildSystem::Gradle) => {
                tracing::info!(
                    "gradle descriptor found at {}, requesting blocking import",
                    root.display()
                );
                if let Err(err) =
                    self.host
                        .refresh_external_project(BuildSystem::Gradle, &root, RefreshMode::Blocking)
                {
                    self.dialogs.show_error(
                        ERROR_TITLE,
                        &format!("Failed to import Gradle build: {err:#}"),
                    );
                    return Err(MaterializeError::Refresh(BuildSystem::Gradle, err));
                }
            }
            Some(BuildSystem::Maven) => {
                self.dialogs.show_info(
                    MAVEN_IMPORT_TITLE,
                    "Maven project detected.\nImport the pom.xml manually in your IDE (for example via File > Open).",
                );
            }
            None => {
                self.dialogs.show_info(
                    NO_BUILD_FILE_TITLE,
                    "No recognized build file (pom.xml or build.gradle) was found in the project root.",
                );
            }
        }

        tracing::info!(
            "project '{}' materialized at {}",
            pending.project_name,
            root.display()
        );
        Ok(MaterializedProject {
            project_name: pending.project_name,
            root,
            build_system,
        })
    }
}
