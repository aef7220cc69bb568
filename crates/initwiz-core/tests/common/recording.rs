//! Recording implementations of the host seams.

use initwiz_core::build_system::BuildSystem;
use initwiz_core::host::{DialogSurface, ProjectHost, RefreshMode};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// `ProjectHost` that records every call instead of talking to an IDE.
#[derive(Default)]
pub struct RecordingHost {
    pub created: Mutex<Vec<(String, PathBuf)>>,
    pub module_files: Mutex<Vec<PathBuf>>,
    pub refreshes: Mutex<Vec<(BuildSystem, PathBuf, RefreshMode)>>,
}

impl ProjectHost for RecordingHost {
    fn create_project(&self, name: &str, root: &Path) -> anyhow::Result<()> {
        self.created
            .lock()
            .unwrap()
            .push((name.to_string(), root.to_path_buf()));
        Ok(())
    }

    fn set_module_file_path(&self, path: &Path) {
        self.module_files.lock().unwrap().push(path.to_path_buf());
    }

    fn refresh_external_project(
        &self,
        system: BuildSystem,
        root: &Path,
        mode: RefreshMode,
    ) -> anyhow::Result<()> {
        self.refreshes
            .lock()
            .unwrap()
            .push((system, root.to_path_buf(), mode));
        Ok(())
    }
}

/// `DialogSurface` that records `(kind, title, message)` triples.
#[derive(Default)]
pub struct RecordingDialogs {
    pub shown: Mutex<Vec<(&'static str, String, String)>>,
}

impl RecordingDialogs {
    pub fn has(&self, kind: &str, title: &str) -> bool {
        self.shown
            .lock()
            .unwrap()
            .iter()
            .any(|(k, t, _)| *k == kind && t == title)
    }
}

impl DialogSurface for RecordingDialogs {
    fn show_error(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push(("error", title.to_string(), message.to_string()));
    }

    fn show_warning(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push(("warning", title.to_string(), message.to_string()));
    }

    fn show_info(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push(("info", title.to_string(), message.to_string()));
    }
}
