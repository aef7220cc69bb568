//! Host seams: the narrow interfaces the wizard needs from its IDE.
//!
//! The pipeline never talks to a concrete IDE. It drives these traits; an
//! IDE plugin implements them against its project model and dialogs, and the
//! tests implement them with recorders.

use crate::build_system::BuildSystem;
use anyhow::Result;
use std::path::Path;

/// How an external-build import runs relative to the committing thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Block the committing thread until the import finishes.
    Blocking,
    /// Fire and forget; the host schedules the import.
    Background,
}

/// Project-model operations the materializer drives.
pub trait ProjectHost {
    /// Register a project named `name` rooted at `root`.
    fn create_project(&self, name: &str, root: &Path) -> Result<()>;

    /// Tell the host where the module metadata file for the new project
    /// should live. Called before `create_project`.
    fn set_module_file_path(&self, path: &Path);

    /// Hand a recognized build-system project to the host's external
    /// importer (e.g. its Gradle integration).
    fn refresh_external_project(
        &self,
        system: BuildSystem,
        root: &Path,
        mode: RefreshMode,
    ) -> Result<()>;
}

/// Modal user notices shown by the wizard.
pub trait DialogSurface {
    fn show_error(&self, title: &str, message: &str);
    fn show_warning(&self, title: &str, message: &str);
    fn show_info(&self, title: &str, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl DialogSurface for Silent {
        fn show_error(&self, _title: &str, _message: &str) {}
        fn show_warning(&self, _title: &str, _message: &str) {}
        fn show_info(&self, _title: &str, _message: &str) {}
    }

    #[test]
    fn dialog_surface_usable_as_trait_object() {
        let dialogs: &dyn DialogSurface = &Silent;
        dialogs.show_info("Manual Maven Import Required", "Maven project detected.");
    }
}
