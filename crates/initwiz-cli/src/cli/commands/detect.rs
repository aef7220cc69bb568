//! `initwiz detect <dir>` – report the build system of a project directory.

use anyhow::Result;
use initwiz_core::build_system::{detect_build_system, BuildSystem};
use std::path::Path;

pub fn run_detect(dir: &Path) -> Result<()> {
    match detect_build_system(dir) {
        Some(BuildSystem::Gradle) => println!("Gradle (build.gradle or build.gradle.kts)"),
        Some(BuildSystem::Maven) => println!("Maven (pom.xml)"),
        None => println!("No recognized build file."),
    }
    Ok(())
}
