//! Build-system classification from descriptor files.
//!
//! The classifier is a closed set: a project is Gradle, Maven, or
//! unrecognized. Gradle descriptors are probed first, so a project carrying
//! both kinds classifies as Gradle.

use std::fmt;
use std::path::Path;

/// Maven build descriptor.
pub const MAVEN_BUILD_FILE: &str = "pom.xml";
/// Gradle build descriptors, either DSL.
pub const GRADLE_BUILD_FILES: [&str; 2] = ["build.gradle", "build.gradle.kts"];

/// Build system recognized in a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildSystem {
    Maven,
    Gradle,
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildSystem::Maven => write!(f, "Maven"),
            BuildSystem::Gradle => write!(f, "Gradle"),
        }
    }
}

/// Classifies the project in `root` by probing for build descriptors.
///
/// Returns `None` when no recognized descriptor is present; the wizard then
/// creates a plain project and tells the user.
pub fn detect_build_system(root: &Path) -> Option<BuildSystem> {
    if GRADLE_BUILD_FILES
        .iter()
        .any(|name| root.join(name).is_file())
    {
        return Some(BuildSystem::Gradle);
    }
    if root.join(MAVEN_BUILD_FILE).is_file() {
        return Some(BuildSystem::Maven);
    }
    None
}
