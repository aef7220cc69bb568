//! Starter-archive extraction and project-root resolution.
//!
//! Generator services ship the project as a zip whose entries usually live
//! under a single top-level directory named after the project. Extraction
//! keeps every entry inside the target (entries that would escape it are
//! skipped), and `effective_root` decides which directory the rest of the
//! pipeline treats as the project top level.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::ZipArchive;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Extracts `archive_path` fully into `dest_dir`, creating it if needed.
///
/// Directory entries are recreated, parent directories are created on
/// demand, and unix permission bits are restored when the archive carries
/// them. Entries whose names would resolve outside `dest_dir` are skipped.
pub fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<(), ArchiveError> {
    let file = fs::File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;
    fs::create_dir_all(dest_dir)?;

    let mut extracted = 0usize;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let out_path = match entry.enclosed_name() {
            Some(rel) => dest_dir.join(rel),
            None => {
                tracing::warn!("skipping unsafe archive entry {:?}", entry.name());
                continue;
            }
        };

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out_file = fs::File::create(&out_path)?;
            io::copy(&mut entry, &mut out_file)?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode))?;
            }
        }

        extracted += 1;
    }

    tracing::debug!(
        "extracted {} entries from {} into {}",
        extracted,
        archive_path.display(),
        dest_dir.display()
    );
    Ok(())
}

/// Resolves the directory to treat as the project top level.
///
/// When `extract_dir` contains exactly one entry and that entry is a
/// directory, the archive wrapped the project in a single folder and that
/// folder is the root. Anything else (multiple entries, or a lone file)
/// leaves `extract_dir` itself as the root.
pub fn effective_root(extract_dir: &Path) -> Result<PathBuf, ArchiveError> {
    let entries = fs::read_dir(extract_dir)?.collect::<Result<Vec<_>, _>>()?;
    if entries.len() == 1 && entries[0].file_type()?.is_dir() {
        return Ok(entries[0].path());
    }
    Ok(extract_dir.to_path_buf())
}
