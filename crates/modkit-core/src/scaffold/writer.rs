//! Idempotent folder and file creation
//!
//! The central contract of the whole tool lives here: `write_file` writes
//! verbatim content only when no file exists at the target path. Existing
//! files are never diffed and never overwritten, so a user's edits to a
//! generated file survive any number of re-installs.

use crate::assets::AssetDb;
use crate::project::Project;
use anyhow::{Context, Result};
use tracing::debug;

/// Create a folder and all missing ancestors. No-op when already present.
///
/// Creating a folder refreshes the asset index for it so files written
/// right afterwards are visible without a full rescan.
pub fn ensure_folder(project: &Project, db: &mut AssetDb, logical: &str) -> Result<()> {
    let path = project.resolve(logical);
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    db.refresh(project, logical);
    debug!(folder = logical, "folder created");
    Ok(())
}

/// Write `content` verbatim at `logical`, only if no file exists there.
///
/// Returns whether a write actually happened. Missing parent folders are
/// created, so call order between `ensure_folder` and `write_file` does not
/// matter.
pub fn write_file(
    project: &Project,
    db: &mut AssetDb,
    logical: &str,
    content: &str,
) -> Result<bool> {
    let path = project.resolve(logical);
    if path.is_file() {
        debug!(file = logical, "file already present, keeping existing content");
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    db.index_file(logical);
    debug!(file = logical, "file written");
    Ok(true)
}

/// Existence probe for a file at a logical path.
pub fn file_exists(project: &Project, logical: &str) -> bool {
    project.resolve(logical).is_file()
}

/// Existence probe for a folder at a logical path.
pub fn folder_exists(project: &Project, logical: &str) -> bool {
    project.resolve(logical).is_dir()
}
