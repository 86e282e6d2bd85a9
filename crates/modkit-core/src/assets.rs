//! Asset database: the host's asset index plus config-asset creation
//!
//! The index mirrors what is on disk under the project root. The disk is
//! the source of truth for install state; the index exists so the editor
//! can answer "what do I know about" queries without a full rescan, and is
//! refreshed folder-by-folder as the scaffolder creates them.

use crate::project::Project;
use crate::types::TypeRegistry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::Write;
use tracing::{debug, warn};

/// On-disk representation of a configuration asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDoc {
    /// Registered type name of the settings object
    #[serde(rename = "type")]
    pub type_name: String,

    /// Serialized settings instance
    pub data: serde_yaml::Value,
}

/// Handle to a persisted configuration asset.
///
/// Does not record whether the asset was found or freshly created; callers
/// get a valid handle either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetHandle {
    pub logical_path: String,
    pub type_name: String,
}

/// In-memory index of project files known to the editor
#[derive(Debug, Default)]
pub struct AssetDb {
    indexed: BTreeSet<String>,
}

impl AssetDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescan a project folder and index everything under it.
    ///
    /// Called by the idempotent writer whenever it creates a folder, so
    /// files written afterwards land in an indexed location without a full
    /// project rescan. A refresh of a folder that does not exist yet is a
    /// no-op.
    pub fn refresh(&mut self, project: &Project, logical_folder: &str) {
        let folder = project.resolve(logical_folder);
        if !folder.is_dir() {
            return;
        }

        let mut added = 0usize;
        for entry in walkdir::WalkDir::new(&folder)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if let Ok(rel) = entry.path().strip_prefix(project.root()) {
                let logical = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                if self.indexed.insert(logical) {
                    added += 1;
                }
            }
        }
        debug!(folder = logical_folder, added, "asset index refreshed");
    }

    /// Record a single freshly written file in the index.
    pub fn index_file(&mut self, logical_path: &str) {
        self.indexed.insert(logical_path.to_string());
    }

    /// Whether a logical path has been indexed this session.
    pub fn is_indexed(&self, logical_path: &str) -> bool {
        self.indexed.contains(logical_path)
    }
}

/// Create a configuration asset of `type_name` at `logical_path`.
///
/// Returns `None` when the type cannot be resolved; the caller is expected
/// to re-trigger installation rather than retry here, and no partial asset
/// is ever written in that case. An asset already present at the path is
/// returned as-is, never overwritten.
pub fn create_config_asset(
    project: &Project,
    db: &mut AssetDb,
    registry: &TypeRegistry,
    type_name: &str,
    logical_path: &str,
) -> Result<Option<AssetHandle>> {
    let Some(entry) = registry.resolve(type_name) else {
        warn!(
            type_name,
            logical_path, "config type not registered; skipping asset creation"
        );
        return Ok(None);
    };

    let path = project.resolve(logical_path);
    if path.is_file() {
        debug!(logical_path, "config asset already present");
        db.index_file(logical_path);
        return Ok(Some(AssetHandle {
            logical_path: logical_path.to_string(),
            type_name: type_name.to_string(),
        }));
    }

    let doc = AssetDoc {
        type_name: entry.name.to_string(),
        data: entry.instantiate(),
    };
    let content = serde_yaml::to_string(&doc)
        .with_context(|| format!("Failed to serialize {type_name}"))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    // Write and flush in one go: the asset must be durable before the
    // editor reports the module configured.
    let mut file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create asset: {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write asset: {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to flush asset: {}", path.display()))?;

    db.index_file(logical_path);
    debug!(logical_path, type_name, "config asset created");

    Ok(Some(AssetHandle {
        logical_path: logical_path.to_string(),
        type_name: type_name.to_string(),
    }))
}

/// Load an asset document from disk (user tooling, diagnostics).
pub fn load_asset(project: &Project, logical_path: &str) -> Result<AssetDoc> {
    let path = project.resolve(logical_path);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read asset: {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse asset: {}", path.display()))
}
