//! Project root handling and logical path resolution

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the project directory
pub const PROJECT_ENV: &str = "MODKIT_PROJECT";

/// Resolve the project directory: an explicit flag wins, then the
/// `MODKIT_PROJECT` environment variable, then the current directory.
pub fn locate_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => dir.to_path_buf(),
        None => match std::env::var(PROJECT_ENV) {
            Ok(value) if !value.is_empty() => PathBuf::from(value),
            _ => std::env::current_dir().context("Failed to read current directory")?,
        },
    };
    if !dir.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", dir.display());
    }
    Ok(dir)
}

/// Optional project manifest (`project.yaml` at the project root)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Display name of the game project
    #[serde(default)]
    pub name: String,

    /// Engine version string the project targets
    #[serde(default)]
    pub engine: String,
}

/// An opened game project.
///
/// Owns the absolute project root. Everything else in the tool addresses
/// files through logical, project-relative, forward-slash paths and resolves
/// them here.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    manifest: ProjectManifest,
}

impl Project {
    /// Open a project at `root`. The directory must already exist; if a
    /// `project.yaml` is present it must parse.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            anyhow::bail!("Project directory does not exist: {}", root.display());
        }

        let manifest_path = root.join("project.yaml");
        let manifest = if manifest_path.is_file() {
            let content = std::fs::read_to_string(&manifest_path)
                .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", manifest_path.display()))?
        } else {
            ProjectManifest::default()
        };

        Ok(Self { root, manifest })
    }

    /// Absolute project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parsed `project.yaml`, or defaults if the project has none.
    pub fn manifest(&self) -> &ProjectManifest {
        &self.manifest
    }

    /// Resolve a logical project-relative path to an absolute path.
    ///
    /// Pure function of the root and the path string. Logical paths always
    /// use forward slashes regardless of platform.
    pub fn resolve(&self, logical: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in logical.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }
}
