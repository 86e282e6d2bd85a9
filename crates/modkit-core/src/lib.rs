//! Modkit Core - Idempotent module scaffolding for game projects
//!
//! This library installs modules from a fixed catalog (authentication, ads,
//! build pipeline, audio/haptics, settings/links, remote documents) into a
//! game project: it generates Lua source files, creates configuration
//! assets, and wires named objects into the project's main scene. Every
//! operation is idempotent, so installs are safe to re-run against partial
//! or user-modified project state.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Host Model** - `Project` (path resolution), `AssetDb`
//!   (asset index), `Scene` (scene graph), `TypeRegistry` (instantiable
//!   types)
//! - **Layer 2: Scaffolding Engine** - idempotent writer, deferred task
//!   queue, and the per-module install orchestrator
//! - **Layer 3: CLI/TUI Interface** - optional cliclack-based dashboard
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based dashboard module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use modkit_core::{catalog, scaffold, Editor};
//!
//! let mut editor = Editor::open("/path/to/project")?;
//! let ads = catalog::find(catalog::ModuleId::Ads);
//!
//! // Immediate phase: folders and source files.
//! scaffold::install(&mut editor, ads)?;
//!
//! // Deferred phase: config asset and scene wiring.
//! editor.idle_tick()?;
//! editor.save()?;
//! ```

pub mod assets;
pub mod catalog;
pub mod editor;
pub mod project;
pub mod scaffold;
pub mod scene;
pub mod types;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use assets::{AssetDb, AssetHandle};
pub use catalog::{ModuleId, ModuleManifest};
pub use editor::Editor;
pub use project::Project;
pub use scaffold::{install, install_all, is_installed, DeferredTask, InstallReport};
pub use scene::Scene;
pub use types::TypeRegistry;

#[cfg(feature = "tui")]
pub use tui::run;

/// Tool version - used for module payload compatibility checking
/// Each binary should define its own version, but this provides a fallback
pub const DEFAULT_TOOL_VERSION: &str = "0.1.0";
