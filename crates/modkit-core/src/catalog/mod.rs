//! Static module catalog
//!
//! Each module is an immutable manifest: the folders and source files it
//! scaffolds, the configuration asset it creates, and the scene objects it
//! wires. Manifests are data; the install orchestrator is the only code
//! that executes them.

mod ads;
mod audio;
mod auth;
mod build;
mod docs;
mod links;

use crate::types::TypeRegistry;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable identifier of a catalog module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleId {
    Auth,
    Ads,
    Build,
    Audio,
    Links,
    Docs,
}

impl ModuleId {
    pub const ALL: [ModuleId; 6] = [
        ModuleId::Auth,
        ModuleId::Ads,
        ModuleId::Build,
        ModuleId::Audio,
        ModuleId::Links,
        ModuleId::Docs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Auth => "auth",
            ModuleId::Ads => "ads",
            ModuleId::Build => "build",
            ModuleId::Audio => "audio",
            ModuleId::Links => "links",
            ModuleId::Docs => "docs",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unknown module name on the command line
#[derive(Debug, Error)]
#[error("unknown module '{0}'; available modules: auth, ads, build, audio, links, docs")]
pub struct UnknownModule(String);

impl FromStr for ModuleId {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auth" => Ok(ModuleId::Auth),
            "ads" => Ok(ModuleId::Ads),
            "build" => Ok(ModuleId::Build),
            "audio" => Ok(ModuleId::Audio),
            "links" => Ok(ModuleId::Links),
            "docs" => Ok(ModuleId::Docs),
            other => Err(UnknownModule(other.to_string())),
        }
    }
}

/// A source file template: logical path plus verbatim UTF-8 content
#[derive(Debug, Clone, Copy)]
pub struct SourceTemplate {
    pub path: &'static str,
    pub content: &'static str,
}

/// Configuration asset a module creates during the deferred phase
#[derive(Debug, Clone, Copy)]
pub struct AssetSpec {
    pub type_name: &'static str,
    pub logical_path: &'static str,
}

/// Scene wiring a module performs during the deferred phase
#[derive(Debug, Clone, Copy)]
pub enum SceneSpec {
    /// Visual separator object, no behavior
    Marker { label: &'static str },
    /// Root object carrying one behavior component
    Manager {
        object: &'static str,
        component: &'static str,
    },
}

/// Immutable descriptor of one installable module
#[derive(Debug, Clone, Copy)]
pub struct ModuleManifest {
    pub id: ModuleId,
    pub name: &'static str,
    pub description: &'static str,

    /// Semver version of the template payload, checked against the tool
    pub version: &'static str,
    pub docs_url: &'static str,

    /// Folder the module's generated sources live in
    pub folder: &'static str,

    /// Source templates; the first entry is the primary file whose
    /// existence defines "installed"
    pub files: &'static [SourceTemplate],

    pub config_asset: Option<AssetSpec>,
    pub scene: &'static [SceneSpec],
}

impl ModuleManifest {
    /// The file whose existence answers `is_installed`.
    pub fn primary_file(&self) -> Option<&'static str> {
        self.files.first().map(|f| f.path)
    }
}

/// All catalog modules, in dashboard order.
pub fn all() -> &'static [ModuleManifest] {
    static CATALOG: [ModuleManifest; 6] = [
        auth::MANIFEST,
        ads::MANIFEST,
        build::MANIFEST,
        audio::MANIFEST,
        links::MANIFEST,
        docs::MANIFEST,
    ];
    &CATALOG
}

/// Look up a module manifest by id.
pub fn find(id: ModuleId) -> &'static ModuleManifest {
    all()
        .iter()
        .find(|m| m.id == id)
        .expect("every ModuleId has a catalog entry")
}

/// Static registration of every config and component type the catalog
/// ships. Compiled together with the manifests, so resolution can never
/// race a rebuild.
pub fn register_types(registry: &mut TypeRegistry) {
    auth::register_types(registry);
    ads::register_types(registry);
    build::register_types(registry);
    audio::register_types(registry);
    links::register_types(registry);
    docs::register_types(registry);
}
