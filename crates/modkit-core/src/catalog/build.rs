//! Build pipeline module: packaging identity and build scripts
//!
//! The generated script drives the engine's packaging backend; invoking
//! that backend is out of scope for the scaffolder. No scene objects.

use super::{AssetSpec, ModuleId, ModuleManifest, SourceTemplate};
use crate::types::{default_value_of, TypeEntry, TypeKind, TypeRegistry};
use serde::{Deserialize, Serialize};

/// Packaging identity for builds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub bundle_id: String,
    pub version_name: String,
    pub build_number: u32,
    pub targets: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            bundle_id: "com.example.game".to_string(),
            version_name: "0.1.0".to_string(),
            build_number: 1,
            targets: vec!["android".to_string(), "ios".to_string()],
        }
    }
}

const PIPELINE_LUA: &str = r#"-- Build pipeline: reads BuildConfig and hands each target to the
-- engine's packaging backend. Fails fast when the config asset is missing.

local Pipeline = {}

function Pipeline.run(target)
    local config = engine.assets.load("assets/settings/BuildConfig.asset")
    if config == nil then
        engine.log.error("BuildConfig.asset not found; install the build module first")
        return false
    end

    engine.build.package({
        target = target,
        bundle_id = config.data.bundle_id,
        version_name = config.data.version_name,
        build_number = config.data.build_number,
    })
    return true
end

function Pipeline.run_all()
    local config = engine.assets.load("assets/settings/BuildConfig.asset")
    for _, target in ipairs(config.data.targets) do
        if not Pipeline.run(target) then
            return false
        end
    end
    return true
end

return Pipeline
"#;

pub(super) const MANIFEST: ModuleManifest = ModuleManifest {
    id: ModuleId::Build,
    name: "Build Pipeline",
    description: "Packaging identity and per-target build scripts",
    version: "0.1.0",
    docs_url: "https://modkit.dev/docs/modules/build",
    folder: "assets/modules/build",
    files: &[SourceTemplate {
        path: "assets/modules/build/pipeline.lua",
        content: PIPELINE_LUA,
    }],
    config_asset: Some(AssetSpec {
        type_name: "BuildConfig",
        logical_path: "assets/settings/BuildConfig.asset",
    }),
    scene: &[],
};

pub(super) fn register_types(registry: &mut TypeRegistry) {
    registry.register(TypeEntry::new(
        "BuildConfig",
        TypeKind::Config,
        default_value_of::<BuildConfig>,
    ));
}
