//! Settings and links module: store page, privacy policy, support

use super::{AssetSpec, ModuleId, ModuleManifest, SourceTemplate};
use crate::types::{default_value_of, TypeEntry, TypeKind, TypeRegistry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub store_url: String,
    pub privacy_url: String,
    pub terms_url: String,
    pub support_email: String,
}

const INIT_LUA: &str = r#"-- Settings panel actions: open external links, toggle stored settings.

local Links = {}

local config = engine.assets.load("assets/settings/LinksConfig.asset")

function Links.rate_app()
    engine.platform.open_url(config.data.store_url)
end

function Links.privacy_policy()
    engine.platform.open_url(config.data.privacy_url)
end

function Links.terms()
    engine.platform.open_url(config.data.terms_url)
end

function Links.contact_support()
    engine.platform.open_url("mailto:" .. config.data.support_email)
end

function Links.set_setting(key, value)
    engine.settings.set("prefs." .. key, value)
end

function Links.get_setting(key)
    return engine.settings.get("prefs." .. key)
end

return Links
"#;

pub(super) const MANIFEST: ModuleManifest = ModuleManifest {
    id: ModuleId::Links,
    name: "Settings & Links",
    description: "Settings storage plus store, privacy, and support links",
    version: "0.1.0",
    docs_url: "https://modkit.dev/docs/modules/links",
    folder: "assets/modules/links",
    files: &[SourceTemplate {
        path: "assets/modules/links/init.lua",
        content: INIT_LUA,
    }],
    config_asset: Some(AssetSpec {
        type_name: "LinksConfig",
        logical_path: "assets/settings/LinksConfig.asset",
    }),
    scene: &[],
};

pub(super) fn register_types(registry: &mut TypeRegistry) {
    registry.register(TypeEntry::new(
        "LinksConfig",
        TypeKind::Config,
        default_value_of::<LinksConfig>,
    ));
}
