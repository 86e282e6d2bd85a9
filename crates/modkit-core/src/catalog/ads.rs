//! Ads module: banner, interstitial, and rewarded placements

use super::{AssetSpec, ModuleId, ModuleManifest, SceneSpec, SourceTemplate};
use crate::types::{default_value_of, TypeEntry, TypeKind, TypeRegistry};
use serde::{Deserialize, Serialize};

/// Ad network identifiers and placement units
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdsConfig {
    pub app_id: String,
    pub banner_unit: String,
    pub interstitial_unit: String,
    pub rewarded_unit: String,
    /// Serve test ads until real unit ids are filled in
    pub test_mode: bool,
}

impl Default for AdsConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            banner_unit: String::new(),
            interstitial_unit: String::new(),
            rewarded_unit: String::new(),
            test_mode: true,
        }
    }
}

/// Runtime state of the ads manager component
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdsManager {
    pub auto_load_banner: bool,
    pub interstitial_cooldown_secs: u32,
}

impl Default for AdsManager {
    fn default() -> Self {
        Self {
            auto_load_banner: true,
            interstitial_cooldown_secs: 90,
        }
    }
}

const INIT_LUA: &str = r#"-- Ads service: loads placements from AdsConfig and exposes show_* calls.
-- Generated once; edit freely, re-installing never overwrites this file.

local Ads = {}

local config = engine.assets.load("assets/settings/AdsConfig.asset")

function Ads.init()
    engine.ads.configure({
        app_id = config.data.app_id,
        test_mode = config.data.test_mode,
    })
end

function Ads.show_banner()
    engine.ads.show_banner(config.data.banner_unit)
end

function Ads.show_interstitial(on_closed)
    engine.ads.show_interstitial(config.data.interstitial_unit, on_closed)
end

function Ads.show_rewarded(on_reward)
    engine.ads.show_rewarded(config.data.rewarded_unit, on_reward)
end

return Ads
"#;

const PLACEMENTS_LUA: &str = r#"-- Placement helpers: gate interstitials behind a cooldown so level
-- transitions do not spam the player.

local Ads = require("assets/modules/ads/init")

local Placements = {}
local last_interstitial = 0

function Placements.level_complete()
    local manager = engine.scene.find("AdsManager")
    local cooldown = manager.AdsManager.interstitial_cooldown_secs
    if engine.time.now() - last_interstitial >= cooldown then
        last_interstitial = engine.time.now()
        Ads.show_interstitial(nil)
    end
end

return Placements
"#;

pub(super) const MANIFEST: ModuleManifest = ModuleManifest {
    id: ModuleId::Ads,
    name: "Ads",
    description: "Banner, interstitial, and rewarded ad placements",
    version: "0.2.0",
    docs_url: "https://modkit.dev/docs/modules/ads",
    folder: "assets/modules/ads",
    files: &[
        SourceTemplate {
            path: "assets/modules/ads/init.lua",
            content: INIT_LUA,
        },
        SourceTemplate {
            path: "assets/modules/ads/placements.lua",
            content: PLACEMENTS_LUA,
        },
    ],
    config_asset: Some(AssetSpec {
        type_name: "AdsConfig",
        logical_path: "assets/settings/AdsConfig.asset",
    }),
    scene: &[
        SceneSpec::Marker {
            label: "Monetization",
        },
        SceneSpec::Manager {
            object: "AdsManager",
            component: "AdsManager",
        },
    ],
};

pub(super) fn register_types(registry: &mut TypeRegistry) {
    registry.register(TypeEntry::new(
        "AdsConfig",
        TypeKind::Config,
        default_value_of::<AdsConfig>,
    ));
    registry.register(TypeEntry::new(
        "AdsManager",
        TypeKind::Component,
        default_value_of::<AdsManager>,
    ));
}
