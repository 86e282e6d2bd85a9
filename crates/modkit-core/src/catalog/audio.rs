//! Audio and haptics module

use super::{AssetSpec, ModuleId, ModuleManifest, SceneSpec, SourceTemplate};
use crate::types::{default_value_of, TypeEntry, TypeKind, TypeRegistry};
use serde::{Deserialize, Serialize};

/// One entry in the sound clip table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundClip {
    pub name: String,
    pub asset_path: String,
    pub volume: f32,
}

/// Sound clip table plus haptics switches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub clips: Vec<SoundClip>,
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub haptics_enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            clips: Vec::new(),
            music_volume: 0.8,
            sfx_volume: 1.0,
            haptics_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioManager {
    pub duck_music_during_sfx: bool,
}

const INIT_LUA: &str = r#"-- Audio service: clip playback by name, volumes from AudioConfig.

local Audio = {}

local config = engine.assets.load("assets/settings/AudioConfig.asset")
local clips = {}

function Audio.init()
    for _, clip in ipairs(config.data.clips) do
        clips[clip.name] = clip
    end
    engine.audio.set_music_volume(config.data.music_volume)
    engine.audio.set_sfx_volume(config.data.sfx_volume)
end

function Audio.play(name)
    local clip = clips[name]
    if clip == nil then
        engine.log.warn("unknown sound clip: " .. name)
        return
    end
    engine.audio.play(clip.asset_path, clip.volume)
end

return Audio
"#;

const HAPTICS_LUA: &str = r#"-- Haptics helpers, gated by the AudioConfig switch.

local Haptics = {}

local config = engine.assets.load("assets/settings/AudioConfig.asset")

local function fire(kind)
    if config.data.haptics_enabled then
        engine.haptics.fire(kind)
    end
end

function Haptics.light() fire("light") end
function Haptics.medium() fire("medium") end
function Haptics.success() fire("success") end
function Haptics.failure() fire("failure") end

return Haptics
"#;

pub(super) const MANIFEST: ModuleManifest = ModuleManifest {
    id: ModuleId::Audio,
    name: "Audio & Haptics",
    description: "Sound clip table, volume control, and haptic feedback",
    version: "0.2.0",
    docs_url: "https://modkit.dev/docs/modules/audio",
    folder: "assets/modules/audio",
    files: &[
        SourceTemplate {
            path: "assets/modules/audio/init.lua",
            content: INIT_LUA,
        },
        SourceTemplate {
            path: "assets/modules/audio/haptics.lua",
            content: HAPTICS_LUA,
        },
    ],
    config_asset: Some(AssetSpec {
        type_name: "AudioConfig",
        logical_path: "assets/settings/AudioConfig.asset",
    }),
    scene: &[
        SceneSpec::Marker { label: "Services" },
        SceneSpec::Manager {
            object: "AudioManager",
            component: "AudioManager",
        },
    ],
};

pub(super) fn register_types(registry: &mut TypeRegistry) {
    registry.register(TypeEntry::new(
        "AudioConfig",
        TypeKind::Config,
        default_value_of::<AudioConfig>,
    ));
    registry.register(TypeEntry::new(
        "AudioManager",
        TypeKind::Component,
        default_value_of::<AudioManager>,
    ));
}
