//! Remote-document storage module: cloud documents with a local cache

use super::{AssetSpec, ModuleId, ModuleManifest, SceneSpec, SourceTemplate};
use crate::types::{default_value_of, TypeEntry, TypeKind, TypeRegistry};
use serde::{Deserialize, Serialize};

/// Remote document store connection and caching policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteDocsConfig {
    pub project_id: String,
    pub collection: String,
    pub cache_ttl_secs: u32,
    /// Serve stale cached documents when the store is unreachable
    pub offline_fallback: bool,
}

impl Default for RemoteDocsConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            collection: "game-data".to_string(),
            cache_ttl_secs: 300,
            offline_fallback: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteDocsManager {
    pub sync_on_focus: bool,
}

const INIT_LUA: &str = r#"-- Remote documents: fetch by id with cache-first reads.

local Cache = require("assets/modules/docs/cache")

local Docs = {}

local config = engine.assets.load("assets/settings/RemoteDocsConfig.asset")

function Docs.get(doc_id, callback)
    local cached = Cache.get(doc_id, config.data.cache_ttl_secs)
    if cached ~= nil then
        callback(cached)
        return
    end

    engine.cloud.fetch(config.data.project_id, config.data.collection, doc_id, function(doc, err)
        if err ~= nil then
            if config.data.offline_fallback then
                callback(Cache.get_stale(doc_id))
            else
                callback(nil)
            end
            return
        end
        Cache.put(doc_id, doc)
        callback(doc)
    end)
end

return Docs
"#;

const CACHE_LUA: &str = r#"-- Document cache keyed by id, with fetch timestamps for TTL checks.

local Cache = {}

local entries = {}

function Cache.get(doc_id, ttl_secs)
    local entry = entries[doc_id]
    if entry == nil or engine.time.now() - entry.fetched_at > ttl_secs then
        return nil
    end
    return entry.doc
end

function Cache.get_stale(doc_id)
    local entry = entries[doc_id]
    return entry and entry.doc or nil
end

function Cache.put(doc_id, doc)
    entries[doc_id] = { doc = doc, fetched_at = engine.time.now() }
end

return Cache
"#;

pub(super) const MANIFEST: ModuleManifest = ModuleManifest {
    id: ModuleId::Docs,
    name: "Remote Documents",
    description: "Cloud document storage with a TTL cache and offline fallback",
    version: "0.2.0",
    docs_url: "https://modkit.dev/docs/modules/docs",
    folder: "assets/modules/docs",
    files: &[
        SourceTemplate {
            path: "assets/modules/docs/init.lua",
            content: INIT_LUA,
        },
        SourceTemplate {
            path: "assets/modules/docs/cache.lua",
            content: CACHE_LUA,
        },
    ],
    config_asset: Some(AssetSpec {
        type_name: "RemoteDocsConfig",
        logical_path: "assets/settings/RemoteDocsConfig.asset",
    }),
    scene: &[
        SceneSpec::Marker { label: "Services" },
        SceneSpec::Manager {
            object: "RemoteDocsManager",
            component: "RemoteDocsManager",
        },
    ],
};

pub(super) fn register_types(registry: &mut TypeRegistry) {
    registry.register(TypeEntry::new(
        "RemoteDocsConfig",
        TypeKind::Config,
        default_value_of::<RemoteDocsConfig>,
    ));
    registry.register(TypeEntry::new(
        "RemoteDocsManager",
        TypeKind::Component,
        default_value_of::<RemoteDocsManager>,
    ));
}
