//! Authentication module: sign-in providers and session handling

use super::{AssetSpec, ModuleId, ModuleManifest, SceneSpec, SourceTemplate};
use crate::types::{default_value_of, TypeEntry, TypeKind, TypeRegistry};
use serde::{Deserialize, Serialize};

/// Sign-in provider endpoints and behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub api_base_url: String,
    pub client_id: String,
    /// Sign players in anonymously on first launch
    pub anonymous_sign_in: bool,
    pub session_ttl_secs: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://auth.example.com".to_string(),
            client_id: String::new(),
            anonymous_sign_in: true,
            session_ttl_secs: 3600,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthManager {
    pub refresh_before_expiry_secs: u32,
}

const INIT_LUA: &str = r#"-- Auth service: sign-in entry points backed by AuthConfig.

local Session = require("assets/modules/auth/session")

local Auth = {}

local config = engine.assets.load("assets/settings/AuthConfig.asset")

function Auth.init()
    if config.data.anonymous_sign_in and not Session.current() then
        Auth.sign_in_anonymous()
    end
end

function Auth.sign_in_anonymous()
    local token = engine.http.post(config.data.api_base_url .. "/anonymous", {
        client_id = config.data.client_id,
    })
    Session.store(token, config.data.session_ttl_secs)
end

function Auth.sign_out()
    Session.clear()
end

return Auth
"#;

const SESSION_LUA: &str = r#"-- Session storage: token cache with expiry, persisted to player settings.

local Session = {}

local KEY = "auth.session"

function Session.current()
    local raw = engine.settings.get(KEY)
    if raw == nil or raw.expires_at < engine.time.now() then
        return nil
    end
    return raw
end

function Session.store(token, ttl_secs)
    engine.settings.set(KEY, {
        token = token,
        expires_at = engine.time.now() + ttl_secs,
    })
end

function Session.clear()
    engine.settings.set(KEY, nil)
end

return Session
"#;

pub(super) const MANIFEST: ModuleManifest = ModuleManifest {
    id: ModuleId::Auth,
    name: "Authentication",
    description: "Sign-in providers and player session handling",
    version: "0.2.0",
    docs_url: "https://modkit.dev/docs/modules/auth",
    folder: "assets/modules/auth",
    files: &[
        SourceTemplate {
            path: "assets/modules/auth/init.lua",
            content: INIT_LUA,
        },
        SourceTemplate {
            path: "assets/modules/auth/session.lua",
            content: SESSION_LUA,
        },
    ],
    config_asset: Some(AssetSpec {
        type_name: "AuthConfig",
        logical_path: "assets/settings/AuthConfig.asset",
    }),
    scene: &[
        SceneSpec::Marker { label: "Services" },
        SceneSpec::Manager {
            object: "AuthManager",
            component: "AuthManager",
        },
    ],
};

pub(super) fn register_types(registry: &mut TypeRegistry) {
    registry.register(TypeEntry::new(
        "AuthConfig",
        TypeKind::Config,
        default_value_of::<AuthConfig>,
    ));
    registry.register(TypeEntry::new(
        "AuthManager",
        TypeKind::Component,
        default_value_of::<AuthManager>,
    ));
}
