//! Static type registry for config-asset and scene-component types
//!
//! Every type a module can instantiate is registered here by name at
//! startup, compiled together with the catalog. Lookup therefore never
//! races a compile: `resolve` returns `None` only for names the catalog
//! does not know (for example a module payload authored against a newer
//! tool), and callers treat that as skip-and-warn, never as a hard error.

use serde::Serialize;
use serde_yaml::Value;
use std::collections::HashMap;

/// Serialize a settings type's `Default` instance for use as a factory.
/// Settings structs are plain data; if one ever fails to serialize the
/// asset is created with a null body rather than aborting the install.
pub fn default_value_of<T: Serialize + Default>() -> Value {
    serde_yaml::to_value(T::default()).unwrap_or(Value::Null)
}

/// What kind of instance a registered type produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A persisted configuration asset
    Config,
    /// A behavior component attached to a scene object
    Component,
}

/// A registered type: stable name plus a factory for its default instance
#[derive(Clone)]
pub struct TypeEntry {
    pub name: &'static str,
    pub kind: TypeKind,
    default_value: fn() -> Value,
}

impl TypeEntry {
    pub fn new(name: &'static str, kind: TypeKind, default_value: fn() -> Value) -> Self {
        Self {
            name,
            kind,
            default_value,
        }
    }

    /// Instantiate the type's default value.
    pub fn instantiate(&self) -> Value {
        (self.default_value)()
    }
}

impl std::fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeEntry")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Name-keyed registry of every instantiable type
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: HashMap<&'static str, TypeEntry>,
}

impl TypeRegistry {
    /// Empty registry (tests and custom hosts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every type the module catalog ships.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        crate::catalog::register_types(&mut registry);
        registry
    }

    /// Register a type. Last registration wins for a duplicate name.
    pub fn register(&mut self, entry: TypeEntry) {
        self.entries.insert(entry.name, entry);
    }

    /// Look up a type by name. `None` means the name is unknown to this
    /// build of the tool; callers skip the operation and warn.
    pub fn resolve(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    /// Names of all registered types, sorted (diagnostics).
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_mapping() -> Value {
        Value::Mapping(Default::default())
    }

    #[test]
    fn resolve_unknown_name_returns_none() {
        let registry = TypeRegistry::new();
        assert!(registry.resolve("NoSuchType").is_none());
    }

    #[test]
    fn register_then_resolve() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeEntry::new("TestConfig", TypeKind::Config, empty_mapping));

        let entry = registry.resolve("TestConfig").unwrap();
        assert_eq!(entry.name, "TestConfig");
        assert_eq!(entry.kind, TypeKind::Config);
    }

    #[test]
    fn instantiate_calls_factory() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeEntry::new("TestConfig", TypeKind::Config, empty_mapping));

        let value = registry.resolve("TestConfig").unwrap().instantiate();
        assert!(value.is_mapping());
    }

    #[test]
    fn builtin_registry_covers_catalog_types() {
        let registry = TypeRegistry::builtin();
        assert!(!registry.type_names().is_empty());

        for module in crate::catalog::all() {
            if let Some(asset) = &module.config_asset {
                let entry = registry
                    .resolve(asset.type_name)
                    .unwrap_or_else(|| panic!("unregistered config type {}", asset.type_name));
                assert_eq!(entry.kind, TypeKind::Config);
            }
            for spec in module.scene {
                if let crate::catalog::SceneSpec::Manager { component, .. } = spec {
                    let entry = registry
                        .resolve(component)
                        .unwrap_or_else(|| panic!("unregistered component type {component}"));
                    assert_eq!(entry.kind, TypeKind::Component);
                }
            }
        }
    }
}
