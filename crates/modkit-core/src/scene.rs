//! Scene graph model and idempotent scene wiring
//!
//! The project's main scene is a YAML document of named root objects. The
//! wirer guarantees at most one root object per name: a found object is
//! returned as-is, whatever its contents. Every object the wirer creates is
//! recorded in the undo journal and marks the scene dirty.

use crate::project::Project;
use crate::types::{TypeKind, TypeRegistry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Logical path of the main scene document
pub const MAIN_SCENE: &str = "assets/scenes/main.scene";

/// A behavior component attached to a scene object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub properties: serde_yaml::Value,
}

/// A named root-level scene entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,

    #[serde(default)]
    pub components: Vec<Component>,
}

impl SceneObject {
    pub fn has_component(&self, type_name: &str) -> bool {
        self.components.iter().any(|c| c.type_name == type_name)
    }
}

/// Handle to a root object; valid until objects are removed from the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneObjectId(usize);

/// Undo journal entry for a wirer-created object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoRecord {
    CreateObject { name: String },
}

/// The active scene
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub objects: Vec<SceneObject>,

    #[serde(skip)]
    dirty: bool,

    #[serde(skip)]
    undo: Vec<UndoRecord>,
}

impl Scene {
    /// Load the main scene, or an empty scene if the project has none yet.
    pub fn load(project: &Project) -> Result<Self> {
        let path = project.resolve(MAIN_SCENE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scene: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse scene: {}", path.display()))
    }

    /// Persist the scene if dirty. The scene file is owned by the editor
    /// and is always rewritten in full, unlike scaffolded source files.
    pub fn save(&mut self, project: &Project) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let path = project.resolve(MAIN_SCENE);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize scene")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write scene: {}", path.display()))?;
        self.dirty = false;
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn undo_journal(&self) -> &[UndoRecord] {
        &self.undo
    }

    /// Find a root object by exact name.
    pub fn find(&self, name: &str) -> Option<SceneObjectId> {
        self.objects
            .iter()
            .position(|o| o.name == name)
            .map(SceneObjectId)
    }

    pub fn object(&self, id: SceneObjectId) -> &SceneObject {
        &self.objects[id.0]
    }

    fn create_object(&mut self, name: &str) -> SceneObjectId {
        self.objects.push(SceneObject {
            name: name.to_string(),
            components: Vec::new(),
        });
        self.undo.push(UndoRecord::CreateObject {
            name: name.to_string(),
        });
        self.dirty = true;
        SceneObjectId(self.objects.len() - 1)
    }
}

/// Display name for a marker object derived from its label.
pub fn marker_name(label: &str) -> String {
    format!("--- {label} ---")
}

/// Ensure a marker object (visual separator, no components) exists at scene
/// root. Returns the existing object on a name collision.
pub fn ensure_marker(scene: &mut Scene, label: &str) -> SceneObjectId {
    let name = marker_name(label);
    if let Some(id) = scene.find(&name) {
        debug!(name = %name, "marker already present");
        return id;
    }
    debug!(name = %name, "marker created");
    scene.create_object(&name)
}

/// Ensure a manager object named `object_name` exists at scene root with a
/// `component_type` component attached.
///
/// A found object is returned as-is; the expected component is not verified
/// or repaired. On create, the component attach is one-shot best-effort: an
/// unresolvable component type leaves a bare object and a warning, and the
/// user re-triggers installation once the type is available.
pub fn ensure_manager(
    scene: &mut Scene,
    registry: &TypeRegistry,
    object_name: &str,
    component_type: &str,
) -> SceneObjectId {
    if let Some(id) = scene.find(object_name) {
        if !scene.object(id).has_component(component_type) {
            debug!(
                object = object_name,
                component = component_type,
                "found manager without expected component; leaving as-is"
            );
        }
        return id;
    }

    let id = scene.create_object(object_name);
    match registry.resolve(component_type) {
        Some(entry) if entry.kind == TypeKind::Component => {
            scene.objects[id.0].components.push(Component {
                type_name: entry.name.to_string(),
                properties: entry.instantiate(),
            });
            debug!(object = object_name, component = component_type, "manager wired");
        }
        Some(_) => {
            warn!(
                object = object_name,
                component = component_type,
                "registered type is not a component; created bare object"
            );
        }
        None => {
            warn!(
                object = object_name,
                component = component_type,
                "component type not registered; created bare object, attach it by reinstalling"
            );
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeEntry;

    fn registry_with_component(name: &'static str) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register(TypeEntry::new(name, TypeKind::Component, || {
            serde_yaml::from_str("enabled: true").unwrap()
        }));
        registry
    }

    #[test]
    fn marker_is_created_once() {
        let mut scene = Scene::default();

        let first = ensure_marker(&mut scene, "Monetization");
        let second = ensure_marker(&mut scene, "Monetization");

        assert_eq!(first, second);
        assert_eq!(scene.objects.len(), 1);
        assert_eq!(scene.objects[0].name, marker_name("Monetization"));
        assert!(scene.is_dirty());
        assert_eq!(scene.undo_journal().len(), 1);
    }

    #[test]
    fn manager_gets_component_when_resolvable() {
        let mut scene = Scene::default();
        let registry = registry_with_component("AdsManager");

        let id = ensure_manager(&mut scene, &registry, "AdsManager", "AdsManager");

        assert!(scene.object(id).has_component("AdsManager"));
        assert!(scene.is_dirty());
    }

    #[test]
    fn manager_without_resolvable_component_is_bare() {
        let mut scene = Scene::default();
        let registry = TypeRegistry::new();

        let id = ensure_manager(&mut scene, &registry, "AdsManager", "AdsManager");

        assert!(scene.object(id).components.is_empty());
        // Object still created and undo-registered: one-shot best effort.
        assert_eq!(scene.undo_journal().len(), 1);
        assert!(scene.is_dirty());
    }

    #[test]
    fn found_manager_is_not_repaired() {
        let mut scene = Scene::default();
        let registry = registry_with_component("AdsManager");

        scene.objects.push(SceneObject {
            name: "AdsManager".to_string(),
            components: Vec::new(),
        });

        let id = ensure_manager(&mut scene, &registry, "AdsManager", "AdsManager");

        assert_eq!(scene.objects.len(), 1);
        assert!(scene.object(id).components.is_empty());
        assert!(!scene.is_dirty());
    }

    #[test]
    fn save_writes_only_when_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::open(dir.path()).unwrap();
        let mut scene = Scene::default();

        scene.save(&project).unwrap();
        assert!(!project.resolve(MAIN_SCENE).exists());

        ensure_marker(&mut scene, "Services");
        scene.save(&project).unwrap();
        assert!(project.resolve(MAIN_SCENE).is_file());
        assert!(!scene.is_dirty());

        let reloaded = Scene::load(&project).unwrap();
        assert!(reloaded.find(&marker_name("Services")).is_some());
    }

    #[test]
    fn load_missing_scene_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::open(dir.path()).unwrap();
        let scene = Scene::load(&project).unwrap();
        assert!(scene.objects.is_empty());
    }
}
