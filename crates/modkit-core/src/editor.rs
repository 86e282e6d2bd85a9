//! The editor context: explicitly owned host state
//!
//! One `Editor` bundles everything a scaffolding session touches: the
//! project, the asset index, the active scene, the type registry, and the
//! deferred task queue. Construction order is explicit; there are no
//! process-wide singletons. `idle_tick` and `save` are the two defined
//! points in the control loop where deferred work runs and state persists.

use crate::assets::{self, AssetDb};
use crate::project::Project;
use crate::scaffold::defer::{DeferredQueue, DeferredTask};
use crate::scene::{self, Scene};
use crate::types::TypeRegistry;
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

pub struct Editor {
    pub project: Project,
    pub assets: AssetDb,
    pub scene: Scene,
    pub registry: TypeRegistry,
    deferred: DeferredQueue,
}

impl Editor {
    /// Open a project and load its main scene and asset index.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let project = Project::open(root)?;
        let scene = Scene::load(&project)?;
        let mut assets = AssetDb::new();
        assets.refresh(&project, "assets");
        Ok(Self {
            project,
            assets,
            scene,
            registry: TypeRegistry::builtin(),
            deferred: DeferredQueue::new(),
        })
    }

    /// Queue work for the next idle tick.
    pub fn defer(&mut self, task: DeferredTask) {
        self.deferred.push(task);
    }

    /// Number of tasks waiting for the next idle tick.
    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Drain the deferred queue once. Tasks run in submission order; tasks
    /// queued while draining wait for the next tick.
    pub fn idle_tick(&mut self) -> Result<()> {
        let tasks = self.deferred.take_all();
        if tasks.is_empty() {
            return Ok(());
        }
        debug!(count = tasks.len(), "draining deferred queue");
        for task in tasks {
            self.run_task(task)?;
        }
        Ok(())
    }

    /// Persist mutated editor state (currently: the scene, when dirty).
    pub fn save(&mut self) -> Result<()> {
        self.scene.save(&self.project)
    }

    fn run_task(&mut self, task: DeferredTask) -> Result<()> {
        match task {
            DeferredTask::CreateConfigAsset {
                type_name,
                logical_path,
            } => {
                assets::create_config_asset(
                    &self.project,
                    &mut self.assets,
                    &self.registry,
                    type_name,
                    logical_path,
                )?;
            }
            DeferredTask::WireMarker { label } => {
                scene::ensure_marker(&mut self.scene, label);
            }
            DeferredTask::WireManager { object, component } => {
                scene::ensure_manager(&mut self.scene, &self.registry, object, component);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_tick_runs_tasks_in_order_and_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = Editor::open(dir.path()).unwrap();

        editor.defer(DeferredTask::WireMarker { label: "First" });
        editor.defer(DeferredTask::WireMarker { label: "Second" });
        assert_eq!(editor.pending_deferred(), 2);

        editor.idle_tick().unwrap();
        assert_eq!(editor.pending_deferred(), 0);
        assert_eq!(editor.scene.objects.len(), 2);
        assert_eq!(editor.scene.objects[0].name, scene::marker_name("First"));

        // A second tick with an empty queue changes nothing.
        editor.idle_tick().unwrap();
        assert_eq!(editor.scene.objects.len(), 2);
    }

    #[test]
    fn duplicate_tasks_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = Editor::open(dir.path()).unwrap();

        // A fast double-click enqueues the same work twice before a tick.
        editor.defer(DeferredTask::WireManager {
            object: "AdsManager",
            component: "AdsManager",
        });
        editor.defer(DeferredTask::WireManager {
            object: "AdsManager",
            component: "AdsManager",
        });
        editor.idle_tick().unwrap();

        assert_eq!(editor.scene.objects.len(), 1);
    }
}
