use modkit_core::catalog::{self, ModuleId};
use modkit_core::scene::{self, Scene, SceneObject};
use modkit_core::types::TypeRegistry;
use modkit_core::{assets, scaffold, DeferredTask, Editor};

fn open_editor(dir: &tempfile::TempDir) -> Editor {
    Editor::open(dir.path()).unwrap()
}

#[test]
fn fresh_ads_install_defers_asset_and_scene_work() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_editor(&dir);
    let ads = catalog::find(ModuleId::Ads);

    scaffold::install(&mut editor, ads).unwrap();

    // Immediate phase: source files exist.
    for file in ads.files {
        assert!(
            editor.project.resolve(file.path).is_file(),
            "{} missing after install",
            file.path
        );
    }

    // Deferred phase not yet run: no asset, no scene objects.
    assert!(!editor
        .project
        .resolve("assets/settings/AdsConfig.asset")
        .exists());
    assert!(editor.scene.find("AdsManager").is_none());

    editor.idle_tick().unwrap();

    // Asset exists exactly once with the registered default payload.
    let doc = assets::load_asset(&editor.project, "assets/settings/AdsConfig.asset").unwrap();
    assert_eq!(doc.type_name, "AdsConfig");
    assert_eq!(doc.data["test_mode"], serde_yaml::Value::Bool(true));

    // Manager exists exactly once with its component attached.
    let managers: Vec<_> = editor
        .scene
        .objects
        .iter()
        .filter(|o| o.name == "AdsManager")
        .collect();
    assert_eq!(managers.len(), 1);
    assert!(managers[0].has_component("AdsManager"));

    // Marker present too.
    assert!(editor
        .scene
        .find(&scene::marker_name("Monetization"))
        .is_some());
}

#[test]
fn double_install_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_editor(&dir);
    let ads = catalog::find(ModuleId::Ads);

    let first = scaffold::install(&mut editor, ads).unwrap();
    assert!(!first.files_written.is_empty());

    // Installed after the immediate phase, before any idle tick.
    assert!(scaffold::is_installed(&editor.project, ads));

    let second = scaffold::install(&mut editor, ads).unwrap();
    assert!(second.files_written.is_empty());

    editor.idle_tick().unwrap();
    editor.idle_tick().unwrap();

    // One asset, one manager, one marker, byte-identical sources.
    let asset_path = editor.project.resolve("assets/settings/AdsConfig.asset");
    assert!(asset_path.is_file());
    assert_eq!(
        editor
            .scene
            .objects
            .iter()
            .filter(|o| o.name == "AdsManager")
            .count(),
        1
    );
    for file in ads.files {
        let on_disk = std::fs::read_to_string(editor.project.resolve(file.path)).unwrap();
        assert_eq!(on_disk, file.content);
    }
}

#[test]
fn user_edits_survive_reinstall() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_editor(&dir);
    let ads = catalog::find(ModuleId::Ads);

    scaffold::install(&mut editor, ads).unwrap();
    editor.idle_tick().unwrap();

    let init = editor.project.resolve("assets/modules/ads/init.lua");
    std::fs::write(&init, "-- my rewritten ads service\n").unwrap();

    scaffold::install(&mut editor, ads).unwrap();
    editor.idle_tick().unwrap();

    let content = std::fs::read_to_string(&init).unwrap();
    assert_eq!(content, "-- my rewritten ads service\n");
}

#[test]
fn deleted_source_is_rescaffolded_without_touching_the_asset() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_editor(&dir);
    let ads = catalog::find(ModuleId::Ads);

    scaffold::install(&mut editor, ads).unwrap();
    editor.idle_tick().unwrap();

    // User customizes the asset, then deletes the generated source.
    let asset_path = editor.project.resolve("assets/settings/AdsConfig.asset");
    std::fs::write(&asset_path, "type: AdsConfig\ndata:\n  app_id: live-123\n").unwrap();
    std::fs::remove_file(editor.project.resolve("assets/modules/ads/init.lua")).unwrap();
    assert!(!scaffold::is_installed(&editor.project, ads));

    let report = scaffold::install(&mut editor, ads).unwrap();
    assert_eq!(report.files_written, vec!["assets/modules/ads/init.lua"]);
    editor.idle_tick().unwrap();

    // The customized asset was not recreated or overwritten.
    let doc = assets::load_asset(&editor.project, "assets/settings/AdsConfig.asset").unwrap();
    assert_eq!(
        doc.data["app_id"],
        serde_yaml::Value::String("live-123".into())
    );
}

#[test]
fn unresolved_type_leaves_no_partial_asset() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_editor(&dir);

    // Simulate a payload authored against a newer tool: its config type is
    // not registered in this build.
    editor.registry = TypeRegistry::new();
    editor.defer(DeferredTask::CreateConfigAsset {
        type_name: "AdsConfig",
        logical_path: "assets/settings/AdsConfig.asset",
    });
    editor.idle_tick().unwrap();

    assert!(!editor
        .project
        .resolve("assets/settings/AdsConfig.asset")
        .exists());

    // Re-triggering with a complete registry succeeds.
    editor.registry = TypeRegistry::builtin();
    editor.defer(DeferredTask::CreateConfigAsset {
        type_name: "AdsConfig",
        logical_path: "assets/settings/AdsConfig.asset",
    });
    editor.idle_tick().unwrap();
    assert!(editor
        .project
        .resolve("assets/settings/AdsConfig.asset")
        .is_file());
}

#[test]
fn scene_name_collision_is_skipped_not_repaired() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_editor(&dir);
    let ads = catalog::find(ModuleId::Ads);

    // A previous (or hand-built) object already claims the manager name,
    // with no component attached.
    editor.scene.objects.push(SceneObject {
        name: "AdsManager".to_string(),
        components: Vec::new(),
    });

    scaffold::install(&mut editor, ads).unwrap();
    editor.idle_tick().unwrap();

    let managers: Vec<_> = editor
        .scene
        .objects
        .iter()
        .filter(|o| o.name == "AdsManager")
        .collect();
    assert_eq!(managers.len(), 1);
    assert!(managers[0].components.is_empty());
}

#[test]
fn install_survives_editor_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut editor = open_editor(&dir);
        scaffold::install(&mut editor, catalog::find(ModuleId::Audio)).unwrap();
        editor.idle_tick().unwrap();
        editor.save().unwrap();
    }

    // A new session sees the same state and re-install adds nothing.
    let mut editor = open_editor(&dir);
    assert!(scaffold::is_installed(
        &editor.project,
        catalog::find(ModuleId::Audio)
    ));
    assert!(editor.scene.find("AudioManager").is_some());

    scaffold::install(&mut editor, catalog::find(ModuleId::Audio)).unwrap();
    editor.idle_tick().unwrap();
    assert_eq!(
        editor
            .scene
            .objects
            .iter()
            .filter(|o| o.name == "AudioManager")
            .count(),
        1
    );

    // Nothing changed, so the scene is not dirty and save is a no-op.
    assert!(!editor.scene.is_dirty());
}

#[test]
fn modules_sharing_a_marker_create_it_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_editor(&dir);

    scaffold::install(&mut editor, catalog::find(ModuleId::Auth)).unwrap();
    scaffold::install(&mut editor, catalog::find(ModuleId::Docs)).unwrap();
    editor.idle_tick().unwrap();

    let services = scene::marker_name("Services");
    assert_eq!(
        editor
            .scene
            .objects
            .iter()
            .filter(|o| o.name == services)
            .count(),
        1
    );
}

#[test]
fn install_all_then_tick_completes_every_module() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_editor(&dir);

    scaffold::install_all(&mut editor).unwrap();
    editor.idle_tick().unwrap();
    editor.save().unwrap();

    for module in catalog::all() {
        assert!(scaffold::is_installed(&editor.project, module));
        if let Some(asset) = &module.config_asset {
            assert!(
                editor.project.resolve(asset.logical_path).is_file(),
                "{} missing",
                asset.logical_path
            );
        }
    }

    // Scene round-trips through disk.
    let reloaded = Scene::load(&editor.project).unwrap();
    assert_eq!(reloaded.objects.len(), editor.scene.objects.len());
}
