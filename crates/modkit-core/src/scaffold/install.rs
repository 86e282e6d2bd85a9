//! Per-module install orchestration
//!
//! `install` is synchronous for the immediate phase (folders and source
//! files) and queues the deferred phase (config asset, scene wiring) for
//! the editor's next idle tick. Every sub-step is idempotent, so re-running
//! an install performs only the missing subset of work.

use crate::catalog::{ModuleId, ModuleManifest, SceneSpec};
use crate::editor::Editor;
use crate::project::Project;
use crate::scaffold::defer::DeferredTask;
use crate::scaffold::writer;
use anyhow::Result;
use tracing::info;

/// What one install call actually did
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub module: ModuleId,
    /// Logical paths written this call (existing files are skipped)
    pub files_written: Vec<&'static str>,
    /// Tasks queued for the next idle tick
    pub deferred: usize,
}

/// Install a module: write missing folders and files now, queue asset
/// creation and scene wiring for the next idle tick.
pub fn install(editor: &mut Editor, module: &ModuleManifest) -> Result<InstallReport> {
    writer::ensure_folder(&editor.project, &mut editor.assets, module.folder)?;

    let mut files_written = Vec::new();
    for template in module.files {
        if writer::write_file(
            &editor.project,
            &mut editor.assets,
            template.path,
            template.content,
        )? {
            files_written.push(template.path);
        }
    }

    let mut deferred = 0;
    if let Some(asset) = &module.config_asset {
        editor.defer(DeferredTask::CreateConfigAsset {
            type_name: asset.type_name,
            logical_path: asset.logical_path,
        });
        deferred += 1;
    }
    for spec in module.scene {
        editor.defer(match *spec {
            SceneSpec::Marker { label } => DeferredTask::WireMarker { label },
            SceneSpec::Manager { object, component } => {
                DeferredTask::WireManager { object, component }
            }
        });
        deferred += 1;
    }

    info!(
        module = %module.id,
        written = files_written.len(),
        deferred,
        "module install scheduled"
    );

    Ok(InstallReport {
        module: module.id,
        files_written,
        deferred,
    })
}

/// Whether a module is installed: existence of its primary generated file.
///
/// A shallow probe. A module reports installed as soon as the immediate
/// phase has run, even while its asset and scene wiring are still pending.
pub fn is_installed(project: &Project, module: &ModuleManifest) -> bool {
    module
        .primary_file()
        .map(|path| writer::file_exists(project, path))
        .unwrap_or(false)
}

/// Install every catalog module.
pub fn install_all(editor: &mut Editor) -> Result<Vec<InstallReport>> {
    let mut reports = Vec::new();
    for module in crate::catalog::all() {
        reports.push(install(editor, module)?);
    }
    Ok(reports)
}
