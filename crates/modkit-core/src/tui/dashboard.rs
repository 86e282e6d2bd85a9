//! Charm-style module dashboard using cliclack

use crate::catalog::{self, ModuleManifest};
use crate::editor::Editor;
use crate::project;
use crate::scaffold::{self, version};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Arguments for the dashboard
#[derive(Debug, Clone, Default)]
pub struct DashboardArgs {
    /// Project directory; falls back to MODKIT_PROJECT, then the
    /// current directory
    pub project: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

enum Action {
    Install(usize),
    Docs,
    Quit,
}

/// Run the interactive dashboard until the user quits.
pub fn run(args: DashboardArgs, tool_version: &str) -> Result<()> {
    cliclack::intro("modkit")?;

    let root = project::locate_root(args.project.as_deref())?;
    cliclack::log::info(format!("Project: {}", root.display()))?;

    let mut editor = Editor::open(&root)?;
    let name = editor.project.manifest().name.clone();
    if !name.is_empty() {
        cliclack::log::info(format!("Opened {name}"))?;
    }

    loop {
        match select_action(&editor)? {
            Action::Install(idx) => {
                let module = &catalog::all()[idx];
                install_module(&mut editor, module, tool_version, args.yes)?;
            }
            Action::Docs => open_docs()?,
            Action::Quit => break,
        }
    }

    cliclack::outro("Happy shipping!")?;
    Ok(())
}

fn select_action(editor: &Editor) -> Result<Action> {
    let mut select = cliclack::select("Select a module to install");
    for (idx, module) in catalog::all().iter().enumerate() {
        let label = if scaffold::is_installed(&editor.project, module) {
            format!("{} (installed)", module.name)
        } else {
            module.name.to_string()
        };
        select = select.item(idx, label, module.description);
    }
    let docs = catalog::all().len();
    let quit = docs + 1;
    select = select.item(docs, "Open documentation", "");
    select = select.item(quit, "Quit", "");

    let picked: usize = select.interact()?;
    Ok(if picked == quit {
        Action::Quit
    } else if picked == docs {
        Action::Docs
    } else {
        Action::Install(picked)
    })
}

fn install_module(
    editor: &mut Editor,
    module: &ModuleManifest,
    tool_version: &str,
    yes: bool,
) -> Result<()> {
    if let Some(warning) = version::check_compatibility(
        tool_version,
        module.version,
        "cargo install modkit-tools --force",
    ) {
        cliclack::log::warning(format!(
            "Version warning: {}",
            warning.lines().next().unwrap_or(&warning)
        ))?;
    }

    if scaffold::is_installed(&editor.project, module) && !yes {
        let confirm: bool =
            cliclack::confirm(format!("{} is already installed. Re-run the install?", module.name))
                .initial_value(true)
                .interact()?;
        if !confirm {
            return Ok(());
        }
    }

    let spinner = cliclack::spinner();
    spinner.start(format!("Installing {}...", module.name));

    let report = scaffold::install(editor, module)?;
    editor.idle_tick()?;
    editor.save()?;

    if report.files_written.is_empty() {
        spinner.stop(format!("{} is up to date", module.name));
    } else {
        spinner.stop(format!(
            "Installed {} ({} file(s) written)",
            module.name,
            report.files_written.len()
        ));
    }
    Ok(())
}

fn open_docs() -> Result<()> {
    let mut select = cliclack::select("Documentation for which module?");
    for (idx, module) in catalog::all().iter().enumerate() {
        select = select.item(idx, module.name, module.docs_url);
    }
    let picked: usize = select.interact()?;
    let module = &catalog::all()[picked];

    println!(
        "{}",
        format!("Opening {} documentation in your browser...", module.name).cyan()
    );
    open::that(module.docs_url)?;
    Ok(())
}
