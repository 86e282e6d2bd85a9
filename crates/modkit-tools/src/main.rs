//! modkit CLI - Module scaffolding for game projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use modkit_core::catalog::{self, ModuleId, ModuleManifest};
use modkit_core::scaffold::{self, version};
use modkit_core::tui::DashboardArgs;
use modkit_core::{project, Editor};
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upgrade command shown in version warnings
const UPGRADE_COMMAND: &str = "cargo install modkit-tools --force";

#[derive(Parser, Debug)]
#[command(name = "modkit")]
#[command(about = "Install catalog modules into a game project")]
#[command(version)]
pub struct Args {
    /// Project directory (defaults to $MODKIT_PROJECT, then the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog modules and their install state
    List,
    /// Install one or more modules
    Install(InstallArgs),
}

#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Module names (auth, ads, build, audio, links, docs)
    pub modules: Vec<String>,

    /// Install every catalog module
    #[arg(long)]
    pub all: bool,
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "modkit_core=warn".into()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Some(Command::List) => list_modules(&args.project),
        Some(Command::Install(install_args)) => install_modules(&args.project, install_args),
        None => {
            // No subcommand provided, default to the interactive dashboard
            let result = modkit_core::run(
                DashboardArgs {
                    project: args.project,
                    yes: false,
                },
                CLI_VERSION,
            );

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}

fn list_modules(project_flag: &Option<PathBuf>) -> Result<()> {
    let root = project::locate_root(project_flag.as_deref())?;
    let project = modkit_core::Project::open(&root)?;

    println!(
        "{}",
        format!("Modules in {}", root.display()).cyan().bold()
    );
    println!();

    for module in catalog::all() {
        let state = if scaffold::is_installed(&project, module) {
            "installed".green()
        } else {
            "not installed".dimmed()
        };
        println!(
            "  {} {} ({}) - {}",
            "->".blue(),
            module.id,
            state,
            module.description
        );
    }
    Ok(())
}

fn install_modules(project_flag: &Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let targets: Vec<&'static ModuleManifest> = if args.all {
        catalog::all().iter().collect()
    } else if args.modules.is_empty() {
        anyhow::bail!("No modules given. Pass module names or --all.");
    } else {
        let mut targets = Vec::new();
        for name in &args.modules {
            let id: ModuleId = name.parse()?;
            targets.push(catalog::find(id));
        }
        targets
    };

    let root = project::locate_root(project_flag.as_deref())?;
    let mut editor = Editor::open(&root)?;

    for module in &targets {
        if let Some(warning) =
            version::check_compatibility(CLI_VERSION, module.version, UPGRADE_COMMAND)
        {
            eprintln!("{}", warning.yellow());
        }

        let report = scaffold::install(&mut editor, module)?;
        if report.files_written.is_empty() {
            println!("  {} {} is up to date", "->".blue(), module.id);
        } else {
            println!(
                "  {} {} installed ({} file(s) written)",
                "->".blue(),
                module.id,
                report.files_written.len()
            );
        }
    }

    // Idle boundary: run the deferred phase (assets, scene wiring), then
    // persist the scene.
    editor.idle_tick()?;
    editor.save()?;

    println!();
    println!(
        "{} {} module(s) in {}",
        "Processed".green().bold(),
        targets.len(),
        root.display()
    );
    Ok(())
}
