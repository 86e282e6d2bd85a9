//! The scaffolding engine
//!
//! This module provides:
//! - Idempotent folder/file creation (writer)
//! - The deferred task queue drained at editor idle ticks (defer)
//! - The per-module install orchestrator (install)
//! - Payload/tool version compatibility checking (version)

pub mod defer;
pub mod install;
pub mod version;
pub mod writer;

pub use defer::{DeferredQueue, DeferredTask};
pub use install::{install, install_all, is_installed, InstallReport};
pub use version::check_compatibility;
