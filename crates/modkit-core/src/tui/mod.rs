//! Module dashboard using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod dashboard;

#[cfg(feature = "tui")]
pub use dashboard::{run, DashboardArgs};
