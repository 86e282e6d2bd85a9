//! Version comparison for tool and module payload compatibility

use anyhow::Result;
use semver::Version;

/// Compare the tool version against a module payload version
/// Returns a warning message if the tool is older than the payload expects
pub fn check_compatibility(
    tool_version: &str,
    payload_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let tool_ver = match Version::parse(tool_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let payload_ver = match Version::parse(payload_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    if tool_ver < payload_ver {
        Some(format!(
            "Warning: This module payload was designed for modkit version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            payload_version, tool_version, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse version string, handling various formats
#[allow(dead_code)]
pub fn parse_version(version_str: &str) -> Result<Version> {
    // Remove leading 'v' if present
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
