// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`ICED_BOUTIQUE_CONFIG_DIR`)
//! 4. **Platform default** - via the `dirs` crate
//!
//! The explicit override has highest priority because it is the most
//! specific: when code explicitly passes a path, it is always respected.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedBoutique";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_BOUTIQUE_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Must be called once at application startup, before any path resolution.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_cli_overrides(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/IcedBoutique/`
/// - macOS: `~/Library/Application Support/IcedBoutique/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedBoutique\`
///
/// Returns `None` if no directory can be determined.
pub fn get_config_dir() -> Option<PathBuf> {
    get_config_dir_with_override(None)
}

/// Returns the config directory path, honoring an explicit override first.
pub fn get_config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir);
    }

    if let Some(dir) = get_cli_config_dir() {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let explicit = PathBuf::from("/tmp/boutique-test-config");
        let resolved = get_config_dir_with_override(Some(explicit.clone()));
        assert_eq!(resolved, Some(explicit));
    }

    #[test]
    fn resolution_produces_a_non_empty_path() {
        // Other tests mutate the env override concurrently, so only assert
        // properties that hold for every resolution source.
        if let Some(dir) = get_config_dir() {
            assert!(!dir.as_os_str().is_empty());
        }
    }
}
