// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! The config directory is resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`CLOCK_CATALOG_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! Media sources such as `/assets/images/small/small1.jpeg` are web-style
//! locators; [`resolve_media_source`] maps them onto a media root directory.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "ClockCatalog";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CLOCK_CATALOG_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Only the first call has an effect; later calls are ignored with a warning.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// - Linux: `~/.config/ClockCatalog/`
/// - macOS: `~/Library/Application Support/ClockCatalog/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ClockCatalog\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Maps a media source locator onto a file under `media_root`.
///
/// A leading `/` is stripped so that site-absolute locators stay inside the
/// root. Forward slashes become path components on every platform. Empty,
/// `.` and `..` segments are dropped, so the result never leaves the root.
pub fn resolve_media_source(media_root: &Path, source: &str) -> PathBuf {
    source
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !matches!(*segment, "" | "." | ".."))
        .fold(media_root.to_path_buf(), |mut path, segment| {
            path.push(segment);
            path
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn media_source_is_joined_under_root() {
        let root = PathBuf::from("media");
        let resolved = resolve_media_source(&root, "/assets/images/small/small1.jpeg");
        assert_eq!(
            resolved,
            root.join("assets").join("images").join("small").join("small1.jpeg")
        );
    }

    #[test]
    fn relative_media_source_is_joined_as_is() {
        let root = PathBuf::from("media");
        assert_eq!(resolve_media_source(&root, "logo.png"), root.join("logo.png"));
    }

    #[test]
    fn parent_segments_cannot_escape_root() {
        let root = PathBuf::from("media");
        let resolved = resolve_media_source(&root, "/../../etc/./passwd");
        assert_eq!(resolved, root.join("etc").join("passwd"));
        assert!(resolved.starts_with(&root));

        assert_eq!(resolve_media_source(&root, "assets/.."), root.join("assets"));
    }
}
