// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Theme**: Theme mode used when nothing is configured
//! - **Catalog**: Where media sources are looked up

use crate::ui::theming::ThemeMode;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;

/// Initial window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;

/// Minimum window width. Narrow enough for the single-column home grid.
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 560;

// ==========================================================================
// Theme Defaults
// ==========================================================================

/// Theme mode applied on first launch.
pub const DEFAULT_THEME_MODE: ThemeMode = ThemeMode::Dark;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Directory that media sources are resolved against when none is configured.
/// Relative paths are taken from the working directory.
pub const DEFAULT_MEDIA_ROOT: &str = "public";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_window_fits_inside_default() {
        assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
        assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
    }

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(DEFAULT_THEME_MODE, ThemeMode::Dark);
    }
}
