// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes and the persisted theme mode.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    /// Page background.
    pub surface_page: Color,
    /// Header, footer and cards.
    pub surface_primary: Color,
    /// Image wells behind media.
    pub surface_secondary: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    /// Soft brand tint used for the highlighted navigation entry.
    pub brand_tint: Color,

    // Lightbox
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::GRAY_50,
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_700,
            brand_tint: palette::PRIMARY_100,

            overlay_background: Color {
                a: opacity::OVERLAY_PRESSED,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_950,
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            border: palette::GRAY_800,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_600,
            brand_tint: palette::PRIMARY_900,

            overlay_background: Color {
                a: opacity::OVERLAY_PRESSED,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Scheme matching the effective darkness of an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Mode selected by the theme toggle: the opposite of what is shown now.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
