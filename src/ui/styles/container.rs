// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Window background behind every page.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Header and footer bars.
pub fn bar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Dropdown menu panel.
pub fn menu(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Well behind covers and thumbnails while they load or when missing.
pub fn media_well(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Secondary text such as descriptions and notes.
pub fn muted(theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ColorScheme::for_theme(theme).text_secondary),
        ..Default::default()
    }
}

/// Prices and other brand-colored emphasis.
pub fn accent(theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ColorScheme::for_theme(theme).brand_primary),
        ..Default::default()
    }
}

/// Feature list bullet.
pub fn bullet(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            crate::ui::design_tokens::palette::PRIMARY_600,
        )),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Underline below the active media tab.
pub fn tab_indicator(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(if active {
                colors.brand_primary
            } else {
                colors.border
            })),
            ..Default::default()
        }
    }
}

/// Startup warning banner.
pub fn warning(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_tint)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
