// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action ("View Details", "Contact to Order", "Go to Home").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
        _ => palette::PRIMARY_600,
    };
    let shadow = match status {
        button::Status::Hovered => shadow::LG,
        _ => shadow::MD,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Borderless text button, e.g. "Back to Home" and header entries.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.text_primary,
        _ => colors.text_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navigation entry; `active` marks the entry of the current page.
pub fn nav(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let background = match (active, status) {
            (true, _) => Some(Background::Color(colors.brand_tint)),
            (false, button::Status::Hovered) => {
                Some(Background::Color(colors.surface_secondary))
            }
            _ => None,
        };

        button::Style {
            background,
            text_color: if active {
                colors.brand_primary
            } else {
                colors.text_secondary
            },
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Media tab header; the active tab is drawn in the brand color.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let text_color = if active {
            colors.brand_primary
        } else if status == button::Status::Hovered {
            colors.text_primary
        } else {
            colors.text_secondary
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Transparent wrapper turning a whole card or thumbnail into a button.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (border_color, shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (colors.brand_primary, shadow::LG),
        _ => (colors.border, shadow::MD),
    };

    button::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: colors.text_primary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow,
        snap: true,
    }
}

/// Round control floating over the lightbox backdrop.
pub fn overlay(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
        button::Status::Disabled => opacity::TRANSPARENT,
        button::Status::Active => opacity::OVERLAY_SUBTLE,
    };
    let text_color = match status {
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..colors.overlay_text
        },
        _ => colors.overlay_text,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
