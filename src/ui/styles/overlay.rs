// SPDX-License-Identifier: MPL-2.0
//! Lightbox styles: backdrop, position counter and media surfaces.

use crate::ui::design_tokens::{opacity, palette::BLACK, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed backdrop covering the whole window.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            ColorScheme::for_theme(theme).overlay_background,
        )),
        ..Default::default()
    }
}

/// Style for the `n / total` position counter.
pub fn counter(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.overlay_text
        })),
        text_color: Some(colors.overlay_text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Playback surface shown in place of decoded video frames.
pub fn video_surface(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(colors.overlay_text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_HOVER,
                ..colors.overlay_text
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Veil over a thumbnail carrying the play/maximize glyph.
pub fn thumbnail_veil(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(ColorScheme::for_theme(theme).overlay_text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
