// SPDX-License-Identifier: MPL-2.0
//! Text glyph icons.
//!
//! Icons are single Unicode symbols rendered with advanced shaping, so
//! they pick up the current text color and need no bundled image files.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `chevron_left` not `previous_media`).

use iced::widget::text::{Shaping, Text};

macro_rules! define_icon {
    ($name:ident, $symbol:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name<'a>(size: f32) -> Text<'a> {
            glyph($symbol, size)
        }
    };
}

define_icon!(menu, "☰", "Hamburger menu.");
define_icon!(cross, "✕", "Close cross.");
define_icon!(chevron_left, "‹", "Left-pointing chevron.");
define_icon!(chevron_right, "›", "Right-pointing chevron.");
define_icon!(play, "▶", "Play triangle.");
define_icon!(maximize, "⤢", "Diagonal expand arrows.");
define_icon!(sun, "☀", "Sun, shown while the dark theme is active.");
define_icon!(moon, "☾", "Crescent moon, shown while the light theme is active.");
define_icon!(house, "⌂", "House outline.");
define_icon!(phone, "☎", "Telephone.");

fn glyph<'a>(symbol: &'a str, size: f32) -> Text<'a> {
    Text::new(symbol).size(size).shaping(Shaping::Advanced)
}
