// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and radius used by the storefront views.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes and responsive breakpoints
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use clock_catalog::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_PRESSED,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.012, 0.027, 0.071);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847);
    pub const PRIMARY_900: Color = Color::from_rgb(0.118, 0.227, 0.541);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Lightbox control buttons at rest.
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    /// Lightbox control buttons under the pointer.
    pub const OVERLAY_HOVER: f32 = 0.2;
    /// Thumbnail glyph veil.
    pub const OVERLAY_MEDIUM: f32 = 0.4;
    /// Lightbox backdrop.
    pub const OVERLAY_PRESSED: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Header logo edge.
    pub const LOGO: f32 = 40.0;
    /// Widest content column, like a centered page container.
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    /// Height of a product card cover.
    pub const CARD_COVER_HEIGHT: f32 = 280.0;
    /// Edge of the detail hero cover.
    pub const HERO_COVER: f32 = 420.0;
    /// Edge of a gallery thumbnail.
    pub const THUMBNAIL: f32 = 160.0;
    /// Feature bullet diameter.
    pub const BULLET: f32 = 8.0;

    // Responsive breakpoints (logical pixels)
    pub const BREAKPOINT_SM: f32 = 640.0;
    pub const BREAKPOINT_MD: f32 = 768.0;
    pub const BREAKPOINT_LG: f32 = 1024.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page banner.
    pub const DISPLAY: f32 = 40.0;

    /// Large title - Product name on the detail page
    pub const TITLE_LG: f32 = 32.0;

    /// Medium title - Card titles, prices
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Footer headings, sections
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Descriptions
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Caption - Counters, delivery notes
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Card and panel outlines.
    pub const WIDTH_SM: f32 = 1.0;

    /// Active tab underline.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SOFT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_HOVER);

    assert!(sizing::BREAKPOINT_SM < sizing::BREAKPOINT_MD);
    assert!(sizing::BREAKPOINT_MD < sizing::BREAKPOINT_LG);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
