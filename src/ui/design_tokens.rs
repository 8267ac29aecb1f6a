// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants of the lightbox and the demo gallery.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px steps)
- **Sizing**: Component sizes, including the viewer chrome
- **Typography**: Font size scale

## Examples

```
use iced_lightbox::ui::design_tokens::{opacity, palette, sizing};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Chrome eats both arrows horizontally
let reserved = sizing::ARROW_WIDTH * 2.0;
assert!(reserved > 0.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    // Icons
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Width of each navigation arrow column.
    pub const ARROW_WIDTH: f32 = 50.0;
    /// Height of the bar holding the set title and the close button.
    pub const TOP_BAR_HEIGHT: f32 = 50.0;
    /// Height of the bar holding description, pagination and fullscreen.
    pub const BOTTOM_BAR_HEIGHT: f32 = 40.0;

    /// Edge length of a thumbnail in the demo gallery.
    pub const THUMBNAIL: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - Gallery and set titles
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Pagination
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::SM > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_PRESSED);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ARROW_WIDTH > sizing::ICON_LG);
    assert!(sizing::THUMBNAIL > sizing::ARROW_WIDTH);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
