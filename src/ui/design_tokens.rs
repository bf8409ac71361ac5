// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every visual constant of the application lives here, grouped by concern.

## Organization

- **Palette**: Base colors (neutral scale and the green brand scale)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (navigation bar, shutter, framing brackets)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use plant_identifier::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Dim the camera feed outside the scanning window
let dim = Color {
    a: opacity::SCAN_DIM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all screens
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// App background behind every light screen.
    pub const NEUTRAL_50: Color = Color::from_rgb(0.98, 0.98, 0.98);

    // Brand colors (green scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.86, 0.95, 0.91); // Mint wash
    pub const PRIMARY_200: Color = Color::from_rgb(0.68, 0.88, 0.79); // Light green
    pub const PRIMARY_400: Color = Color::from_rgb(0.16, 0.66, 0.50); // Medium light green
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.52, 0.39); // Brand green
    pub const PRIMARY_600: Color = Color::from_rgb(0.0, 0.43, 0.32); // Pressed green
    pub const PRIMARY_800: Color = Color::from_rgb(0.01, 0.22, 0.15); // Dark green text

    // Semantic colors
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const BORDER_SUBTLE: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Unselected navigation bar items.
    pub const NAV_IDLE: f32 = 0.34;
    /// Dimming outside the scanning window.
    pub const SCAN_DIM: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
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
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 48.0;
    pub const NAV_BAR_HEIGHT: f32 = 72.0;

    // Round camera controls
    pub const CAMERA_BUTTON: f32 = 64.0;
    pub const SHUTTER_BUTTON: f32 = 76.0;
    pub const ROUND_CONTROL: f32 = 44.0;

    // Onboarding page indicator
    pub const PAGE_DOT: f32 = 5.0;
    pub const PAGE_DOT_ACTIVE_WIDTH: f32 = 30.0;
    pub const ONBOARDING_BUTTON_WIDTH: f32 = 313.0;

    // Scanning step indicator
    pub const STEP_INDICATOR: f32 = 20.0;

    // Home feature cards
    pub const FEATURE_CARD_WIDTH: f32 = 160.0;
    pub const FEATURE_CARD_HEIGHT: f32 = 190.0;
    pub const DETAIL_HEADER_HEIGHT: f32 = 280.0;

    /// Default window size, a portrait phone-like surface.
    pub const WINDOW_WIDTH: f32 = 420.0;
    pub const WINDOW_HEIGHT: f32 = 860.0;
    pub const WINDOW_MIN_WIDTH: f32 = 360.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 640.0;
}

// ============================================================================
// Framing bracket geometry
// ============================================================================

pub mod brackets {
    /// Side of the square box each corner bracket is drawn in.
    pub const BOX: f32 = 70.0;
    /// Length of each bracket arm, corner included.
    pub const ARM: f32 = 50.0;
    /// Radius of the rounded corner.
    pub const CORNER_RADIUS: f32 = 15.0;
    pub const STROKE: f32 = 3.0;
    /// Frame side as a fraction of the shorter bounds side.
    pub const FRAME_FRACTION: f32 = 0.6;
    /// Scanning window side as a fraction of the shorter bounds side.
    pub const SCAN_WINDOW_FRACTION: f32 = 0.75;
    /// Upward shift of the frame centre on the camera screen.
    pub const CAMERA_LIFT: f32 = 40.0;
    /// Upward shift of the frame centre on the scanning screen.
    pub const SCAN_LIFT: f32 = 100.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: splash wordmark
    //! - Titles: screen and section headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    /// Splash initial letter.
    pub const DISPLAY_XL: f32 = 96.0;

    /// Splash wordmark letters.
    pub const DISPLAY: f32 = 32.0;

    /// Large title - Onboarding headlines, plant name
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - Screen headers
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Buttons, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, tab labels, legal text
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Care tags, separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Shutter ring, selected states
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 18.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.18),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCAN_DIM > 0.0 && opacity::SCAN_DIM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::SHUTTER_BUTTON > sizing::ROUND_CONTROL);

    // Bracket validation: the arm and corner must fit in the box
    assert!(brackets::ARM <= brackets::BOX);
    assert!(brackets::CORNER_RADIUS < brackets::ARM);
    assert!(brackets::SCAN_WINDOW_FRACTION > brackets::FRAME_FRACTION);

    // Typography validation
    assert!(typography::DISPLAY_XL > typography::DISPLAY);
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.g >= 0.0 && palette::PRIMARY_500.g <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_green_is_green() {
        let brand = palette::PRIMARY_500;
        assert!(brand.g > brand.r && brand.g > brand.b);
    }
}
