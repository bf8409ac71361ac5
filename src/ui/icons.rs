// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single Unicode glyphs rendered as text, so they follow the
//! surrounding text color and need no bundled image assets. Font fallback
//! picks a system font that carries the glyph.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let close = button(icons::sized(icons::cross(), 20.0));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_camera`).

use crate::catalog::DetailKind;
use crate::ui::design_tokens::sizing;
use iced::widget::Text;

macro_rules! define_icon {
    ($name:ident, $glyph:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name<'a>() -> Text<'a> {
            Text::new($glyph).size(sizing::ICON_MD)
        }
    };
}

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(house, "\u{2302}", "House: home tab.");
define_icon!(stethoscope, "\u{271A}", "Cross in a circle: diagnose tab.");
define_icon!(person, "\u{263A}", "Smiling face: experts tab.");
define_icon!(flower, "\u{2740}", "Flower: garden tab.");
define_icon!(camera, "\u{25C9}", "Fisheye: camera button.");

// =============================================================================
// Header Icons
// =============================================================================

define_icon!(magnifier, "\u{2315}", "Magnifier: search.");
define_icon!(ellipsis, "\u{22EF}", "Horizontal ellipsis: more options.");
define_icon!(star, "\u{2605}", "Filled star: PRO badge.");
define_icon!(chevron_left, "\u{2039}", "Single left angle: back.");
define_icon!(chevron_down, "\u{25BE}", "Small down triangle: collapsed section.");
define_icon!(chevron_up, "\u{25B4}", "Small up triangle: expanded section.");
define_icon!(plus, "+", "Plus sign: add.");

// =============================================================================
// Camera Icons
// =============================================================================

define_icon!(cross, "\u{2715}", "Multiplication cross: close.");
define_icon!(bolt, "\u{03DF}", "Lightning bolt: flash on.");
define_icon!(bolt_slash, "\u{2300}", "Slashed circle: flash off.");
define_icon!(rotate, "\u{27F2}", "Anticlockwise arrow: switch camera.");
define_icon!(photos, "\u{25A6}", "Square grid: photo library.");

// =============================================================================
// Care Icons
// =============================================================================

define_icon!(thermometer, "\u{00B0}", "Degree sign: temperature.");
define_icon!(sun, "\u{2600}", "Sun: sunlight.");
define_icon!(droplet, "\u{25CD}", "Circle with fill: watering.");
define_icon!(bug, "\u{2042}", "Asterism: pests.");
define_icon!(pot, "\u{2294}", "Square cup: repotting.");
define_icon!(leaf, "\u{2766}", "Floral heart: fertilizing and care tools.");
define_icon!(bell, "\u{237E}", "Bell symbol: reminders.");
define_icon!(warning, "\u{26A0}", "Warning sign: health alert.");
define_icon!(sparkles, "\u{2726}", "Four-pointed star: fun facts.");
define_icon!(bulb, "\u{2600}", "Sun: light meter.");

/// Icon for a row of the plant details card.
#[must_use]
pub fn detail<'a>(kind: DetailKind) -> Text<'a> {
    match kind {
        DetailKind::Temperature => thermometer(),
        DetailKind::Sunlight => sun(),
        DetailKind::Water => droplet(),
        DetailKind::Pests => bug(),
        DetailKind::Repotting => pot(),
        DetailKind::Fertilizing => leaf(),
    }
}

/// Resizes an icon.
#[must_use]
pub fn sized<'a>(icon: Text<'a>, size: f32) -> Text<'a> {
    icon.size(size)
}
