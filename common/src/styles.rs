//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible, so every style
//! an instrument needs is computed at compile time and lives in the
//! binary's read-only data. Styles that need a dynamic color (the fading
//! pitch-ladder labels, the blinking ALT flag) build a `MonoTextStyle` from
//! the exposed font references instead - only the color varies, the font
//! reference is shared.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{CARDINAL_GOLD, DIAL_SILVER, READOUT_ICE, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Horizontally centered, anchored on the text baseline.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Horizontally and vertically centered. Used for dial numerals and
/// readouts positioned by their geometric center.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned. Used for the VARIO caption and panel captions.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels). Pitch-ladder labels, degree labels,
/// scale legends.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Medium font (10x20 pixels). ALT flag and panel captions.
pub const MEDIUM_FONT: &MonoFont = &FONT_10X20;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small white text on dark faces.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small silver text for the VSI pod caption.
pub const LABEL_STYLE_ICE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, READOUT_ICE);

/// Medium white text ("ALT" placard).
pub const MEDIUM_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Gold cardinal letters on the compass ring (`ProFont` 18pt).
pub const CARDINAL_STYLE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_18_POINT, CARDINAL_GOLD);

/// Silver numerals on the VSI dial (`ProFont` 18pt).
pub const DIAL_STYLE_SILVER: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_18_POINT, DIAL_SILVER);

/// Large white numerals on the altimeter dial (`ProFont` 24pt).
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Large ice-blue readout text for the VSI pod (`ProFont` 24pt).
pub const VALUE_STYLE_ICE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_24_POINT, READOUT_ICE);
