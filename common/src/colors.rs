//! Color constants for the instrument faces.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Custom constants below are 24-bit face colors quantized to 5-6-5
//! (component >> 3 / >> 2 / >> 3). Two pairs collapse under quantization
//! and share a constant: the #171717/#151515 card fills and the
//! #444/#454545 bezel grays.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black. Panel background and filled symbol interiors.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Dial numerals, hands, the compass needle.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure yellow. Aircraft reference symbol on the attitude indicator.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure red. Blinking ALT flag highlight.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// Face Colors (application-specific, quantized from 24-bit)
// =============================================================================

/// Sky half of the attitude ball (#4193F9).
pub const SKY_BLUE: Rgb565 = Rgb565::new(8, 36, 31);

/// Ground half of the attitude ball (#975B19).
pub const GROUND_BROWN: Rgb565 = Rgb565::new(18, 22, 3);

/// Horizon separator line (neutral gray).
pub const HORIZON_GRAY: Rgb565 = Rgb565::new(20, 40, 20);

/// Rounded instrument card fill (#171717 / #151515).
pub const CARD_CHARCOAL: Rgb565 = Rgb565::new(2, 5, 2);

/// Bezel and dial ring strokes (#444 / #454545).
pub const BEZEL_GRAY: Rgb565 = Rgb565::new(8, 17, 8);

/// Lighter ring stroke used by the compass (#555).
pub const RING_GRAY: Rgb565 = Rgb565::new(10, 21, 10);

/// Compass tick marks and inter-tick dots (#D9F054).
pub const TICK_LIME: Rgb565 = Rgb565::new(27, 60, 10);

/// Cardinal direction labels N/E/S/W (#FDF34D).
pub const CARDINAL_GOLD: Rgb565 = Rgb565::new(31, 60, 9);

/// VSI dial ticks and numerals (#B3C1C9).
pub const DIAL_SILVER: Rgb565 = Rgb565::new(22, 48, 25);

/// VSI digital readout text (#CBEAFB).
pub const READOUT_ICE: Rgb565 = Rgb565::new(25, 58, 31);

/// VSI pointer outline (#EA5132).
pub const POINTER_RED: Rgb565 = Rgb565::new(29, 20, 6);

/// VSI readout pod fill (#15161C).
pub const POD_NAVY: Rgb565 = Rgb565::new(2, 5, 3);

/// VSI readout pod outline (#AAA).
pub const POD_OUTLINE: Rgb565 = Rgb565::new(21, 42, 21);

/// VSI face disc fill (#1D1E21).
pub const FACE_GRAPHITE: Rgb565 = Rgb565::new(3, 7, 4);

/// VSI bezel disc fill (flat stand-in for the source's radial gradient).
pub const BEZEL_SLATE: Rgb565 = Rgb565::new(7, 14, 7);

/// VSI face disc edge stroke (#222).
pub const DIAL_EDGE: Rgb565 = Rgb565::new(4, 8, 4);

/// Resting ALT flag border and text (#333).
pub const FLAG_GRAY: Rgb565 = Rgb565::new(6, 12, 6);
