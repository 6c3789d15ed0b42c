//! Face layout constants shared by all instruments.
//!
//! Per-instrument geometry (ring radii, hand lengths, label positions)
//! stays local to each instrument module; only the face envelope that the
//! host needs for grid layout lives here.

use embedded_graphics::prelude::{Point, Size};

/// Instrument face edge length in pixels. Every widget paints a square of
/// this size with its local origin at (0, 0).
pub const FACE_SIZE: u32 = 360;

/// Geometric center of a face.
pub const FACE_CENTER: Point = Point::new(180, 180);

/// Corner radii of the rounded instrument card.
pub const CARD_CORNER: Size = Size::new(30, 30);
