//! Compass (heading indicator).
//!
//! A fixed outer dial with 36 tick marks and interstitial dots, a fixed
//! needle pointing to the top of the dial, and direction/degree labels that
//! counter-rotate with the heading so they sit at their true bearings while
//! reading upright. A live readout in the dial center shows the numeric
//! heading and its 8-point compass direction.
//!
//! The demo heading sweeps at 0.08 degrees per tick and bounces at 0 and
//! 360 degrees. Heading is stored in integer hundredths of a degree so the
//! bounce is exact.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Triangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{CARD_CHARCOAL, RING_GRAY, TICK_LIME, WHITE};
use crate::config::FACE_CENTER;
use crate::instruments::Instrument;
use crate::primitives::{dial_point, draw_card, draw_radial_tick, draw_ring};
use crate::styles::{CARDINAL_STYLE, CENTERED_MIDDLE, LABEL_STYLE_WHITE, VALUE_STYLE_WHITE};

// =============================================================================
// Motion Constants
// =============================================================================

/// Heading step per tick, hundredths of a degree (0.08 deg).
const STEP_CENTIDEG: i32 = 8;

/// Upper heading bound, hundredths of a degree (360 deg).
const HEADING_LIMIT_CENTIDEG: i32 = 36_000;

// =============================================================================
// Face Geometry
// =============================================================================

const OUTER_RING_RADIUS: u32 = 156;
const DIAL_RING_RADIUS: u32 = 140;

/// Tick marks: 36 around the dial, every 10 degrees.
const TICK_COUNT: u32 = 36;
const TICK_INNER: f32 = 115.0;
const TICK_OUTER: f32 = 135.0;

/// Radii for the counter-rotating labels.
const CARDINAL_RADIUS: f32 = 95.0;
const DEGREE_RADIUS: f32 = 100.0;

/// The eight secondary degree labels (cardinal positions are lettered).
const DEGREE_LABELS: [(i32, &str); 8] = [
    (30, "30"),
    (60, "60"),
    (120, "120"),
    (150, "150"),
    (210, "210"),
    (240, "240"),
    (300, "300"),
    (330, "330"),
];

// =============================================================================
// Direction Table
// =============================================================================

/// Map a heading to the standard 8-point compass label.
///
/// Sectors are 22.5 degrees wide, centered on the cardinal and
/// intercardinal bearings, with half-open boundaries: 22.5 is already NE
/// while 22.4999 is still N.
pub fn compass_point(heading: f32) -> &'static str {
    if heading < 22.5 || heading >= 337.5 {
        "N"
    } else if heading < 67.5 {
        "NE"
    } else if heading < 112.5 {
        "E"
    } else if heading < 157.5 {
        "SE"
    } else if heading < 202.5 {
        "S"
    } else if heading < 247.5 {
        "SW"
    } else if heading < 292.5 {
        "W"
    } else {
        "NW"
    }
}

// =============================================================================
// State
// =============================================================================

/// Heading indicator widget.
pub struct Compass {
    heading_centideg: i32,
    dir: i32,
}

impl Compass {
    pub const fn new() -> Self {
        Self { heading_centideg: 0, dir: 1 }
    }

    /// Current heading in degrees, 0..=360.
    pub fn heading_degrees(&self) -> f32 {
        self.heading_centideg as f32 / 100.0
    }
}

impl Default for Compass {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for Compass {
    const TICK_PERIOD_MS: u32 = 30;

    fn on_tick(&mut self) {
        self.heading_centideg += STEP_CENTIDEG * self.dir;
        if self.heading_centideg >= HEADING_LIMIT_CENTIDEG || self.heading_centideg <= 0 {
            self.dir = -self.dir;
        }
    }

    fn render<D>(&self, target: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_card(target, CARD_CHARCOAL);
        draw_ring(target, FACE_CENTER, OUTER_RING_RADIUS, 5, RING_GRAY);
        draw_ring(target, FACE_CENTER, DIAL_RING_RADIUS, 5, RING_GRAY);

        draw_tick_ring(target);
        draw_needle(target);
        self.draw_rotating_labels(target);
        self.draw_readout(target);
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// 36 lime ticks with a small dot centered between each adjacent pair.
fn draw_tick_ring<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let step = 360.0 / TICK_COUNT as f32;
    for i in 0..TICK_COUNT {
        let angle = i as f32 * step;
        draw_radial_tick(display, FACE_CENTER, angle, TICK_INNER, TICK_OUTER, 4, TICK_LIME);

        let dot = dial_point(FACE_CENTER, angle + step / 2.0, TICK_INNER);
        Circle::with_center(dot, 4)
            .into_styled(PrimitiveStyle::with_fill(TICK_LIME))
            .draw(display)
            .ok();
    }
}

/// Fixed needle at the top of the dial; the ring of labels turns, not the
/// needle.
fn draw_needle<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let (cx, cy) = (FACE_CENTER.x, FACE_CENTER.y);
    Triangle::new(
        Point::new(cx, cy - 75),
        Point::new(cx - 10, cy - 55),
        Point::new(cx + 10, cy - 55),
    )
    .into_styled(PrimitiveStyle::with_fill(WHITE))
    .draw(display)
    .ok();
}

impl Compass {
    /// Cardinal letters and degree numbers placed at their true bearings:
    /// each label sits at dial angle `bearing - heading`, so the ring
    /// counter-rotates as the heading advances. Labels stay upright.
    fn draw_rotating_labels<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let heading = self.heading_degrees();

        for (i, letter) in ["N", "E", "S", "W"].iter().enumerate() {
            let angle = i as f32 * 90.0 - heading;
            let pos = dial_point(FACE_CENTER, angle, CARDINAL_RADIUS);
            Text::with_text_style(letter, pos, CARDINAL_STYLE, CENTERED_MIDDLE)
                .draw(display)
                .ok();
        }

        for (degrees, label) in DEGREE_LABELS {
            let angle = degrees as f32 - heading;
            let pos = dial_point(FACE_CENTER, angle, DEGREE_RADIUS);
            Text::with_text_style(label, pos, LABEL_STYLE_WHITE, CENTERED_MIDDLE)
                .draw(display)
                .ok();
        }
    }

    /// Live heading readout in the dial center, recomputed every frame.
    fn draw_readout<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let heading = self.heading_degrees();
        let mut text: String<16> = String::new();
        let _ = write!(text, "{heading:.1} {}", compass_point(heading));
        Text::with_text_style(&text, FACE_CENTER, VALUE_STYLE_WHITE, CENTERED_MIDDLE)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_point_sector_boundaries() {
        // Half-open sectors: the lower bound belongs to the next sector
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(22.4999), "N");
        assert_eq!(compass_point(22.5), "NE");
        assert_eq!(compass_point(67.4999), "NE");
        assert_eq!(compass_point(67.5), "E");
        assert_eq!(compass_point(112.5), "SE");
        assert_eq!(compass_point(157.5), "S");
        assert_eq!(compass_point(202.5), "SW");
        assert_eq!(compass_point(247.5), "W");
        assert_eq!(compass_point(292.5), "NW");
        assert_eq!(compass_point(337.4999), "NW");
        assert_eq!(compass_point(337.5), "N");
        assert_eq!(compass_point(359.9999), "N");
        assert_eq!(compass_point(360.0), "N");
    }

    #[test]
    fn test_compass_point_total_over_the_circle() {
        const LABELS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
        for tenth in 0..3600 {
            let heading = tenth as f32 / 10.0;
            let point = compass_point(heading);
            assert!(LABELS.contains(&point), "no label for heading {heading}");
        }
    }

    #[test]
    fn test_heading_reaches_the_top_and_reverses() {
        let mut compass = Compass::new();
        // 0.08 deg per tick reaches 360 after exactly 4500 ticks
        for _ in 0..4500 {
            compass.on_tick();
        }
        assert_eq!(compass.heading_degrees(), 360.0);
        compass.on_tick();
        assert_eq!(compass.heading_degrees(), 359.92);
    }

    #[test]
    fn test_heading_stays_in_range_over_full_cycles() {
        let mut compass = Compass::new();
        for _ in 0..20_000 {
            compass.on_tick();
            let heading = compass.heading_degrees();
            assert!((0.0..=360.0).contains(&heading), "heading out of range: {heading}");
        }
    }

    #[test]
    fn test_heading_bounces_at_zero() {
        let mut compass = Compass::new();
        // Up (4500) + down (4500) returns exactly to zero, then climbs again
        for _ in 0..9000 {
            compass.on_tick();
        }
        assert_eq!(compass.heading_degrees(), 0.0);
        compass.on_tick();
        assert_eq!(compass.heading_degrees(), 0.08);
    }
}
