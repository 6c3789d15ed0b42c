//! Altimeter.
//!
//! A 0-9 dial read as hundreds of feet, with three concentric hands:
//! hundreds (one turn per 1000 ft), thousands (one turn per 10000 ft),
//! and ten-thousands (one turn per 100000 ft). Every hand is a continuous
//! function of the altitude - there are no detents; the three angles are
//! plain modular mappings that happen to share a hub.
//!
//! The demo altitude climbs 2 ft per tick and wraps to zero the tick it
//! would exceed 100000 ft.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, Triangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BEZEL_GRAY, BLACK, CARD_CHARCOAL, WHITE};
use crate::config::FACE_CENTER;
use crate::instruments::Instrument;
use crate::primitives::{dial_point, dial_point_offset, draw_card, draw_radial_tick, draw_ring};
use crate::styles::{CENTERED_MIDDLE, LABEL_FONT, MEDIUM_STYLE_WHITE, VALUE_STYLE_WHITE};

// =============================================================================
// Motion Constants
// =============================================================================

/// Climb rate in feet per tick.
const CLIMB_PER_TICK: u32 = 2;

/// Altitude wraps to zero once it would pass this.
const MAX_ALTITUDE_FT: u32 = 100_000;

// =============================================================================
// Face Geometry
// =============================================================================

const DIAL_RING_RADIUS: u32 = 154;

/// Major ticks every 36 degrees, numerals just inside them.
const MAJOR_TICK_INNER: f32 = 135.0;
const MINOR_TICK_INNER: f32 = 140.0;
const TICK_OUTER: f32 = 150.0;
const NUMERAL_RADIUS: f32 = 120.0;

/// Hand lengths.
const HUNDREDS_SHAFT: f32 = 114.0;
const THOUSANDS_THIN: f32 = 20.0;
const THOUSANDS_THICK: f32 = 80.0;
const TENTHOUSANDS_PROXIMAL: f32 = 75.0;
const TENTHOUSANDS_TIP: f32 = 150.0;

// =============================================================================
// Hand Angles
// =============================================================================

fn hundreds_hand_deg(altitude: u32) -> f32 {
    (altitude % 1_000) as f32 * 360.0 / 1_000.0
}

fn thousands_hand_deg(altitude: u32) -> f32 {
    (altitude % 10_000) as f32 * 360.0 / 10_000.0
}

fn ten_thousands_hand_deg(altitude: u32) -> f32 {
    (altitude % 100_000) as f32 * 360.0 / 100_000.0
}

// =============================================================================
// State
// =============================================================================

/// Altimeter widget.
pub struct Altimeter {
    altitude_ft: u32,
}

impl Altimeter {
    pub const fn new() -> Self {
        Self { altitude_ft: 0 }
    }

    /// Current altitude in feet, 0..=100000.
    pub const fn altitude_ft(&self) -> u32 {
        self.altitude_ft
    }
}

impl Default for Altimeter {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for Altimeter {
    const TICK_PERIOD_MS: u32 = 30;

    fn on_tick(&mut self) {
        self.altitude_ft += CLIMB_PER_TICK;
        if self.altitude_ft > MAX_ALTITUDE_FT {
            self.altitude_ft = 0;
        }
    }

    fn render<D>(&self, target: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_card(target, CARD_CHARCOAL);
        draw_ring(target, FACE_CENTER, DIAL_RING_RADIUS, 5, BEZEL_GRAY);

        draw_dial(target);
        draw_placard(target);

        self.draw_hundreds_hand(target);
        self.draw_thousands_hand(target);
        self.draw_ten_thousands_hand(target);
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Ten major ticks with 0-9 numerals and four minor ticks per interval.
fn draw_dial<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    for i in 0..10 {
        let angle = i as f32 * 36.0;
        draw_radial_tick(display, FACE_CENTER, angle, MAJOR_TICK_INNER, TICK_OUTER, 5, WHITE);

        let mut numeral: String<2> = String::new();
        let _ = write!(numeral, "{i}");
        Text::with_text_style(
            &numeral,
            dial_point(FACE_CENTER, angle, NUMERAL_RADIUS),
            VALUE_STYLE_WHITE,
            CENTERED_MIDDLE,
        )
        .draw(display)
        .ok();

        for j in 1..5 {
            let minor = angle + j as f32 * 7.2;
            draw_radial_tick(display, FACE_CENTER, minor, MINOR_TICK_INNER, TICK_OUTER, 2, WHITE);
        }
    }

    // Scale legend on the upper arc: "100 FEET" split around the zero
    let legend = MonoTextStyle::new(LABEL_FONT, WHITE);
    Text::with_text_style(
        "100",
        dial_point(FACE_CENTER, -20.0, 140.0),
        legend,
        CENTERED_MIDDLE,
    )
    .draw(display)
    .ok();
    Text::with_text_style(
        "FEET",
        dial_point(FACE_CENTER, 14.0, 140.0),
        legend,
        CENTERED_MIDDLE,
    )
    .draw(display)
    .ok();
}

/// "ALT" placard left of the hub.
fn draw_placard<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::new(120, 120), Size::new(60, 30))
        .into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(BEZEL_GRAY)
                .stroke_color(WHITE)
                .stroke_width(1)
                .build(),
        )
        .draw(display)
        .ok();
    Text::with_text_style("ALT", Point::new(150, 135), MEDIUM_STYLE_WHITE, CENTERED_MIDDLE)
        .draw(display)
        .ok();
}

impl Altimeter {
    /// Hundreds hand: long thick shaft with a pointed tip.
    fn draw_hundreds_hand<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let angle = hundreds_hand_deg(self.altitude_ft);
        Line::new(FACE_CENTER, dial_point(FACE_CENTER, angle, HUNDREDS_SHAFT))
            .into_styled(PrimitiveStyle::with_stroke(WHITE, 9))
            .draw(display)
            .ok();
        Triangle::new(
            dial_point(FACE_CENTER, angle, HUNDREDS_SHAFT + 14.0),
            dial_point_offset(FACE_CENTER, angle, HUNDREDS_SHAFT + 4.0, -4.0),
            dial_point_offset(FACE_CENTER, angle, HUNDREDS_SHAFT + 4.0, 4.0),
        )
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
    }

    /// Thousands hand: thin near the hub, thick over the outer two thirds.
    fn draw_thousands_hand<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let angle = thousands_hand_deg(self.altitude_ft);
        let elbow = dial_point(FACE_CENTER, angle, THOUSANDS_THIN);
        Line::new(FACE_CENTER, elbow)
            .into_styled(PrimitiveStyle::with_stroke(WHITE, 3))
            .draw(display)
            .ok();
        Line::new(elbow, dial_point(FACE_CENTER, angle, THOUSANDS_THICK))
            .into_styled(PrimitiveStyle::with_stroke(WHITE, 9))
            .draw(display)
            .ok();
    }

    /// Ten-thousands hand: two-tone bordered shaft reaching the rim, with a
    /// counterweight triangle near the tip.
    fn draw_ten_thousands_hand<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let angle = ten_thousands_hand_deg(self.altitude_ft);
        let elbow = dial_point(FACE_CENTER, angle, TENTHOUSANDS_PROXIMAL);
        let tip = dial_point(FACE_CENTER, angle, TENTHOUSANDS_TIP);

        // Bordered strokes: black underlay, then the white fill on top
        for (from, to, border, fill) in [
            (FACE_CENTER, elbow, 15, 6),
            (elbow, tip, 5, 3),
        ] {
            Line::new(from, to)
                .into_styled(PrimitiveStyle::with_stroke(BLACK, border))
                .draw(display)
                .ok();
            Line::new(from, to)
                .into_styled(PrimitiveStyle::with_stroke(WHITE, fill))
                .draw(display)
                .ok();
        }

        Triangle::new(
            dial_point(FACE_CENTER, angle, 116.0),
            dial_point_offset(FACE_CENTER, angle, 146.0, -15.0),
            dial_point_offset(FACE_CENTER, angle, 146.0, 15.0),
        )
        .into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(WHITE)
                .stroke_color(BLACK)
                .stroke_width(1)
                .build(),
        )
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
    fn test_altitude_climbs_two_feet_per_tick() {
        let mut altimeter = Altimeter::new();
        for k in 1..=1000u32 {
            altimeter.on_tick();
            assert_eq!(altimeter.altitude_ft(), 2 * k);
        }
    }

    #[test]
    fn test_altitude_reaches_max_then_wraps() {
        // End-to-end: 50,000 ticks from zero lands exactly on 100000
        let mut altimeter = Altimeter::new();
        for _ in 0..50_000 {
            altimeter.on_tick();
        }
        assert_eq!(altimeter.altitude_ft(), 100_000);

        // The next tick would exceed the limit, so it resets to zero
        altimeter.on_tick();
        assert_eq!(altimeter.altitude_ft(), 0);
    }

    #[test]
    fn test_altitude_never_exceeds_max() {
        let mut altimeter = Altimeter::new();
        for _ in 0..120_000 {
            altimeter.on_tick();
            assert!(altimeter.altitude_ft() <= MAX_ALTITUDE_FT);
        }
    }

    #[test]
    fn test_hand_angles_are_modular() {
        assert_eq!(hundreds_hand_deg(0), 0.0);
        assert_eq!(hundreds_hand_deg(500), 180.0);
        assert_eq!(hundreds_hand_deg(1_000), 0.0);
        assert_eq!(thousands_hand_deg(2_500), 90.0);
        assert_eq!(ten_thousands_hand_deg(50_000), 180.0);
    }

    #[test]
    fn test_hands_sweep_continuously_without_detents() {
        // 1500 ft is halfway between the 1 and 2 thousand marks: the
        // thousands hand must sit at 54 degrees, not snap to 36
        assert_eq!(thousands_hand_deg(1_500), 54.0);
        // Same for the ten-thousands hand between its marks
        assert_eq!(ten_thousands_hand_deg(15_000), 54.0);
    }
}
