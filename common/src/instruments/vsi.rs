//! Vertical speed indicator (variometer).
//!
//! A non-linear arc dial labeled at five key angles, a digital readout pod
//! (rectangle with a half-circle cap), and a hollow red trapezoid pointer
//! whose long axis lies on the radius at 12 degrees per unit of climb.
//!
//! The demo value sweeps at 0.1 units per tick (500 ms ticks) and reverses
//! direction whenever the next step would leave the -5..=+5 range, so the
//! value never overshoots. It is stored in integer tenths.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{
    BEZEL_SLATE,
    CARD_CHARCOAL,
    DIAL_EDGE,
    DIAL_SILVER,
    FACE_GRAPHITE,
    POD_NAVY,
    POD_OUTLINE,
    POINTER_RED,
};
use crate::config::FACE_CENTER;
use crate::instruments::Instrument;
use crate::primitives::{
    CircleClipped,
    dial_point,
    dial_point_offset,
    draw_arc_segments,
    draw_card,
    draw_closed_outline,
    draw_disc,
    draw_radial_tick,
    draw_ring,
};
use crate::styles::{CENTERED_MIDDLE, DIAL_STYLE_SILVER, LABEL_STYLE_ICE, LEFT_ALIGNED, VALUE_STYLE_ICE};

// =============================================================================
// Motion Constants
// =============================================================================

/// Speed step per tick, tenths of a unit (0.1 units).
const STEP_TENTHS: i32 = 1;

/// Oscillation bound, tenths of a unit (5.0 units).
const LIMIT_TENTHS: i32 = 50;

// =============================================================================
// Face Geometry
// =============================================================================

const BEZEL_RADIUS: u32 = 166;
const FACE_RADIUS: u32 = 154;

/// Dial angle per unit of vertical speed (zero sits at 270 degrees).
const DEG_PER_UNIT: f32 = 12.0;
const ZERO_ANGLE: f32 = 270.0;

/// Labeled marks: non-uniform dial angles for a non-linear scale.
const MAIN_MARKS: [(i32, &str); 5] =
    [(30, "10"), (150, "-10"), (210, "-5"), (270, "0"), (330, "5")];

const MAIN_TICK_INNER: f32 = 136.0;
const MINOR_TICK_INNER: f32 = 140.0;
const TICK_OUTER: f32 = 150.0;
const NUMERAL_RADIUS: f32 = 112.0;

/// Digital readout pod: rectangle with a half-circle cap on its left edge.
const POD_RECT_LEFT: i32 = 152;
const POD_TOP: i32 = 126;
const POD_BOTTOM: i32 = 226;
const POD_CAP_RADIUS: f32 = 50.0;

// =============================================================================
// State
// =============================================================================

/// Vertical speed indicator widget.
pub struct VerticalSpeedIndicator {
    tenths: i32,
    dir: i32,
}

impl VerticalSpeedIndicator {
    pub const fn new() -> Self {
        Self { tenths: 0, dir: 1 }
    }

    /// Current vertical speed in meters per second, -5.0..=5.0.
    pub fn speed_mps(&self) -> f32 {
        self.tenths as f32 / 10.0
    }
}

impl Default for VerticalSpeedIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for VerticalSpeedIndicator {
    const TICK_PERIOD_MS: u32 = 500;

    fn on_tick(&mut self) {
        if (self.tenths + self.dir * STEP_TENTHS).abs() > LIMIT_TENTHS {
            self.dir = -self.dir;
        }
        self.tenths += self.dir * STEP_TENTHS;
    }

    fn render<D>(&self, target: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_card(target, CARD_CHARCOAL);
        draw_disc(target, FACE_CENTER, BEZEL_RADIUS, BEZEL_SLATE);
        draw_disc(target, FACE_CENTER, FACE_RADIUS, FACE_GRAPHITE);
        draw_ring(target, FACE_CENTER, FACE_RADIUS, 5, DIAL_EDGE);

        let mut face = CircleClipped::new(target, FACE_CENTER, FACE_RADIUS as i32);
        draw_scale(&mut face);
        self.draw_readout_pod(&mut face);
        self.draw_pointer(&mut face);
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Labeled main marks plus minor ticks every 12 degrees along the scale
/// arc (150 to 390 degrees).
fn draw_scale<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    for (deg, label) in MAIN_MARKS {
        let angle = deg as f32;
        draw_radial_tick(display, FACE_CENTER, angle, MAIN_TICK_INNER, TICK_OUTER, 5, DIAL_SILVER);
        Text::with_text_style(
            label,
            dial_point(FACE_CENTER, angle, NUMERAL_RADIUS),
            DIAL_STYLE_SILVER,
            CENTERED_MIDDLE,
        )
        .draw(display)
        .ok();
    }

    let mut deg = 150;
    while deg < 390 {
        if !MAIN_MARKS.iter().any(|(main, _)| *main == deg) {
            draw_radial_tick(
                display,
                FACE_CENTER,
                deg as f32,
                MINOR_TICK_INNER,
                TICK_OUTER,
                2,
                DIAL_SILVER,
            );
        }
        deg += 12;
    }
}

impl VerticalSpeedIndicator {
    /// Digital readout: a navy pod capped by a half circle, the live value
    /// to one decimal, and a small VARIO caption.
    fn draw_readout_pod<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let cap_center = Point::new(POD_RECT_LEFT, (POD_TOP + POD_BOTTOM) / 2);
        draw_disc(display, cap_center, POD_CAP_RADIUS as u32, POD_NAVY);
        Rectangle::new(
            Point::new(POD_RECT_LEFT, POD_TOP),
            Size::new(208, (POD_BOTTOM - POD_TOP) as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(POD_NAVY))
        .draw(display)
        .ok();

        // Outline: straight top and bottom edges plus the left cap arc
        let edge = PrimitiveStyle::with_stroke(POD_OUTLINE, 2);
        Line::new(Point::new(POD_RECT_LEFT, POD_TOP), Point::new(360, POD_TOP))
            .into_styled(edge)
            .draw(display)
            .ok();
        Line::new(Point::new(POD_RECT_LEFT, POD_BOTTOM), Point::new(360, POD_BOTTOM))
            .into_styled(edge)
            .draw(display)
            .ok();
        draw_arc_segments(display, cap_center, POD_CAP_RADIUS, 180.0, 180.0, 12, 2, POD_OUTLINE);

        let mut text: String<16> = String::new();
        let _ = write!(text, "{:.1} m/s", self.speed_mps());
        Text::with_text_style(&text, Point::new(226, 176), VALUE_STYLE_ICE, CENTERED_MIDDLE)
            .draw(display)
            .ok();
        Text::with_text_style("VARIO", Point::new(162, 142), LABEL_STYLE_ICE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    /// Hollow red trapezoid pointer, long axis on the radius at
    /// `270 + 12 * speed` degrees.
    fn draw_pointer<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let angle = ZERO_ANGLE + self.speed_mps() * DEG_PER_UNIT;
        let outline = [
            dial_point_offset(FACE_CENTER, angle, TICK_OUTER, -4.0),
            dial_point_offset(FACE_CENTER, angle, TICK_OUTER, 4.0),
            dial_point_offset(FACE_CENTER, angle, 120.0, 8.0),
            dial_point_offset(FACE_CENTER, angle, 120.0, -8.0),
        ];
        draw_closed_outline(display, &outline, 4, POINTER_RED);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_stays_within_bounds() {
        let mut vsi = VerticalSpeedIndicator::new();
        for _ in 0..10_000 {
            vsi.on_tick();
            let speed = vsi.speed_mps();
            assert!((-5.0..=5.0).contains(&speed), "speed out of range: {speed}");
        }
    }

    #[test]
    fn test_speed_reverses_exactly_at_the_top() {
        let mut vsi = VerticalSpeedIndicator::new();
        // 0.1 per tick reaches +5.0 after exactly 50 ticks
        for _ in 0..50 {
            vsi.on_tick();
        }
        assert_eq!(vsi.speed_mps(), 5.0);
        vsi.on_tick();
        assert_eq!(vsi.speed_mps(), 4.9, "no overshoot past the bound");
    }

    #[test]
    fn test_speed_sweeps_to_the_bottom_and_back() {
        let mut vsi = VerticalSpeedIndicator::new();
        // Up (50) + down to the floor (100)
        for _ in 0..150 {
            vsi.on_tick();
        }
        assert_eq!(vsi.speed_mps(), -5.0);
        vsi.on_tick();
        assert_eq!(vsi.speed_mps(), -4.9);
    }

    #[test]
    fn test_step_size_is_one_tenth() {
        let mut vsi = VerticalSpeedIndicator::new();
        let mut prev = vsi.speed_mps();
        for _ in 0..200 {
            vsi.on_tick();
            let step = (vsi.speed_mps() - prev).abs();
            assert!((step - 0.1).abs() < 1e-6, "step was {step}");
            prev = vsi.speed_mps();
        }
    }
}
