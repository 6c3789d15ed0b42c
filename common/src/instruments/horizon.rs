//! Artificial horizon (attitude indicator).
//!
//! The face shows a sky/ground ball rotated by roll and shifted by pitch,
//! a pitch ladder that fades toward the rim, a bank arc with a moving roll
//! pointer, and a fixed yellow aircraft reference symbol.
//!
//! # Demo Motion
//!
//! Pitch oscillates between -30 and +30 degrees at 0.2 degrees per tick.
//! Roll idles level; every 10 seconds a cycle runs 0 -> +20 -> -20 -> 0 at
//! 0.2 degrees per tick, then the idle countdown restarts. The countdown
//! only runs while idle, so a cycle can never be re-triggered mid-flight.
//!
//! Angles are stored in integer tenths of a degree so the oscillation
//! bounds are exact.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, Triangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{
    BEZEL_GRAY,
    BLACK,
    CARD_CHARCOAL,
    FLAG_GRAY,
    GROUND_BROWN,
    HORIZON_GRAY,
    RED,
    SKY_BLUE,
    WHITE,
    YELLOW,
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
    draw_radial_tick,
    draw_ring,
    fill_quad,
    lerp_rgb565,
    rotate_about,
    rotation,
};
use crate::styles::{CENTERED_MIDDLE, LABEL_FONT, MEDIUM_FONT};

// =============================================================================
// Motion Constants
// =============================================================================

/// Pitch/roll step per tick, tenths of a degree (0.2 deg).
const STEP_TENTHS: i32 = 2;

/// Pitch oscillation bound, tenths of a degree (30 deg).
const PITCH_LIMIT_TENTHS: i32 = 300;

/// Roll cycle bound, tenths of a degree (20 deg).
const ROLL_LIMIT_TENTHS: i32 = 200;

/// Idle ticks before a roll cycle triggers (10 s at 30 ms).
const ROLL_TRIGGER_TICKS: u32 = 10_000 / ArtificialHorizon::TICK_PERIOD_MS;

// ALT flag cadence: blink for 5 s out of every 15 s, toggling roughly
// every 500 ms (16 ticks = 480 ms; the period is not a tick multiple).
const BLINK_CYCLE_TICKS: u32 = 15_000 / ArtificialHorizon::TICK_PERIOD_MS;
const BLINK_WINDOW_TICKS: u32 = 5_000 / ArtificialHorizon::TICK_PERIOD_MS;
const BLINK_TOGGLE_TICKS: u32 = 16;

// =============================================================================
// Face Geometry
// =============================================================================

/// Bezel ring radius.
const BEZEL_RADIUS: u32 = 162;

/// Circular clip window radius for the ball and ladder.
const FACE_RADIUS: i32 = 160;

/// Vertical pixels per degree of pitch.
const PITCH_PX_PER_DEG: f32 = 6.0;

/// Ladder rungs fade once their distance from center passes 55% of the
/// face radius, reaching zero at the rim.
const FADE_START: f32 = FACE_RADIUS as f32 * 0.55;

/// Half-length of an unfaded 10-degree ladder rung.
const RUNG_HALF_LEN: f32 = 34.0;

/// Bank arc radius and tick extent.
const BANK_ARC_RADIUS: f32 = 150.0;
const BANK_TICK_OUTER: f32 = 158.0;

// =============================================================================
// State
// =============================================================================

/// Phase of the periodic roll demonstration cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RollPhase {
    /// Wings level, counting down to the next cycle.
    #[default]
    Idle,
    /// Rolling from level to +20 degrees.
    RollingRight,
    /// Rolling from +20 to -20 degrees.
    RollingLeft,
    /// Returning from -20 degrees to level.
    Centering,
}

/// Attitude indicator widget.
pub struct ArtificialHorizon {
    pitch_tenths: i32,
    pitch_dir: i32,
    roll_tenths: i32,
    phase: RollPhase,
    idle_ticks: u32,
    blink_ticks: u32,
}

impl ArtificialHorizon {
    pub const fn new() -> Self {
        Self {
            pitch_tenths: 0,
            pitch_dir: 1,
            roll_tenths: 0,
            phase: RollPhase::Idle,
            idle_ticks: 0,
            blink_ticks: 0,
        }
    }

    /// Current roll (bank) angle in degrees.
    pub fn roll_degrees(&self) -> f32 {
        self.roll_tenths as f32 / 10.0
    }

    /// Current pitch angle in degrees.
    pub fn pitch_degrees(&self) -> f32 {
        self.pitch_tenths as f32 / 10.0
    }

    /// Current phase of the roll cycle.
    pub const fn phase(&self) -> RollPhase {
        self.phase
    }

    /// Whether the decorative ALT flag is lit this frame. The flag blinks
    /// during the last 5 seconds of every 15 second cycle.
    pub const fn alert_blink_on(&self) -> bool {
        let window_start = BLINK_CYCLE_TICKS - BLINK_WINDOW_TICKS;
        self.blink_ticks >= window_start
            && ((self.blink_ticks - window_start) / BLINK_TOGGLE_TICKS) % 2 == 0
    }

    fn advance_roll(&mut self) {
        match self.phase {
            RollPhase::Idle => {
                self.idle_ticks += 1;
                if self.idle_ticks >= ROLL_TRIGGER_TICKS {
                    self.idle_ticks = 0;
                    self.phase = RollPhase::RollingRight;
                }
            }
            RollPhase::RollingRight => {
                self.roll_tenths += STEP_TENTHS;
                if self.roll_tenths >= ROLL_LIMIT_TENTHS {
                    self.phase = RollPhase::RollingLeft;
                }
            }
            RollPhase::RollingLeft => {
                self.roll_tenths -= STEP_TENTHS;
                if self.roll_tenths <= -ROLL_LIMIT_TENTHS {
                    self.phase = RollPhase::Centering;
                }
            }
            RollPhase::Centering => {
                self.roll_tenths += STEP_TENTHS;
                if self.roll_tenths >= 0 {
                    self.roll_tenths = 0;
                    self.phase = RollPhase::Idle;
                }
            }
        }
    }

    fn advance_pitch(&mut self) {
        self.pitch_tenths += STEP_TENTHS * self.pitch_dir;
        if self.pitch_tenths >= PITCH_LIMIT_TENTHS || self.pitch_tenths <= -PITCH_LIMIT_TENTHS {
            self.pitch_dir = -self.pitch_dir;
        }
    }
}

impl Default for ArtificialHorizon {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for ArtificialHorizon {
    const TICK_PERIOD_MS: u32 = 30;

    fn on_tick(&mut self) {
        self.advance_roll();
        self.advance_pitch();
        self.blink_ticks = (self.blink_ticks + 1) % BLINK_CYCLE_TICKS;
    }

    fn render<D>(&self, target: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_card(target, CARD_CHARCOAL);
        draw_ring(target, FACE_CENTER, BEZEL_RADIUS, 5, BEZEL_GRAY);

        {
            let mut face = CircleClipped::new(target, FACE_CENTER, FACE_RADIUS);
            self.draw_ball(&mut face);
            self.draw_pitch_ladder(&mut face);
            self.draw_bank_arc(&mut face);
            draw_aircraft_symbol(&mut face);
        }

        self.draw_alt_flag(target);
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl ArtificialHorizon {
    /// Sky and ground halves, split at the pitch-shifted horizon line and
    /// rotated by roll about the face center.
    fn draw_ball<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let (cx, cy) = (FACE_CENTER.x, FACE_CENTER.y);
        let horizon_y = cy - (self.pitch_degrees() * PITCH_PX_PER_DEG) as i32;

        // Quads overscan the face so they stay full-bleed under any
        // combination of roll and pitch offset.
        let half_w = 360;
        let depth = 540;
        let rot = rotation(self.roll_degrees());

        let sky = [
            Point::new(cx - half_w, horizon_y - depth),
            Point::new(cx + half_w, horizon_y - depth),
            Point::new(cx + half_w, horizon_y),
            Point::new(cx - half_w, horizon_y),
        ]
        .map(|p| rotate_about(p, FACE_CENTER, rot));

        let ground = [
            Point::new(cx - half_w, horizon_y),
            Point::new(cx + half_w, horizon_y),
            Point::new(cx + half_w, horizon_y + depth),
            Point::new(cx - half_w, horizon_y + depth),
        ]
        .map(|p| rotate_about(p, FACE_CENTER, rot));

        fill_quad(display, sky, SKY_BLUE);
        fill_quad(display, ground, GROUND_BROWN);

        // Separator on the horizon line itself
        Line::new(ground[0], ground[1])
            .into_styled(PrimitiveStyle::with_stroke(HORIZON_GRAY, 1))
            .draw(display)
            .ok();
    }

    /// Ladder rungs every 2.5 degrees: long and labeled every 10, medium
    /// every 5, short otherwise. Length and brightness fade together past
    /// [`FADE_START`], so rungs vanish before reaching the rim.
    fn draw_pitch_ladder<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let (cx, cy) = (FACE_CENTER.x, FACE_CENTER.y);
        let pitch = self.pitch_degrees();
        let horizon_y = cy - (pitch * PITCH_PX_PER_DEG) as i32;

        for i in 0..25 {
            let rung_deg = -30.0 + 2.5 * i as f32;
            let y = cy - ((rung_deg + pitch) * PITCH_PX_PER_DEG) as i32;

            let distance = (y - cy).abs() as f32;
            let fade = if distance < FADE_START {
                1.0
            } else {
                1.0 - (distance - FADE_START) / (FACE_RADIUS as f32 - FADE_START)
            };
            if fade <= 0.0 {
                continue;
            }

            let backdrop = if y < horizon_y { SKY_BLUE } else { GROUND_BROWN };
            let color = lerp_rgb565(backdrop, WHITE, fade);

            let scale = match i % 4 {
                0 => 1.0,
                2 => 1.0 / 1.5,
                _ => 0.5,
            };
            let half_len = (RUNG_HALF_LEN * fade * scale) as i32;
            if half_len < 1 {
                continue;
            }

            Line::new(Point::new(cx - half_len, y), Point::new(cx + half_len, y))
                .into_styled(PrimitiveStyle::with_stroke(color, 2))
                .draw(display)
                .ok();

            if i % 4 == 0 {
                let style = MonoTextStyle::new(LABEL_FONT, color);
                let mut label: String<4> = String::new();
                let _ = write!(label, "{:>3}", rung_deg as i32);
                for x in [cx - 52, cx + 52] {
                    Text::with_text_style(&label, Point::new(x, y), style, CENTERED_MIDDLE)
                        .draw(display)
                        .ok();
                }
            }
        }
    }

    /// Fixed bank arc with ticks every 10 degrees (triangle at zero) and
    /// the moving roll pointer.
    fn draw_bank_arc<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_arc_segments(display, FACE_CENTER, BANK_ARC_RADIUS, -45.0, 90.0, 24, 2, WHITE);

        for deg in [-40, -30, -20, -10, 10, 20, 30, 40] {
            draw_radial_tick(
                display,
                FACE_CENTER,
                deg as f32,
                BANK_ARC_RADIUS,
                BANK_TICK_OUTER,
                3,
                WHITE,
            );
        }

        // Zero reference triangle at the top of the arc
        Triangle::new(
            dial_point(FACE_CENTER, 0.0, BANK_ARC_RADIUS),
            dial_point_offset(FACE_CENTER, 0.0, BANK_TICK_OUTER, -5.0),
            dial_point_offset(FACE_CENTER, 0.0, BANK_TICK_OUTER, 5.0),
        )
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();

        // Roll pointer: triangle tip riding just under the arc, trapezoid
        // body below it
        let roll = self.roll_degrees();
        Triangle::new(
            dial_point(FACE_CENTER, roll, BANK_ARC_RADIUS - 2.0),
            dial_point_offset(FACE_CENTER, roll, 138.0, -5.0),
            dial_point_offset(FACE_CENTER, roll, 138.0, 5.0),
        )
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
        fill_quad(
            display,
            [
                dial_point_offset(FACE_CENTER, roll, 136.0, -5.0),
                dial_point_offset(FACE_CENTER, roll, 136.0, 5.0),
                dial_point_offset(FACE_CENTER, roll, 128.0, 7.0),
                dial_point_offset(FACE_CENTER, roll, 128.0, -7.0),
            ],
            WHITE,
        );
    }

    /// Decorative ALT flag in the card corner; lights up red while the
    /// blink window is active.
    fn draw_alt_flag<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let color = if self.alert_blink_on() { RED } else { FLAG_GRAY };
        Rectangle::new(Point::new(20, 20), Size::new(50, 30))
            .into_styled(PrimitiveStyle::with_stroke(color, 2))
            .draw(display)
            .ok();
        Text::with_text_style(
            "ALT",
            Point::new(45, 35),
            MonoTextStyle::new(MEDIUM_FONT, color),
            CENTERED_MIDDLE,
        )
        .draw(display)
        .ok();
    }
}

/// Fixed yellow aircraft reference: two L-shaped wingtips and a center
/// square. Never rotates with the ball.
fn draw_aircraft_symbol<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let (cx, cy) = (FACE_CENTER.x, FACE_CENTER.y);
    let fill = PrimitiveStyle::with_fill(BLACK);

    for side in [-1, 1] {
        // Wing bar plus the downward tab forming the L
        let bar_left = if side < 0 { cx - 144 } else { cx + 74 };
        Rectangle::new(Point::new(bar_left, cy - 5), Size::new(70, 10))
            .into_styled(fill)
            .draw(display)
            .ok();
        let tab_left = if side < 0 { cx - 84 } else { cx + 74 };
        Rectangle::new(Point::new(tab_left, cy + 5), Size::new(10, 17))
            .into_styled(fill)
            .draw(display)
            .ok();

        let outline = [
            Point::new(cx + side * 144, cy - 5),
            Point::new(cx + side * 74, cy - 5),
            Point::new(cx + side * 74, cy + 22),
            Point::new(cx + side * 84, cy + 22),
            Point::new(cx + side * 84, cy + 5),
            Point::new(cx + side * 144, cy + 5),
        ];
        draw_closed_outline(display, &outline, 3, YELLOW);
    }

    Rectangle::new(Point::new(cx - 5, cy - 5), Size::new(10, 10))
        .into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(BLACK)
                .stroke_color(YELLOW)
                .stroke_width(3)
                .build(),
        )
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_oscillates_within_bounds() {
        let mut horizon = ArtificialHorizon::new();
        for _ in 0..20_000 {
            horizon.on_tick();
            let pitch = horizon.pitch_degrees();
            assert!((-30.0..=30.0).contains(&pitch), "pitch out of range: {pitch}");
        }
    }

    #[test]
    fn test_pitch_flips_exactly_at_boundary() {
        let mut horizon = ArtificialHorizon::new();
        // 0.2 deg per tick reaches +30 after exactly 150 ticks
        for _ in 0..150 {
            horizon.on_tick();
        }
        assert_eq!(horizon.pitch_degrees(), 30.0);
        horizon.on_tick();
        assert_eq!(horizon.pitch_degrees(), 29.8, "one step back after the flip");
    }

    #[test]
    fn test_roll_idles_until_trigger() {
        let mut horizon = ArtificialHorizon::new();
        for _ in 0..332 {
            horizon.on_tick();
        }
        assert_eq!(horizon.phase(), RollPhase::Idle);
        assert_eq!(horizon.roll_degrees(), 0.0);
        horizon.on_tick();
        assert_eq!(horizon.phase(), RollPhase::RollingRight, "trigger after 10s of ticks");
    }

    #[test]
    fn test_roll_cycle_is_monotonic_and_returns_to_idle() {
        let mut horizon = ArtificialHorizon::new();
        let mut seen = std::vec::Vec::new();
        // 1100 ticks: one full cycle plus the start of the next
        for _ in 0..1_100 {
            horizon.on_tick();
            if seen.last() != Some(&horizon.phase()) {
                seen.push(horizon.phase());
            }
            let roll = horizon.roll_degrees();
            assert!((-20.0..=20.0).contains(&roll), "roll out of range: {roll}");
        }
        assert_eq!(
            seen,
            [
                RollPhase::Idle,
                RollPhase::RollingRight,
                RollPhase::RollingLeft,
                RollPhase::Centering,
                RollPhase::Idle,
                RollPhase::RollingRight,
            ],
            "phase order must be cyclic with no shortcuts"
        );
    }

    #[test]
    fn test_roll_returns_exactly_to_level() {
        let mut horizon = ArtificialHorizon::new();
        // Trigger (333) + up (100) + down (200) + center (100)
        for _ in 0..733 {
            horizon.on_tick();
        }
        assert_eq!(horizon.phase(), RollPhase::Idle);
        assert_eq!(horizon.roll_degrees(), 0.0);
    }

    #[test]
    fn test_alt_flag_blinks_only_in_window() {
        let mut horizon = ArtificialHorizon::new();
        for _ in 0..100 {
            horizon.on_tick();
        }
        assert!(!horizon.alert_blink_on(), "quiet during the first 10s");

        // Advance into the last 5s of the 15s cycle
        for _ in 100..400 {
            horizon.on_tick();
        }
        assert!(horizon.alert_blink_on(), "blink window active");

        // A toggle period later the flag is dark again
        for _ in 0..BLINK_TOGGLE_TICKS {
            horizon.on_tick();
        }
        assert!(!horizon.alert_blink_on(), "flag toggles off mid-window");
    }
}
