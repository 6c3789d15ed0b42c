//! Low-level drawing primitives shared across instruments.
//!
//! Dial angles throughout this crate are measured in degrees, clockwise
//! from 12 o'clock, matching how the faces are read.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle,
    Line,
    PrimitiveStyle,
    Rectangle,
    RoundedRectangle,
    Triangle,
};

#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::{CARD_CORNER, FACE_SIZE};

// =============================================================================
// Dial Geometry
// =============================================================================

/// Point at `radius` pixels from `center` along a dial angle.
pub fn dial_point(center: Point, angle_deg: f32, radius: f32) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(
        center.x + (radius * rad.sin()).round() as i32,
        center.y - (radius * rad.cos()).round() as i32,
    )
}

/// Like [`dial_point`], shifted `perp` pixels perpendicular to the radius
/// (positive is the clockwise side). Used to build hand tips and pointer
/// outlines directly in radial coordinates.
pub fn dial_point_offset(center: Point, angle_deg: f32, radius: f32, perp: f32) -> Point {
    let rad = angle_deg.to_radians();
    let (s, c) = (rad.sin(), rad.cos());
    Point::new(
        center.x + (radius * s + perp * c).round() as i32,
        center.y + (-radius * c + perp * s).round() as i32,
    )
}

/// Sine and cosine of an angle in degrees, for rotating point sets with a
/// single trig evaluation.
pub fn rotation(angle_deg: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (rad.sin(), rad.cos())
}

/// Rotate `p` about `center` by a precomputed [`rotation`]. Positive angles
/// rotate clockwise on screen (y grows downward).
pub fn rotate_about(p: Point, center: Point, (sin_a, cos_a): (f32, f32)) -> Point {
    let x = (p.x - center.x) as f32;
    let y = (p.y - center.y) as f32;
    Point::new(
        center.x + (x * cos_a - y * sin_a).round() as i32,
        center.y + (x * sin_a + y * cos_a).round() as i32,
    )
}

// =============================================================================
// Color Helpers
// =============================================================================

/// Linear interpolation between two Rgb565 colors, `t` in [0, 1].
///
/// Stands in for alpha blending on an opaque 16-bit surface: fading
/// elements lerp toward their backdrop color instead of dropping opacity.
pub fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8;
    Rgb565::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

// =============================================================================
// Shared Shape Helpers
// =============================================================================

/// Fill the rounded instrument card that backs every face.
pub fn draw_card<D>(display: &mut D, fill: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::zero(), Size::new(FACE_SIZE, FACE_SIZE)),
        CARD_CORNER,
    )
    .into_styled(PrimitiveStyle::with_fill(fill))
    .draw(display)
    .ok();
}

/// Stroke a circular ring centered on `center`.
pub fn draw_ring<D>(display: &mut D, center: Point, radius: u32, width: u32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, radius * 2)
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
        .ok();
}

/// Fill a disc centered on `center`.
pub fn draw_disc<D>(display: &mut D, center: Point, radius: u32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, radius * 2)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Stroke a tick mark along the radius at a dial angle.
pub fn draw_radial_tick<D>(
    display: &mut D,
    center: Point,
    angle_deg: f32,
    r_inner: f32,
    r_outer: f32,
    width: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(
        dial_point(center, angle_deg, r_inner),
        dial_point(center, angle_deg, r_outer),
    )
    .into_styled(PrimitiveStyle::with_stroke(color, width))
    .draw(display)
    .ok();
}

/// Stroke a circular arc as short chord segments.
pub fn draw_arc_segments<D>(
    display: &mut D,
    center: Point,
    radius: f32,
    start_deg: f32,
    sweep_deg: f32,
    segments: u32,
    width: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, width);
    let step = sweep_deg / segments as f32;
    let mut prev = dial_point(center, start_deg, radius);
    for i in 1..=segments {
        let next = dial_point(center, start_deg + step * i as f32, radius);
        Line::new(prev, next).into_styled(style).draw(display).ok();
        prev = next;
    }
}

/// Fill a convex quadrilateral as two triangles. Corners in winding order.
pub fn fill_quad<D>(display: &mut D, corners: [Point; 4], color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_fill(color);
    Triangle::new(corners[0], corners[1], corners[2]).into_styled(style).draw(display).ok();
    Triangle::new(corners[0], corners[2], corners[3]).into_styled(style).draw(display).ok();
}

/// Stroke a closed polygon outline through `points`.
pub fn draw_closed_outline<D>(display: &mut D, points: &[Point], width: u32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, width);
    for i in 0..points.len() {
        Line::new(points[i], points[(i + 1) % points.len()])
            .into_styled(style)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Circular Clipping
// =============================================================================

/// Draw target adapter that discards pixels outside a circular window.
///
/// The rotated sky/ground ball and the pitch ladder paint full-bleed
/// geometry; wrapping the target in `CircleClipped` confines them to the
/// dial opening the same way the source clipped to an elliptical path.
/// Only `draw_iter` is overridden - the provided fill/clear methods all
/// funnel through it.
pub struct CircleClipped<'a, D> {
    parent: &'a mut D,
    center: Point,
    radius: i32,
}

impl<'a, D> CircleClipped<'a, D>
where
    D: DrawTarget,
{
    pub fn new(parent: &'a mut D, center: Point, radius: i32) -> Self {
        Self { parent, center, radius }
    }
}

impl<D> Dimensions for CircleClipped<'_, D>
where
    D: DrawTarget,
{
    fn bounding_box(&self) -> Rectangle {
        let diameter = self.radius as u32 * 2;
        Rectangle::new(
            Point::new(self.center.x - self.radius, self.center.y - self.radius),
            Size::new(diameter, diameter),
        )
    }
}

impl<D> DrawTarget for CircleClipped<'_, D>
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let center = self.center;
        let r_sq = self.radius * self.radius;
        self.parent.draw_iter(pixels.into_iter().filter(|pixel| {
            let d = pixel.0 - center;
            d.x * d.x + d.y * d.y <= r_sq
        }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::test_canvas::TestCanvas;

    #[test]
    fn test_dial_point_compass_points() {
        let c = Point::new(100, 100);
        assert_eq!(dial_point(c, 0.0, 50.0), Point::new(100, 50), "0 degrees is straight up");
        assert_eq!(dial_point(c, 90.0, 50.0), Point::new(150, 100), "90 degrees is right");
        assert_eq!(dial_point(c, 180.0, 50.0), Point::new(100, 150), "180 degrees is down");
        assert_eq!(dial_point(c, 270.0, 50.0), Point::new(50, 100), "270 degrees is left");
    }

    #[test]
    fn test_dial_point_offset_is_perpendicular() {
        let c = Point::new(100, 100);
        // At 0 degrees (up), positive perp shifts right
        assert_eq!(dial_point_offset(c, 0.0, 50.0, 10.0), Point::new(110, 50));
        // At 90 degrees (right), positive perp shifts down
        assert_eq!(dial_point_offset(c, 90.0, 50.0, 10.0), Point::new(150, 110));
    }

    #[test]
    fn test_rotate_about_quarter_turn() {
        let c = Point::new(0, 0);
        let rot = rotation(90.0);
        // Screen-clockwise: a point above the center moves to the right
        let p = rotate_about(Point::new(0, -10), c, rot);
        assert!((p.x - 10).abs() <= 1 && p.y.abs() <= 1, "expected (10, 0), got {p:?}");
    }

    #[test]
    fn test_rotate_about_zero_is_identity() {
        let c = Point::new(7, 9);
        let rot = rotation(0.0);
        assert_eq!(rotate_about(Point::new(20, -3), c, rot), Point::new(20, -3));
    }

    #[test]
    fn test_lerp_rgb565_endpoints() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, 0.0), BLACK);
        assert_eq!(lerp_rgb565(BLACK, WHITE, 1.0), WHITE);
    }

    #[test]
    fn test_lerp_rgb565_midpoint() {
        let mid = lerp_rgb565(BLACK, WHITE, 0.5);
        assert!(mid.r() > 10 && mid.r() < 20, "red near midpoint, got {}", mid.r());
        assert!(mid.g() > 25 && mid.g() < 40, "green near midpoint, got {}", mid.g());
    }

    #[test]
    fn test_circle_clipped_discards_outside_pixels() {
        let mut canvas = TestCanvas::new(40, 40);
        let center = Point::new(20, 20);
        {
            let mut clipped = CircleClipped::new(&mut canvas, center, 10);
            Rectangle::new(Point::zero(), Size::new(40, 40))
                .into_styled(PrimitiveStyle::with_fill(WHITE))
                .draw(&mut clipped)
                .unwrap();
        }
        assert_eq!(canvas.pixel(20, 20), WHITE, "center is inside the clip");
        assert_eq!(canvas.pixel(20, 11), WHITE, "just inside the radius");
        assert_eq!(canvas.pixel(0, 0), BLACK, "corner is clipped");
        assert_eq!(canvas.pixel(20, 5), BLACK, "beyond the radius is clipped");
    }
}
