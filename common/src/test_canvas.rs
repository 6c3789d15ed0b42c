//! In-memory Rgb565 framebuffer for exercising render code in host tests.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;

/// A plain pixel buffer implementing [`DrawTarget`]. Out-of-bounds pixels
/// are silently dropped, matching a real display's edge behavior.
pub struct TestCanvas {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl TestCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![BLACK; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    pub fn data(&self) -> &[Rgb565] {
        &self.pixels
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for TestCanvas {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < self.size.width && (p.y as u32) < self.size.height
            {
                self.pixels[(p.y as u32 * self.size.width + p.x as u32) as usize] = color;
            }
        }
        Ok(())
    }
}
