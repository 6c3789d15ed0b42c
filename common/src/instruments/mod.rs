//! The four instrument widgets.
//!
//! - [`ArtificialHorizon`]: rolled/pitched sky-ground ball, pitch ladder,
//!   bank arc, fixed aircraft symbol
//! - [`Compass`]: rotating heading ring with a fixed needle and live readout
//! - [`Altimeter`]: three concentric hands over a 0-9 dial
//! - [`VerticalSpeedIndicator`]: non-linear arc dial with digital readout

pub mod altimeter;
pub mod compass;
pub mod horizon;
pub mod vsi;

pub use altimeter::Altimeter;
pub use compass::{Compass, compass_point};
pub use horizon::{ArtificialHorizon, RollPhase};
pub use vsi::VerticalSpeedIndicator;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Host-facing contract shared by every instrument.
///
/// The host owns the clock: it delivers ticks at [`TICK_PERIOD_MS`]
/// intervals (see [`crate::ticker::Ticker`]) and asks for a repaint
/// whenever it likes. `render` takes `&self` - painting is a pure function
/// of the current state, so repainting an unchanged instrument yields
/// identical pixels.
///
/// [`TICK_PERIOD_MS`]: Instrument::TICK_PERIOD_MS
pub trait Instrument {
    /// Fixed period between state-advancing ticks.
    const TICK_PERIOD_MS: u32;

    /// Advance internal state by one tick.
    fn on_tick(&mut self);

    /// Paint the complete 360x360 face for the current state.
    fn render<D>(&self, target: &mut D)
    where
        D: DrawTarget<Color = Rgb565>;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FACE_SIZE;
    use crate::test_canvas::TestCanvas;

    fn render_twice_matches<I: Instrument>(instrument: &I) {
        let mut first = TestCanvas::new(FACE_SIZE, FACE_SIZE);
        let mut second = TestCanvas::new(FACE_SIZE, FACE_SIZE);
        instrument.render(&mut first);
        instrument.render(&mut second);
        assert_eq!(first.data(), second.data(), "render must be pure in the state");
    }

    #[test]
    fn test_render_is_pure_for_all_instruments() {
        // Advance each instrument into a non-trivial state first
        let mut horizon = ArtificialHorizon::new();
        let mut compass = Compass::new();
        let mut altimeter = Altimeter::new();
        let mut vsi = VerticalSpeedIndicator::new();
        for _ in 0..500 {
            horizon.on_tick();
            compass.on_tick();
            altimeter.on_tick();
            vsi.on_tick();
        }

        render_twice_matches(&horizon);
        render_twice_matches(&compass);
        render_twice_matches(&altimeter);
        render_twice_matches(&vsi);
    }
}
