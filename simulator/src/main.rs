//! Desktop host for the flight instrument panel.
//!
//! Runs the four instruments in an SDL2 window via
//! `embedded-graphics-simulator`: a labeled 2x2 grid of 360x360 faces.
//! The host owns the clock - each frame it measures elapsed wall time,
//! feeds the per-instrument tickers, delivers the due `on_tick()` calls,
//! and repaints every face.
//!
//! Keys: Space pauses the simulation clock, Escape quits.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod timing;

use std::thread;
use std::time::{Duration, Instant};

use avionics_common::colors::BLACK;
use avionics_common::config::FACE_SIZE;
use avionics_common::styles::{LEFT_ALIGNED, MEDIUM_FONT};
use avionics_common::{
    Altimeter,
    ArtificialHorizon,
    Compass,
    Instrument,
    Ticker,
    VerticalSpeedIndicator,
};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::timing::FRAME_TIME;

// =============================================================================
// Panel Layout
// =============================================================================

const MARGIN: i32 = 20;
const GUTTER: i32 = 10;
const CAPTION_HEIGHT: i32 = 24;

const SCREEN_WIDTH: u32 = (MARGIN * 2 + GUTTER) as u32 + FACE_SIZE * 2;
const SCREEN_HEIGHT: u32 = (MARGIN * 2 + GUTTER + CAPTION_HEIGHT * 2) as u32 + FACE_SIZE * 2;

/// Caption text color (#888).
const CAPTION_GRAY: Rgb565 = Rgb565::new(17, 34, 17);

// =============================================================================
// Main Loop
// =============================================================================

fn main() {
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Aero Display", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // Instruments and their tick schedules
    let mut horizon = ArtificialHorizon::new();
    let mut compass = Compass::new();
    let mut altimeter = Altimeter::new();
    let mut vsi = VerticalSpeedIndicator::new();

    let mut horizon_ticker = Ticker::new(ArtificialHorizon::TICK_PERIOD_MS);
    let mut compass_ticker = Ticker::new(Compass::TICK_PERIOD_MS);
    let mut altimeter_ticker = Ticker::new(Altimeter::TICK_PERIOD_MS);
    let mut vsi_ticker = Ticker::new(VerticalSpeedIndicator::TICK_PERIOD_MS);

    let mut paused = false;
    let mut last_advance = Instant::now();

    'running: loop {
        let frame_start = Instant::now();

        // Handle events
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => break 'running,
                        Keycode::Space => paused = !paused,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Deliver due ticks; only whole milliseconds are consumed, the
        // fractional remainder stays in `last_advance`
        if paused {
            last_advance = Instant::now();
        } else {
            let elapsed_ms = last_advance.elapsed().as_millis() as u32;
            if elapsed_ms > 0 {
                last_advance += Duration::from_millis(u64::from(elapsed_ms));
                for _ in 0..horizon_ticker.advance(elapsed_ms) {
                    horizon.on_tick();
                }
                for _ in 0..compass_ticker.advance(elapsed_ms) {
                    compass.on_tick();
                }
                for _ in 0..altimeter_ticker.advance(elapsed_ms) {
                    altimeter.on_tick();
                }
                for _ in 0..vsi_ticker.advance(elapsed_ms) {
                    vsi.on_tick();
                }
            }
        }

        // Repaint the whole panel
        display.clear(BLACK).ok();
        draw_cell(&mut display, 0, 0, "ARTIFICIAL HORIZON", &horizon);
        draw_cell(&mut display, 1, 0, "COMPASS", &compass);
        draw_cell(&mut display, 0, 1, "ALTIMETER", &altimeter);
        draw_cell(&mut display, 1, 1, "VERTICAL SPEED", &vsi);

        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME - pre_sleep);
        }
    }
}

/// Draw one grid cell: caption strip plus the instrument face below it.
fn draw_cell<I>(
    display: &mut SimulatorDisplay<Rgb565>,
    col: i32,
    row: i32,
    caption: &str,
    instrument: &I,
) where
    I: Instrument,
{
    let x = MARGIN + col * (FACE_SIZE as i32 + GUTTER);
    let y = MARGIN + CAPTION_HEIGHT + row * (FACE_SIZE as i32 + GUTTER + CAPTION_HEIGHT);

    Text::with_text_style(
        caption,
        Point::new(x + 10, y - 8),
        MonoTextStyle::new(MEDIUM_FONT, CAPTION_GRAY),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    let mut face = display.translated(Point::new(x, y));
    instrument.render(&mut face);
}
