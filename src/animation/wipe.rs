//! Rainbow wipe
//!
//! Six color bands, each one strip long, scroll across the strip. Inside a
//! band the brightness falls off quadratically from the wavefront, leaving a
//! dark tail. One full run is `6 * N` steps and updates every LED per step.

use embassy_time::Duration;

use super::{Frame, LedUpdate};
use crate::color::{Rgb, WIPE_PALETTE, scale};

/// Color of LED `index` at step `step` on a strip of `led_count` LEDs
///
/// Pure function of its inputs. Channels are truncated, not rounded.
#[allow(clippy::cast_precision_loss)]
pub fn wipe_color(led_count: usize, step: usize, index: usize) -> Rgb {
    if led_count == 0 {
        return Rgb::default();
    }
    let position = step + index;
    let band = WIPE_PALETTE[(position / led_count) % WIPE_PALETTE.len()];
    let phase = (led_count - position % led_count) as f64 / led_count as f64;
    scale(band, phase * phase)
}

#[derive(Debug, Clone)]
pub struct WipeAnimation {
    led_count: usize,
    step: usize,
    delay: Duration,
}

impl WipeAnimation {
    pub fn new(led_count: usize, delay: Duration) -> Self {
        Self {
            led_count,
            step: 0,
            delay,
        }
    }

    fn total_steps(&self) -> usize {
        WIPE_PALETTE.len() * self.led_count
    }
}

impl Iterator for WipeAnimation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.step >= self.total_steps() {
            return None;
        }
        let step = self.step;
        self.step += 1;

        let frame: Frame = (0..self.led_count)
            .map(|index| LedUpdate::new(index, wipe_color(self.led_count, step, index)))
            .collect();
        Some(frame.with_delay(self.delay))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_steps().saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}
