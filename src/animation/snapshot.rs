//! Single-frame patterns
//!
//! Solid fills, the static rainbow and the red/green gradient. Each one
//! produces exactly one frame with no delay.

use super::{AnimationId, Frame, LedUpdate};
use crate::color::{BLACK, DIM_BLUE, DIM_RED, RAINBOW_PALETTE, Rgb};

/// Iterator yielding one precomputed frame
#[derive(Debug, Clone)]
pub struct SnapshotAnimation {
    id: AnimationId,
    frame: Option<Frame>,
}

impl SnapshotAnimation {
    pub fn new(id: AnimationId, frame: Frame) -> Self {
        Self {
            id,
            frame: Some(frame),
        }
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }
}

impl Iterator for SnapshotAnimation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.frame.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.frame.is_some());
        (remaining, Some(remaining))
    }
}

fn fill(led_count: usize, color: Rgb) -> Frame {
    (0..led_count)
        .map(|index| LedUpdate::new(index, color))
        .collect()
}

/// Every LED dim red
pub fn all_red_frame(led_count: usize) -> Frame {
    fill(led_count, DIM_RED)
}

/// Every LED off
pub fn clear_frame(led_count: usize) -> Frame {
    fill(led_count, BLACK)
}

/// Fixed 8-color rainbow on LEDs 0..8
///
/// The palette does not stretch to the strip. Shorter strips show its head,
/// longer strips keep whatever LEDs 8 and up were showing before.
pub fn rainbow_frame(led_count: usize) -> Frame {
    RAINBOW_PALETTE
        .iter()
        .take(led_count)
        .enumerate()
        .map(|(index, &color)| LedUpdate::new(index, color))
        .collect()
}

/// Even LEDs dim red, odd LEDs dim blue
pub fn alternate_red_blue_frame(led_count: usize) -> Frame {
    (0..led_count)
        .map(|index| {
            let color = if index % 2 == 0 { DIM_RED } else { DIM_BLUE };
            LedUpdate::new(index, color)
        })
        .collect()
}

/// Full red at index 0 fading linearly to full green at the last LED
///
/// Channels are rounded to the nearest integer. A single-LED strip has no
/// gradient; the 0/0 ratio narrows to 0 and the LED is turned off.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn gradient_red_green_frame(led_count: usize) -> Frame {
    let span = led_count.saturating_sub(1) as f64;
    (0..led_count)
        .map(|index| {
            let green = libm::round(index as f64 / span * 255.0) as u8;
            let red = libm::round((span - index as f64) / span * 255.0) as u8;
            LedUpdate::new(index, Rgb::new(red, green, 0))
        })
        .collect()
}
