//! Sweeping patterns: seesaw and ping-pong

use embassy_time::Duration;

use super::Frame;
use crate::color::{BLACK, DIM_CYAN, DIM_GREEN, DIM_YELLOW, ORANGE, Rgb};

/// Orange comet forward, then green comet backward
///
/// One LED is written per frame and nothing is cleared, so each pass leaves
/// the whole strip painted in its color.
#[derive(Debug, Clone)]
pub struct SeesawAnimation {
    led_count: usize,
    step: usize,
    delay: Duration,
}

impl SeesawAnimation {
    pub fn new(led_count: usize, delay: Duration) -> Self {
        Self {
            led_count,
            step: 0,
            delay,
        }
    }

    fn total_steps(&self) -> usize {
        self.led_count * 2
    }
}

impl Iterator for SeesawAnimation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.step >= self.total_steps() {
            return None;
        }
        let step = self.step;
        self.step += 1;

        let (index, color) = if step < self.led_count {
            (step, ORANGE)
        } else {
            (self.led_count - 1 - (step - self.led_count), DIM_GREEN)
        };

        let mut frame = Frame::with_capacity(1).with_delay(self.delay);
        frame.push(index, color);
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_steps().saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

/// A single lit pixel bouncing between two fixed endpoints
///
/// The first LED is set yellow and the last one cyan, once. The pixel then
/// travels yellow over `1..=N-2`, comes back cyan over `N-2..=1`, and every
/// position is turned off again after its delay. With fewer than three LEDs
/// only the endpoints are written.
///
/// Frames are cut so that the packet order is unchanged from a plain
/// light/wait/off loop: a frame turns off the previous pixel and lights the
/// next one, then waits.
#[derive(Debug, Clone)]
pub struct PingPongAnimation {
    led_count: usize,
    /// Position in the lit sequence, `None` before the endpoints are sent
    step: Option<usize>,
    delay: Duration,
}

impl PingPongAnimation {
    pub fn new(led_count: usize, delay: Duration) -> Self {
        Self {
            led_count,
            step: None,
            delay,
        }
    }

    /// Number of LEDs strictly between the endpoints
    fn inner_len(&self) -> usize {
        self.led_count.saturating_sub(2)
    }

    /// Number of lit positions over both passes
    fn total_steps(&self) -> usize {
        self.inner_len() * 2
    }

    /// LED and color lit at `step`
    fn lit(&self, step: usize) -> (usize, Rgb) {
        let inner = self.inner_len();
        if step < inner {
            (1 + step, DIM_YELLOW)
        } else {
            (inner - (step - inner), DIM_CYAN)
        }
    }

    /// Append the next lit pixel, if any, and set the matching delay
    fn light(&self, frame: &mut Frame, step: usize) {
        if step < self.total_steps() {
            let (index, color) = self.lit(step);
            frame.push(index, color);
            frame.delay = self.delay;
        }
    }
}

impl Iterator for PingPongAnimation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let Some(step) = self.step else {
            if self.led_count == 0 {
                return None;
            }
            let mut frame = Frame::with_capacity(3);
            frame.push(0, DIM_YELLOW);
            frame.push(self.led_count - 1, DIM_CYAN);
            self.light(&mut frame, 0);
            self.step = Some(0);
            return Some(frame);
        };

        if step >= self.total_steps() {
            return None;
        }
        let (index, _) = self.lit(step);
        let mut frame = Frame::with_capacity(2);
        frame.push(index, BLACK);
        self.light(&mut frame, step + 1);
        self.step = Some(step + 1);
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.step {
            None if self.led_count == 0 => 0,
            None => 1 + self.total_steps(),
            Some(step) => self.total_steps().saturating_sub(step),
        };
        (remaining, Some(remaining))
    }
}
