//! Frame playback and pacing
//!
//! The player pulls frames from an animation, pushes every update through a
//! [`ColorSink`] and then waits the frame's delay. Cancellation is checked
//! before each frame and interrupts any wait in progress.
//!
//! # Usage
//!
//! ```ignore
//! let transport = serial_strip_composer::connect(&config)?;
//! let mut player = Player::new(transport, &config)?;
//! let cancel = player.cancel_token();
//!
//! // From another thread: cancel.cancel();
//! match player.wipe_rainbow()? {
//!     Playback::Completed => {}
//!     Playback::Cancelled => return Ok(()),
//! }
//! ```

use embassy_time::Duration;
use log::debug;

use crate::{
    ColorSink,
    animation::{AnimationId, Frame},
    cancel::CancelToken,
    config::{AnimationTimings, StripConfig},
    error::{ConfigError, TransportError},
};

/// Outcome of a pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// The full duration passed
    Elapsed,
    /// The token was cancelled before or during the wait
    Cancelled,
}

/// Blocking delay source
pub trait Pacer {
    /// Wait for `duration`, returning early if `cancel` fires
    fn wait(&mut self, duration: Duration, cancel: &CancelToken) -> Wait;
}

/// Pacer that blocks the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, duration: Duration, cancel: &CancelToken) -> Wait {
        let timeout = std::time::Duration::from_micros(duration.as_micros());
        if cancel.wait_timeout(timeout) {
            Wait::Cancelled
        } else {
            Wait::Elapsed
        }
    }
}

/// How a playback ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Every frame was sent and every delay elapsed
    Completed,
    /// Stopped early through the cancel token
    Cancelled,
}

/// Plays animations on a strip
pub struct Player<S: ColorSink, P: Pacer = ThreadPacer> {
    sink: S,
    pacer: P,
    led_count: usize,
    timings: AnimationTimings,
    cancel: CancelToken,
}

impl<S: ColorSink> Player<S, ThreadPacer> {
    /// Create a player that sleeps on the calling thread
    pub fn new(sink: S, config: &StripConfig) -> Result<Self, ConfigError> {
        Self::with_pacer(sink, ThreadPacer, config)
    }
}

impl<S: ColorSink, P: Pacer> Player<S, P> {
    /// Create a player with a custom pacer
    pub fn with_pacer(sink: S, pacer: P, config: &StripConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sink,
            pacer,
            led_count: config.led_count,
            timings: config.timings,
            cancel: CancelToken::new(),
        })
    }

    /// Handle for stopping playback from elsewhere
    ///
    /// A cancelled token stays cancelled, and every later playback returns
    /// [`Playback::Cancelled`] at once, until [`CancelToken::reset`] is called.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Replace the cancel token, e.g. to share one across several players
    pub fn set_cancel_token(&mut self, cancel: CancelToken) {
        self.cancel = cancel;
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Release the sink and pacer
    pub fn into_parts(self) -> (S, P) {
        (self.sink, self.pacer)
    }

    /// Play one run of the animation `id`
    pub fn play(&mut self, id: AnimationId) -> Result<Playback, TransportError> {
        debug!("Playing {} on {} LEDs", id, self.led_count);
        let frames = id.frames(self.led_count, &self.timings);
        let playback = self.play_frames(frames)?;
        if playback == Playback::Cancelled {
            debug!("{} cancelled", id);
        }
        Ok(playback)
    }

    /// Play arbitrary frames
    ///
    /// A transport error aborts playback and is returned as is.
    pub fn play_frames<I>(&mut self, frames: I) -> Result<Playback, TransportError>
    where
        I: IntoIterator<Item = Frame>,
    {
        for frame in frames {
            if self.cancel.is_cancelled() {
                return Ok(Playback::Cancelled);
            }

            for update in &frame.updates {
                self.sink.send_color(update.index, update.color)?;
            }

            if frame.delay.as_ticks() == 0 {
                continue;
            }
            if self.pacer.wait(frame.delay, &self.cancel) == Wait::Cancelled {
                return Ok(Playback::Cancelled);
            }
        }
        Ok(Playback::Completed)
    }

    pub fn all_red(&mut self) -> Result<Playback, TransportError> {
        self.play(AnimationId::AllRed)
    }

    pub fn rainbow(&mut self) -> Result<Playback, TransportError> {
        self.play(AnimationId::Rainbow)
    }

    pub fn alternate_red_blue(&mut self) -> Result<Playback, TransportError> {
        self.play(AnimationId::AlternateRedBlue)
    }

    /// Needs at least two LEDs for a visible gradient
    pub fn gradient_red_green(&mut self) -> Result<Playback, TransportError> {
        self.play(AnimationId::GradientRedGreen)
    }

    pub fn seesaw_orange_green(&mut self) -> Result<Playback, TransportError> {
        self.play(AnimationId::SeesawOrangeGreen)
    }

    pub fn ping_pong(&mut self) -> Result<Playback, TransportError> {
        self.play(AnimationId::PingPong)
    }

    pub fn wipe_rainbow(&mut self) -> Result<Playback, TransportError> {
        self.play(AnimationId::WipeRainbow)
    }

    pub fn clear(&mut self) -> Result<Playback, TransportError> {
        self.play(AnimationId::Clear)
    }
}
