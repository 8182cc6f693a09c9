//! Animation patterns
//!
//! Every pattern is a lazy, finite iterator of [`Frame`]s. A frame lists the
//! LED updates to send, in order, followed by the delay to wait before the
//! next frame. Patterns never sleep or touch the transport themselves; the
//! [`Player`](crate::player::Player) does both, which is what makes them
//! cancellable between frames.

mod snapshot;
mod sweep;
mod wipe;

use embassy_time::Duration;
pub use snapshot::{
    SnapshotAnimation, all_red_frame, alternate_red_blue_frame, clear_frame,
    gradient_red_green_frame, rainbow_frame,
};
pub use sweep::{PingPongAnimation, SeesawAnimation};
pub use wipe::{WipeAnimation, wipe_color};

use crate::{color::Rgb, config::AnimationTimings};

const ANIMATION_NAME_ALL_RED: &str = "all_red";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_ALTERNATE_RED_BLUE: &str = "alternate_red_blue";
const ANIMATION_NAME_GRADIENT_RED_GREEN: &str = "gradient_red_green";
const ANIMATION_NAME_SEESAW_ORANGE_GREEN: &str = "seesaw_orange_green";
const ANIMATION_NAME_PING_PONG: &str = "ping_pong";
const ANIMATION_NAME_WIPE_RAINBOW: &str = "wipe_rainbow";
const ANIMATION_NAME_CLEAR: &str = "clear";

const ANIMATION_ID_ALL_RED: u8 = 0;
const ANIMATION_ID_RAINBOW: u8 = 1;
const ANIMATION_ID_ALTERNATE_RED_BLUE: u8 = 2;
const ANIMATION_ID_GRADIENT_RED_GREEN: u8 = 3;
const ANIMATION_ID_SEESAW_ORANGE_GREEN: u8 = 4;
const ANIMATION_ID_PING_PONG: u8 = 5;
const ANIMATION_ID_WIPE_RAINBOW: u8 = 6;
const ANIMATION_ID_CLEAR: u8 = 7;

/// A single LED color update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedUpdate {
    pub index: usize,
    pub color: Rgb,
}

impl LedUpdate {
    pub const fn new(index: usize, color: Rgb) -> Self {
        Self { index, color }
    }
}

/// One animation step: updates to send, then a pause
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub updates: Vec<LedUpdate>,
    /// Wait after the updates have been sent
    pub delay: Duration,
}

impl Frame {
    /// Empty frame with no delay
    pub const fn new() -> Self {
        Self {
            updates: Vec::new(),
            delay: Duration::from_ticks(0),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            updates: Vec::with_capacity(capacity),
            delay: Duration::from_ticks(0),
        }
    }

    /// Set the delay after this frame
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Append an update
    pub fn push(&mut self, index: usize, color: Rgb) {
        self.updates.push(LedUpdate::new(index, color));
    }
}

impl FromIterator<LedUpdate> for Frame {
    fn from_iter<I: IntoIterator<Item = LedUpdate>>(iter: I) -> Self {
        Self {
            updates: iter.into_iter().collect(),
            delay: Duration::from_ticks(0),
        }
    }
}

/// Known animations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnimationId {
    AllRed = ANIMATION_ID_ALL_RED,
    Rainbow = ANIMATION_ID_RAINBOW,
    AlternateRedBlue = ANIMATION_ID_ALTERNATE_RED_BLUE,
    GradientRedGreen = ANIMATION_ID_GRADIENT_RED_GREEN,
    SeesawOrangeGreen = ANIMATION_ID_SEESAW_ORANGE_GREEN,
    PingPong = ANIMATION_ID_PING_PONG,
    WipeRainbow = ANIMATION_ID_WIPE_RAINBOW,
    Clear = ANIMATION_ID_CLEAR,
}

impl AnimationId {
    pub const ALL: [Self; 8] = [
        Self::AllRed,
        Self::Rainbow,
        Self::AlternateRedBlue,
        Self::GradientRedGreen,
        Self::SeesawOrangeGreen,
        Self::PingPong,
        Self::WipeRainbow,
        Self::Clear,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_ALL_RED => Self::AllRed,
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            ANIMATION_ID_ALTERNATE_RED_BLUE => Self::AlternateRedBlue,
            ANIMATION_ID_GRADIENT_RED_GREEN => Self::GradientRedGreen,
            ANIMATION_ID_SEESAW_ORANGE_GREEN => Self::SeesawOrangeGreen,
            ANIMATION_ID_PING_PONG => Self::PingPong,
            ANIMATION_ID_WIPE_RAINBOW => Self::WipeRainbow,
            ANIMATION_ID_CLEAR => Self::Clear,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllRed => ANIMATION_NAME_ALL_RED,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::AlternateRedBlue => ANIMATION_NAME_ALTERNATE_RED_BLUE,
            Self::GradientRedGreen => ANIMATION_NAME_GRADIENT_RED_GREEN,
            Self::SeesawOrangeGreen => ANIMATION_NAME_SEESAW_ORANGE_GREEN,
            Self::PingPong => ANIMATION_NAME_PING_PONG,
            Self::WipeRainbow => ANIMATION_NAME_WIPE_RAINBOW,
            Self::Clear => ANIMATION_NAME_CLEAR,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_ALL_RED => Some(Self::AllRed),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_ALTERNATE_RED_BLUE => Some(Self::AlternateRedBlue),
            ANIMATION_NAME_GRADIENT_RED_GREEN => Some(Self::GradientRedGreen),
            ANIMATION_NAME_SEESAW_ORANGE_GREEN => Some(Self::SeesawOrangeGreen),
            ANIMATION_NAME_PING_PONG => Some(Self::PingPong),
            ANIMATION_NAME_WIPE_RAINBOW => Some(Self::WipeRainbow),
            ANIMATION_NAME_CLEAR => Some(Self::Clear),
            _ => None,
        }
    }

    /// Build the frame iterator of this animation for a strip of `led_count`
    pub fn frames(self, led_count: usize, timings: &AnimationTimings) -> Animation {
        let snapshot = |frame| Animation::Snapshot(SnapshotAnimation::new(self, frame));
        match self {
            Self::AllRed => snapshot(all_red_frame(led_count)),
            Self::Rainbow => snapshot(rainbow_frame(led_count)),
            Self::AlternateRedBlue => snapshot(alternate_red_blue_frame(led_count)),
            Self::GradientRedGreen => snapshot(gradient_red_green_frame(led_count)),
            Self::Clear => snapshot(clear_frame(led_count)),
            Self::SeesawOrangeGreen => {
                Animation::Seesaw(SeesawAnimation::new(led_count, timings.seesaw_step))
            }
            Self::PingPong => {
                Animation::PingPong(PingPongAnimation::new(led_count, timings.ping_pong_step))
            }
            Self::WipeRainbow => Animation::Wipe(WipeAnimation::new(led_count, timings.wipe_step)),
        }
    }
}

impl core::fmt::Display for AnimationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running animation - enum over all pattern iterators
#[derive(Debug, Clone)]
pub enum Animation {
    /// Single frame, no delay
    Snapshot(SnapshotAnimation),
    /// Orange sweep forward, green sweep backward
    Seesaw(SeesawAnimation),
    /// Single traveling pixel between fixed endpoints
    PingPong(PingPongAnimation),
    /// Moving rainbow band with quadratic falloff
    Wipe(WipeAnimation),
}

impl Animation {
    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Snapshot(animation) => animation.id(),
            Self::Seesaw(_) => AnimationId::SeesawOrangeGreen,
            Self::PingPong(_) => AnimationId::PingPong,
            Self::Wipe(_) => AnimationId::WipeRainbow,
        }
    }
}

impl Iterator for Animation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        match self {
            Self::Snapshot(animation) => animation.next(),
            Self::Seesaw(animation) => animation.next(),
            Self::PingPong(animation) => animation.next(),
            Self::Wipe(animation) => animation.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Snapshot(animation) => animation.size_hint(),
            Self::Seesaw(animation) => animation.size_hint(),
            Self::PingPong(animation) => animation.size_hint(),
            Self::Wipe(animation) => animation.size_hint(),
        }
    }
}
