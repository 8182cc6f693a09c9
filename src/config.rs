//! Strip and animation configuration

use embassy_time::Duration;

use crate::error::ConfigError;

/// Baud rate the controller firmware listens on
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Number of LEDs on the reference strip
pub const DEFAULT_LED_COUNT: usize = 8;

/// Time the controller needs to finish its reset after the port is opened.
///
/// Bytes written before this elapses are silently dropped by the board, so
/// this is deliberately not part of [`StripConfig`].
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Step delays of the animated patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Delay after each LED of the seesaw sweep
    pub seesaw_step: Duration,
    /// Time the ping-pong pixel stays lit on each LED
    pub ping_pong_step: Duration,
    /// Delay between rainbow wipe steps
    pub wipe_step: Duration,
}

impl AnimationTimings {
    pub const DEFAULT: Self = Self {
        seesaw_step: Duration::from_millis(100),
        ping_pong_step: Duration::from_millis(150),
        wipe_step: Duration::from_millis(45),
    };
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration of the attached strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Number of addressable LEDs, fixed for the lifetime of the transport
    pub led_count: usize,
    /// Serial baud rate
    pub baud_rate: u32,
    pub timings: AnimationTimings,
}

impl StripConfig {
    pub const DEFAULT: Self = Self {
        led_count: DEFAULT_LED_COUNT,
        baud_rate: DEFAULT_BAUD_RATE,
        timings: AnimationTimings::DEFAULT,
    };

    /// Config for a strip of `led_count` LEDs with default settings
    pub const fn with_led_count(led_count: usize) -> Self {
        Self {
            led_count,
            ..Self::DEFAULT
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.led_count == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if self.baud_rate == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }
        Ok(())
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
