//! Serial LED strip composer
//!
//! Streams per-LED color updates to a microcontroller-driven strip over a
//! serial link. The [`Transport`] frames and writes packets, [`discovery`]
//! finds and opens the controller, and the [`Player`] paces the frames
//! produced by the [`animation`] patterns.

pub mod animation;
pub mod cancel;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod packet;
pub mod player;
pub mod shared;
pub mod transport;

pub use animation::{Animation, AnimationId, Frame, LedUpdate};
pub use cancel::CancelToken;
pub use color::Rgb;
pub use config::{AnimationTimings, DEFAULT_BAUD_RATE, SETTLE_DELAY, StripConfig};
pub use discovery::{PortDescriptor, SerialBackend, discover_and_connect, select_port};
pub use embassy_time::Duration;
pub use error::{ConfigError, ConnectError, Error, PacketError, TransportError};
pub use packet::Packet;
pub use player::{Pacer, Playback, Player, ThreadPacer, Wait};
pub use shared::SharedTransport;
pub use transport::Transport;

#[cfg(feature = "serial")]
pub use discovery::{SystemConnection, SystemSerial, connect};

/// Destination of LED color updates
///
/// Implemented by [`Transport`] and [`SharedTransport`]. The player is
/// generic over this trait.
pub trait ColorSink {
    /// Send `color` to the LED at `index`
    fn send_color(&mut self, index: usize, color: Rgb) -> Result<(), TransportError>;
}

impl<T: ColorSink + ?Sized> ColorSink for &mut T {
    fn send_color(&mut self, index: usize, color: Rgb) -> Result<(), TransportError> {
        (**self).send_color(index, color)
    }
}
