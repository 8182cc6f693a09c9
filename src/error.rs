//! Error types
//!
//! Every failure is surfaced to the caller as a typed result. Nothing in the
//! crate retries on its own; the caller decides whether to rediscover, abort
//! or keep animating in degraded mode.

use std::io;

use thiserror::Error;

/// Errors raised while discovering and opening the controller port
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The system port list could not be read
    #[error("failed to enumerate serial ports: {0}")]
    Enumerate(#[source] io::Error),
    /// No port name or description mentions "arduino"
    #[error("no Arduino-like serial device found")]
    NoDeviceFound,
    /// A matching port exists but could not be opened
    #[error("failed to open serial port {port}: {source}")]
    OpenFailed {
        port: String,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while sending a single color update
#[derive(Debug, Error)]
pub enum TransportError {
    /// No connection is attached to the transport
    #[error("transport is not connected")]
    NotConnected,
    /// The LED index is outside the strip
    #[error("LED index {index} is outside the strip of {led_count} LEDs")]
    IndexOutOfRange { index: usize, led_count: usize },
    /// The underlying write failed
    #[error("failed to write packet: {0}")]
    Write(#[from] io::Error),
    /// The underlying write accepted only part of the packet
    #[error("short write: {written} of 7 bytes sent")]
    ShortWrite { written: usize },
}

/// Errors raised while decoding a received frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PacketError {
    #[error("packet must be 7 bytes, got {0}")]
    Length(usize),
    #[error("bad header byte {0:#04x}")]
    Header(u8),
    #[error("bad footer byte {0:#04x}")]
    Footer(u8),
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    Checksum { expected: u8, actual: u8 },
}

/// Invalid strip configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("strip must have at least one LED")]
    EmptyStrip,
    #[error("baud rate must be non-zero")]
    ZeroBaudRate,
}

/// Any error produced by the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Connect(#[from] ConnectError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
