//! Serial transport
//!
//! Owns the connection to the controller and turns `(index, color)` pairs
//! into framed packets. Fire-and-forget: nothing is ever read back.

use std::io::Write;

use log::trace;

use crate::{
    ColorSink,
    color::{Rgb, rgb_wrapping},
    error::TransportError,
    packet::{PACKET_LEN, Packet},
};

/// Packet writer for a strip of fixed length
///
/// `W` is the open connection, usually a serial port. A transport can also
/// exist without a connection, in which case every send fails with
/// [`TransportError::NotConnected`].
#[derive(Debug)]
pub struct Transport<W: Write> {
    connection: Option<W>,
    led_count: usize,
}

impl<W: Write> Transport<W> {
    /// Create a transport writing to an already open connection
    pub const fn new(connection: W, led_count: usize) -> Self {
        Self {
            connection: Some(connection),
            led_count,
        }
    }

    /// Create a transport with no connection attached
    pub const fn disconnected(led_count: usize) -> Self {
        Self {
            connection: None,
            led_count,
        }
    }

    /// Attach a connection, returning the previous one if any
    pub fn attach(&mut self, connection: W) -> Option<W> {
        self.connection.replace(connection)
    }

    /// Detach and return the current connection
    pub fn detach(&mut self) -> Option<W> {
        self.connection.take()
    }

    pub const fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    /// Borrow the open connection
    pub fn connection(&self) -> Option<&W> {
        self.connection.as_ref()
    }

    /// Send a color to the LED at `index`
    ///
    /// The whole packet is handed to the connection in a single `write`
    /// call. A write that accepts fewer than 7 bytes is reported as
    /// [`TransportError::ShortWrite`].
    pub fn send_color(&mut self, index: usize, color: Rgb) -> Result<(), TransportError> {
        if index >= self.led_count {
            return Err(TransportError::IndexOutOfRange {
                index,
                led_count: self.led_count,
            });
        }
        let connection = self
            .connection
            .as_mut()
            .ok_or(TransportError::NotConnected)?;

        let bytes = Packet::new(index, color).encode();
        trace!("tx {:02x?}", bytes);

        let written = connection.write(&bytes)?;
        if written != PACKET_LEN {
            return Err(TransportError::ShortWrite { written });
        }
        Ok(())
    }

    /// Send wide integer channels, wrapping each one to 8 bits
    ///
    /// `send_rgb(0, 300, 0, 0)` puts `44` on the wire for red.
    pub fn send_rgb(&mut self, index: usize, r: i32, g: i32, b: i32) -> Result<(), TransportError> {
        self.send_color(index, rgb_wrapping(r, g, b))
    }
}

impl<W: Write> ColorSink for Transport<W> {
    fn send_color(&mut self, index: usize, color: Rgb) -> Result<(), TransportError> {
        Transport::send_color(self, index, color)
    }
}
