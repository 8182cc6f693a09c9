//! Wire format of a single LED update
//!
//! ```text
//! [0xAA, index, red, green, blue, checksum, 0x55]
//! ```
//!
//! The checksum is the sum of index and channels modulo 256. It only lets
//! the controller drop corrupted frames; there is no acknowledgement.

use crate::{color::Rgb, error::PacketError};

pub const PACKET_LEN: usize = 7;
pub const HEADER: u8 = 0xAA;
pub const FOOTER: u8 = 0x55;

/// One LED color update as it travels over the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet {
    pub index: u8,
    pub color: Rgb,
}

impl Packet {
    /// Create a packet for the LED at `index`
    ///
    /// The index is narrowed to its low byte, like the channels.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(index: usize, color: Rgb) -> Self {
        Self {
            index: index as u8,
            color,
        }
    }

    /// `(index + r + g + b) mod 256`
    pub const fn checksum(&self) -> u8 {
        self.index
            .wrapping_add(self.color.r)
            .wrapping_add(self.color.g)
            .wrapping_add(self.color.b)
    }

    pub const fn encode(&self) -> [u8; PACKET_LEN] {
        [
            HEADER,
            self.index,
            self.color.r,
            self.color.g,
            self.color.b,
            self.checksum(),
            FOOTER,
        ]
    }

    /// Parse and validate a received frame
    pub fn decode(bytes: &[u8]) -> Result<Self, PacketError> {
        let Ok(frame) = <&[u8; PACKET_LEN]>::try_from(bytes) else {
            return Err(PacketError::Length(bytes.len()));
        };
        let [header, index, r, g, b, checksum, footer] = *frame;
        if header != HEADER {
            return Err(PacketError::Header(header));
        }
        if footer != FOOTER {
            return Err(PacketError::Footer(footer));
        }

        let packet = Self {
            index,
            color: Rgb { r, g, b },
        };
        let expected = packet.checksum();
        if checksum != expected {
            return Err(PacketError::Checksum {
                expected,
                actual: checksum,
            });
        }
        Ok(packet)
    }
}

impl From<Packet> for [u8; PACKET_LEN] {
    fn from(packet: Packet) -> Self {
        packet.encode()
    }
}
