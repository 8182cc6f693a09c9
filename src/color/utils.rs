use crate::color::Rgb;

/// Narrow an integer channel value to 8 bits
///
/// Values outside `0..=255` wrap modulo 256 (two's complement), exactly like
/// a byte cast. `300` becomes `44` and `-1` becomes `255`. The serial
/// protocol has always relied on this, so it is not treated as an error.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[inline]
pub const fn wrap_channel(value: i32) -> u8 {
    value as u8
}

/// Build a color from wide integer channels, wrapping each one
pub const fn rgb_wrapping(r: i32, g: i32, b: i32) -> Rgb {
    Rgb {
        r: wrap_channel(r),
        g: wrap_channel(g),
        b: wrap_channel(b),
    }
}

/// Scale every channel by `factor`, truncating toward zero
///
/// `factor` is expected in `0.0..=1.0`; results saturate at the channel
/// bounds and NaN maps to 0.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub fn scale(color: Rgb, factor: f64) -> Rgb {
    Rgb {
        r: (factor * color.r as f64) as u8,
        g: (factor * color.g as f64) as u8,
        b: (factor * color.b as f64) as u8,
    }
}
