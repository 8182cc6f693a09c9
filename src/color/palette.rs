//! Named colors and palettes used by the built-in animations

use crate::color::Rgb;

pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Half-intensity colors. The strip is driven at 128 for single-channel
/// patterns to keep current draw on USB power in check.
pub const DIM_RED: Rgb = Rgb::new(128, 0, 0);
pub const DIM_GREEN: Rgb = Rgb::new(0, 128, 0);
pub const DIM_BLUE: Rgb = Rgb::new(0, 0, 128);
pub const DIM_YELLOW: Rgb = Rgb::new(128, 128, 0);
pub const DIM_CYAN: Rgb = Rgb::new(0, 128, 128);
pub const ORANGE: Rgb = Rgb::new(128, 64, 0);

/// Static rainbow, one entry per LED starting at index 0
pub const RAINBOW_PALETTE: [Rgb; 8] = [
    Rgb::new(255, 0, 0),   // Red
    Rgb::new(255, 128, 0), // Orange
    Rgb::new(255, 255, 0), // Yellow
    Rgb::new(0, 255, 0),   // Green
    Rgb::new(0, 255, 255), // Cyan
    Rgb::new(0, 128, 255), // Azure
    Rgb::new(0, 0, 255),   // Blue
    Rgb::new(64, 0, 128),  // Violet
];

/// Bands swept by the rainbow wipe, in order
pub const WIPE_PALETTE: [Rgb; 6] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 255),
];
