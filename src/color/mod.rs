mod palette;
mod utils;

use smart_leds::RGB8;

pub use palette::{
    BLACK, DIM_BLUE, DIM_CYAN, DIM_GREEN, DIM_RED, DIM_YELLOW, ORANGE, RAINBOW_PALETTE,
    WIPE_PALETTE,
};
pub use utils::{rgb_wrapping, scale, wrap_channel};

pub type Rgb = RGB8;
