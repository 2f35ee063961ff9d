pub mod color;
pub mod mode;
pub mod palette;

pub use color::{ColorParseError, Rgb, hex_to_rgb};
pub use mode::Mode;
pub use palette::{Level, OnTone, OpacityToken, PaletteLevel};
