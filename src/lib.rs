pub mod canvas;
pub mod color;
pub mod config;
pub mod regions;

pub use canvas::PaletteCanvas;
pub use color::{hex_to_rgb, hsv_to_rgb, rgb_to_hex};
pub use config::PaletteConfig;
pub use regions::{MATERIAL_COLORS, generate};
