use std::path::Path;

use anyhow::Context;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// A square canvas with a logical grid of equal-sized cells overlaid on it.
/// Cells are the only unit of drawing; individual pixels are never addressed
/// directly.
#[derive(Debug)]
pub struct PaletteCanvas {
    image: RgbImage,
    cell_size: u32,
    grid_cols: u32,
    grid_rows: u32,
}

impl PaletteCanvas {
    /// Create a white canvas of `image_size` x `image_size` pixels divided
    /// into `grid_cols` x `grid_rows` cells. The caller is responsible for
    /// validating divisibility first.
    pub fn new(image_size: u32, grid_cols: u32, grid_rows: u32) -> Self {
        let image = RgbImage::from_pixel(image_size, image_size, Rgb([255, 255, 255]));
        Self {
            image,
            cell_size: image_size / grid_cols,
            grid_cols,
            grid_rows,
        }
    }

    pub fn grid_cols(&self) -> u32 {
        self.grid_cols
    }

    pub fn grid_rows(&self) -> u32 {
        self.grid_rows
    }

    /// Fill one grid cell with a solid color.
    pub fn fill_cell(&mut self, col: u32, row: u32, color: Rgb<u8>) {
        let rect = Rect::at((col * self.cell_size) as i32, (row * self.cell_size) as i32)
            .of_size(self.cell_size, self.cell_size);
        draw_filled_rect_mut(&mut self.image, rect, color);
    }

    /// Read back the color of a cell (sampled at its top-left pixel; every
    /// pixel of a filled cell is identical).
    pub fn cell_color(&self, col: u32, row: u32) -> Rgb<u8> {
        *self
            .image
            .get_pixel(col * self.cell_size, row * self.cell_size)
    }

    /// Write the canvas to disk. The format is chosen from the file
    /// extension; the default configuration produces a PNG.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        self.image
            .save(path)
            .with_context(|| format!("failed to write palette to {:?}", path))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
