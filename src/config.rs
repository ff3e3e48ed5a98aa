use std::path::PathBuf;

use anyhow::bail;

/// Number of curated material rows at the top of the palette.
pub const MATERIAL_ROWS: u32 = 6;

/// Number of grayscale ramp rows reserved at the bottom of the palette.
pub const GRAYSCALE_ROWS: u32 = 4;

/// Palette generation parameters.
pub struct PaletteConfig {
    /// Output image path
    pub output: PathBuf,
    /// Canvas size in pixels (square)
    pub image_size: u32,
    /// Grid columns
    pub grid_cols: u32,
    /// Grid rows
    pub grid_rows: u32,
    /// Print per-region progress
    pub verbose: bool,
}

impl PaletteConfig {
    pub fn new() -> Self {
        Self {
            output: PathBuf::from("master_palette.png"),
            image_size: 1024,
            grid_cols: 32,
            grid_rows: 32,
            verbose: false,
        }
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    pub fn with_image_size(mut self, image_size: u32) -> Self {
        self.image_size = image_size;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Pixel edge length of one grid cell.
    pub fn cell_size(&self) -> u32 {
        self.image_size / self.grid_cols
    }

    /// Rows available to the hue/value spectrum between the curated material
    /// rows and the reserved grayscale rows.
    pub fn spectrum_rows(&self) -> u32 {
        self.grid_rows
            .saturating_sub(MATERIAL_ROWS)
            .saturating_sub(GRAYSCALE_ROWS)
    }

    /// Reject configurations that cannot tile the canvas or that leave no
    /// room for the spectrum band. Misaligned cells and a zero-row spectrum
    /// (a division by zero in the value ramp) are caught here instead of
    /// showing up as visual defects.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.grid_cols == 0 || self.grid_rows == 0 {
            bail!("grid must have at least one column and one row");
        }
        if self.cell_size() == 0 {
            bail!(
                "image size {} is too small for {} grid columns: cells would be zero pixels wide",
                self.image_size,
                self.grid_cols
            );
        }
        if self.image_size % self.grid_cols != 0 {
            bail!(
                "image size {} is not divisible by {} grid columns",
                self.image_size,
                self.grid_cols
            );
        }
        if self.image_size % self.grid_rows != 0 {
            bail!(
                "image size {} is not divisible by {} grid rows",
                self.image_size,
                self.grid_rows
            );
        }
        if self.spectrum_rows() == 0 {
            bail!(
                "grid of {} rows leaves no room for the spectrum band ({} material rows + {} grayscale rows)",
                self.grid_rows,
                MATERIAL_ROWS,
                GRAYSCALE_ROWS
            );
        }
        Ok(())
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self::new()
    }
}
