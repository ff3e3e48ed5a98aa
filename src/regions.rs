use crate::canvas::PaletteCanvas;
use crate::color::{hex_to_rgb, hsv_to_rgb};
use crate::config::{GRAYSCALE_ROWS, PaletteConfig};

/// Curated material colors, one row per theme, painted into the top rows of
/// the palette. Rows shorter than the grid width are padded by repeating
/// their last color.
pub const MATERIAL_COLORS: [&[&str]; 6] = [
    // Wood, dark to light
    &[
        "#3E2723", "#4E342E", "#5D4037", "#6D4C41", "#795548", "#8D6E63", "#A1887F", "#BCAAA4",
    ],
    // Metal and stone, blue-gray
    &[
        "#263238", "#37474F", "#455A64", "#546E7A", "#607D8B", "#78909C", "#90A4AE", "#B0BEC5",
    ],
    // Hazard: reds and yellows
    &[
        "#B71C1C", "#C62828", "#D32F2F", "#E53935", "#F57F17", "#F9A825", "#FBC02D", "#FDD835",
    ],
    // Nature: grass, leaves, water
    &[
        "#1B5E20", "#2E7D32", "#388E3C", "#43A047", "#01579B", "#0277BD", "#0288D1", "#039BE5",
    ],
    // Special: ice, honey, portal purple
    &[
        "#E1F5FE", "#B3E5FC", "#81D4FA", "#4FC3F7", "#FFF8E1", "#FFECB3", "#FFE082", "#FFD54F",
        "#4A148C", "#6A1B9A", "#7B1FA2", "#8E24AA",
    ],
    // Skin and fur
    &[
        "#FAFAFA", "#F5F5F5", "#EEEEEE", "#E0E0E0", "#3E2723", "#4E342E", "#5D4037", "#6D4C41",
        "#FFF3E0", "#FFE0B2", "#FFCC80", "#FFB74D",
    ],
];

/// Paint the curated material rows starting at `row`. Returns the row cursor
/// advanced past the painted rows.
pub fn draw_materials(canvas: &mut PaletteCanvas, row: u32) -> anyhow::Result<u32> {
    let grid_cols = canvas.grid_cols();
    let mut current_row = row;

    for material_row in MATERIAL_COLORS {
        for (col, hex) in material_row.iter().enumerate() {
            if (col as u32) < grid_cols {
                canvas.fill_cell(col as u32, current_row, hex_to_rgb(hex)?);
            }
        }
        // Pad short rows with the last color so no cell is left blank
        let last_color = hex_to_rgb(material_row[material_row.len() - 1])?;
        for col in material_row.len() as u32..grid_cols {
            canvas.fill_cell(col, current_row, last_color);
        }
        current_row += 1;
    }

    Ok(current_row)
}

/// Paint the hue/value spectrum band: hue sweeps 0..1 across the columns,
/// value climbs from 0.2 toward 0.95 down the rows, saturation is fixed at
/// 0.85. Returns the advanced row cursor.
pub fn draw_spectrum(canvas: &mut PaletteCanvas, row: u32, spectrum_rows: u32) -> u32 {
    let grid_cols = canvas.grid_cols();

    for r in 0..spectrum_rows {
        let value = 0.2 + 0.75 * (r as f32 / spectrum_rows as f32);
        for c in 0..grid_cols {
            let hue = c as f32 / grid_cols as f32;
            let saturation = 0.85;
            canvas.fill_cell(c, row + r, hsv_to_rgb(hue, saturation, value));
        }
    }

    row + spectrum_rows
}

/// Paint the four grayscale ramp rows: two neutral, one warm-tinted, one
/// cool-tinted, each a linear ramp from black to white across the columns.
/// Returns the advanced row cursor.
pub fn draw_grayscale(canvas: &mut PaletteCanvas, row: u32) -> u32 {
    let grid_cols = canvas.grid_cols();
    let ramp = |c: u32| ((c as f32 / (grid_cols - 1) as f32) * 255.0).round() as u8;

    // Two rows of pure gray
    for r in 0..2 {
        for c in 0..grid_cols {
            let gray = ramp(c);
            canvas.fill_cell(c, row + r, image::Rgb([gray, gray, gray]));
        }
    }

    // Warm gray (sepia) for aged materials
    for c in 0..grid_cols {
        let gray = ramp(c);
        let warm = image::Rgb([
            gray.saturating_add(20),
            gray.saturating_add(15),
            gray,
        ]);
        canvas.fill_cell(c, row + 2, warm);
    }

    // Cool gray for sci-fi metal
    for c in 0..grid_cols {
        let gray = ramp(c);
        let cool = image::Rgb([
            gray,
            gray.saturating_add(10),
            gray.saturating_add(20),
        ]);
        canvas.fill_cell(c, row + 3, cool);
    }

    row + GRAYSCALE_ROWS
}

/// Generate the full palette: curated materials on top, the hue/value
/// spectrum in the middle, grayscale ramps on the bottom four rows.
pub fn generate(config: &PaletteConfig) -> anyhow::Result<PaletteCanvas> {
    config.validate()?;

    let mut canvas = PaletteCanvas::new(config.image_size, config.grid_cols, config.grid_rows);

    if config.verbose {
        println!("Painting curated material rows...");
    }
    let row = draw_materials(&mut canvas, 0)?;

    if config.verbose {
        println!("Painting hue/value spectrum ({} rows)...", config.spectrum_rows());
    }
    let row = draw_spectrum(&mut canvas, row, config.spectrum_rows());

    if config.verbose {
        println!("Painting grayscale ramps...");
    }
    let row = draw_grayscale(&mut canvas, row);

    debug_assert_eq!(row, config.grid_rows);

    Ok(canvas)
}
