use anyhow::{Context, bail};
use image::Rgb;

/// Convert HSV (each component in 0.0..=1.0) to an 8-bit RGB pixel.
///
/// Channels are truncated, not rounded, so an input value of 1.0 maps to 255
/// and everything below maps to the floor of `channel * 255`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb<u8> {
    let c = v * s;
    let sector = h * 6.0;
    let x = c * (1.0 - ((sector % 2.0) - 1.0).abs());

    let (r, g, b) = if sector < 1.0 {
        (c, x, 0.0)
    } else if sector < 2.0 {
        (x, c, 0.0)
    } else if sector < 3.0 {
        (0.0, c, x)
    } else if sector < 4.0 {
        (0.0, x, c)
    } else if sector < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = v - c;
    Rgb([
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    ])
}

/// Parse a 6-digit hex color string (with or without a leading '#') into an
/// RGB pixel. Fails with the offending string so a typo in a color table
/// aborts the run instead of painting garbage.
pub fn hex_to_rgb(hex: &str) -> anyhow::Result<Rgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 || !digits.is_ascii() {
        bail!("invalid hex color {:?}: expected 6 hex digits", hex);
    }

    let parse_byte = |range| {
        u8::from_str_radix(&digits[range], 16)
            .with_context(|| format!("invalid hex color {:?}", hex))
    };

    Ok(Rgb([parse_byte(0..2)?, parse_byte(2..4)?, parse_byte(4..6)?]))
}

/// Format an RGB pixel as a lowercase "#rrggbb" string.
pub fn rgb_to_hex(rgb: Rgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}
