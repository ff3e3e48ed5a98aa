use image::Rgb;
use palettegen::{hex_to_rgb, hsv_to_rgb, rgb_to_hex};

#[test]
fn test_hex_parsing() -> anyhow::Result<()> {
    assert_eq!(hex_to_rgb("#BCAAA4")?, Rgb([0xBC, 0xAA, 0xA4]));
    assert_eq!(hex_to_rgb("263238")?, Rgb([0x26, 0x32, 0x38]));
    assert_eq!(hex_to_rgb("#000000")?, Rgb([0, 0, 0]));
    assert_eq!(hex_to_rgb("#ffffff")?, Rgb([255, 255, 255]));
    Ok(())
}

#[test]
fn test_hex_round_trip() -> anyhow::Result<()> {
    for s in ["#3e2723", "#b71c1c", "#01579b", "#fdd835"] {
        assert_eq!(rgb_to_hex(hex_to_rgb(s)?), s);
    }
    // Prefix and case are normalized away
    assert_eq!(rgb_to_hex(hex_to_rgb("4FC3F7")?), "#4fc3f7");
    Ok(())
}

#[test]
fn test_malformed_hex_fails() {
    for bad in ["", "#fff", "#12345", "#1234567", "#gggggg", "not a color"] {
        let err = hex_to_rgb(bad).unwrap_err();
        assert!(
            err.to_string().contains(bad),
            "error should name the offending string: {err}"
        );
    }
}

#[test]
fn test_hsv_primaries() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb([255, 0, 0]));
    assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Rgb([0, 255, 0]));
    assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Rgb([0, 0, 255]));
    // Zero saturation collapses to gray regardless of hue
    assert_eq!(hsv_to_rgb(0.37, 0.0, 0.5), Rgb([127, 127, 127]));
}

#[test]
fn test_hsv_channels_bounded_by_value() {
    // Channels never exceed value * 255 for any sampled input
    for hi in 0..=20 {
        for si in 0..=10 {
            for vi in 0..=10 {
                let (h, s, v) = (hi as f32 / 20.0, si as f32 / 10.0, vi as f32 / 10.0);
                let rgb = hsv_to_rgb(h, s, v);
                let max = (v * 255.0) as u8;
                for ch in rgb.0 {
                    assert!(ch <= max, "hsv({h}, {s}, {v}) produced channel {ch} > {max}");
                }
            }
        }
    }
}
