//! WCAG 2.x relative luminance and contrast ratio in sRGB.

use recursica_types::{Rgb, hex_to_rgb};

/// Minimum contrast for normal text at WCAG AA.
pub const AA_CONTRAST: f64 = 4.5;

fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance with ITU-R BT.709 weights.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(color.r);
    let g = srgb_to_linear(color.g);
    let b = srgb_to_linear(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// `(L_lighter + 0.05) / (L_darker + 0.05)`, independent of argument order.
#[must_use]
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast between two hex colors. `0.0` when either side is not a valid color.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    match (hex_to_rgb(a), hex_to_rgb(b)) {
        (Some(a), Some(b)) => contrast_ratio_rgb(a, b),
        _ => 0.0,
    }
}

#[must_use]
pub fn meets_aa(ratio: f64) -> bool {
    ratio >= AA_CONTRAST
}

/// Source-over composite of `fg` at `alpha` onto an opaque `bg`.
///
/// `alpha` is clamped to [0, 1]; channels are rounded to the nearest integer.
#[must_use]
pub fn blend_over(fg: Rgb, bg: Rgb, alpha: f64) -> Rgb {
    let a = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
    let mix = |f: u8, b: u8| -> u8 {
        let v = f64::from(f).mul_add(a, f64::from(b) * (1.0 - a));
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(mix(fg.r, bg.r), mix(fg.g, bg.g), mix(fg.b, bg.b))
}

/// Hex form of [`blend_over`]. `None` when either color is invalid.
#[must_use]
pub fn blend_over_hex(fg: &str, bg: &str, alpha: f64) -> Option<String> {
    let fg = hex_to_rgb(fg)?;
    let bg = hex_to_rgb(bg)?;
    Some(blend_over(fg, bg, alpha).to_hex())
}
