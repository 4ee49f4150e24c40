//! RGB → {HSV, XYZ, Lab, LCH, YUV} conversions.
//!
//! Inputs are sRGB-encoded triples. HSV, YUV and RGB work on the encoded values; XYZ and
//! everything derived from it (Lab, LCH) linearize with the sRGB transfer curve first and use
//! the D65 white point. Hues are reported in turns (`[0, 1)`), and achromatic inputs always
//! report hue `0` rather than NaN.

use crate::foundation::core::Rgb;

/// Color space used for custom-key distance evaluation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// Encoded RGB cube.
    Rgb,
    /// Hue / saturation / value.
    Hsv,
    /// CIE L*a*b* (D65).
    #[default]
    Lab,
    /// BT.709 luma + color difference.
    Yuv,
    /// CIE 1931 XYZ (D65).
    Xyz,
    /// Cylindrical Lab: lightness, chroma, hue.
    Lch,
}

/// D65 reference white in XYZ, Y normalized to 1.
pub const D65_WHITE: [f32; 3] = [0.950_47, 1.0, 1.088_83];

/// Largest LCH chroma reachable from the sRGB gamut (pure blue), used to normalize chroma.
pub const LCH_MAX_CHROMA: f32 = 134.0;

const ACHROMATIC_EPS: f32 = 1e-6;

/// Convert `rgb` into `space`. The result layout per space:
///
/// - `Rgb`: `[r, g, b]`
/// - `Hsv`: `[h (turns), s, v]`
/// - `Lab`: `[L (0..100), a, b]`
/// - `Yuv`: `[Y, U, V]` with U/V in `[-0.5, 0.5]`
/// - `Xyz`: `[X, Y, Z]`
/// - `Lch`: `[L (0..100), C, h (turns)]`
pub fn to_space(rgb: Rgb, space: ColorSpace) -> [f32; 3] {
    match space {
        ColorSpace::Rgb => rgb.to_array(),
        ColorSpace::Hsv => rgb_to_hsv(rgb),
        ColorSpace::Lab => rgb_to_lab(rgb),
        ColorSpace::Yuv => rgb_to_yuv(rgb),
        ColorSpace::Xyz => rgb_to_xyz(rgb),
        ColorSpace::Lch => rgb_to_lch(rgb),
    }
}

/// sRGB electro-optical transfer function.
pub fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn rgb_to_hsv(rgb: Rgb) -> [f32; 3] {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max > ACHROMATIC_EPS { delta / max } else { 0.0 };
    if delta <= ACHROMATIC_EPS {
        return [0.0, s, v];
    }

    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    [(h / 6.0).rem_euclid(1.0), s, v]
}

pub fn rgb_to_xyz(rgb: Rgb) -> [f32; 3] {
    let r = srgb_to_linear(rgb.r);
    let g = srgb_to_linear(rgb.g);
    let b = srgb_to_linear(rgb.b);
    [
        0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b,
        0.212_672_9 * r + 0.715_152_2 * g + 0.072_175 * b,
        0.019_333_9 * r + 0.119_192 * g + 0.950_304_1 * b,
    ]
}

pub fn rgb_to_lab(rgb: Rgb) -> [f32; 3] {
    fn f(t: f32) -> f32 {
        const DELTA: f32 = 6.0 / 29.0;
        if t > DELTA * DELTA * DELTA {
            t.cbrt()
        } else {
            t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
        }
    }

    let [x, y, z] = rgb_to_xyz(rgb);
    let fx = f(x / D65_WHITE[0]);
    let fy = f(y / D65_WHITE[1]);
    let fz = f(z / D65_WHITE[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

pub fn rgb_to_lch(rgb: Rgb) -> [f32; 3] {
    let [l, a, b] = rgb_to_lab(rgb);
    let c = (a * a + b * b).sqrt();
    // Grays carry a few ulps of a/b noise from the matrix; snap them to the neutral axis.
    if c < 1e-3 {
        return [l, 0.0, 0.0];
    }
    [l, c, (b.atan2(a) / std::f32::consts::TAU).rem_euclid(1.0)]
}

/// BT.709 Y'UV on encoded values.
pub fn rgb_to_yuv(rgb: Rgb) -> [f32; 3] {
    let y = 0.2126 * rgb.r + 0.7152 * rgb.g + 0.0722 * rgb.b;
    let u = (rgb.b - y) / 1.8556;
    let v = (rgb.r - y) / 1.5748;
    [y, u, v]
}

#[cfg(test)]
#[path = "../../tests/unit/color/space.rs"]
mod tests;
