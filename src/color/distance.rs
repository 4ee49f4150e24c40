use crate::{
    color::space::{
        ColorSpace, D65_WHITE, LCH_MAX_CHROMA, rgb_to_hsv, rgb_to_lab, rgb_to_lch, rgb_to_xyz,
        rgb_to_yuv,
    },
    foundation::core::Rgb,
    foundation::math::{EPS, clamp01, hue_distance, luma709},
};

const SQRT_3: f32 = 1.732_050_8;

/// Shaping controls for [`color_distance`], all normalized to `[0, 1]` (hue range to `[0, 0.5]`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceParams {
    /// Hue tolerance in turns for HSV/LCH; hue differences inside it cost nothing.
    pub hue_range: f32,
    /// Reference saturation at or below which HSV/LCH compare lightness only.
    pub saturation_threshold: f32,
    /// Luma difference tolerated for free by RGB/YUV before the luminance term kicks in.
    pub luminance_range: f32,
    /// How much the luminance term is allowed to raise the distance.
    pub luminance_mix: f32,
}

impl Default for DistanceParams {
    fn default() -> Self {
        Self {
            hue_range: 0.1,
            saturation_threshold: 0.1,
            luminance_range: 0.4,
            luminance_mix: 0.5,
        }
    }
}

/// Normalized distance between `candidate` and `reference` in `space`.
///
/// `0` means an exact match; a maximally different pair lands near `1` (the value is not clamped
/// from above). The luminance term can only increase separation: with `luminance_mix = 1` the
/// result is `max(space distance, luminance term)`.
pub fn color_distance(
    candidate: Rgb,
    reference: Rgb,
    space: ColorSpace,
    params: &DistanceParams,
) -> f32 {
    let (d_space, luma_term) = match space {
        ColorSpace::Rgb => {
            let d = candidate.sub(reference).length() / SQRT_3;
            let dy = (luma709(candidate) - luma709(reference)).abs();
            (d, luma_excess(dy, params.luminance_range))
        }
        ColorSpace::Yuv => {
            let [cy, cu, cv] = rgb_to_yuv(candidate);
            let [ry, ru, rv] = rgb_to_yuv(reference);
            let d = ((cu - ru).powi(2) + (cv - rv).powi(2)).sqrt();
            (d, luma_excess((cy - ry).abs(), params.luminance_range))
        }
        ColorSpace::Xyz => {
            let c = rgb_to_xyz(candidate);
            let r = rgb_to_xyz(reference);
            let extent = Rgb::from_array(D65_WHITE).length();
            let d = Rgb::from_array(c).sub(Rgb::from_array(r)).length() / extent;
            (d, (c[1] - r[1]).abs())
        }
        ColorSpace::Lab => {
            let c = rgb_to_lab(candidate);
            let r = rgb_to_lab(reference);
            let d = Rgb::from_array(c).sub(Rgb::from_array(r)).length() / 100.0;
            (d, (c[0] - r[0]).abs() / 100.0)
        }
        ColorSpace::Hsv => {
            let [ch, cs, cv] = rgb_to_hsv(candidate);
            let [rh, rs, rv] = rgb_to_hsv(reference);
            cylindrical(
                Cyl {
                    hue: ch,
                    sat: cs,
                    light: cv,
                },
                Cyl {
                    hue: rh,
                    sat: rs,
                    light: rv,
                },
                params,
            )
        }
        ColorSpace::Lch => {
            let [cl, cc, ch] = rgb_to_lch(candidate);
            let [rl, rc, rh] = rgb_to_lch(reference);
            cylindrical(
                Cyl {
                    hue: ch,
                    sat: clamp01(cc / LCH_MAX_CHROMA),
                    light: cl / 100.0,
                },
                Cyl {
                    hue: rh,
                    sat: clamp01(rc / LCH_MAX_CHROMA),
                    light: rl / 100.0,
                },
                params,
            )
        }
    };

    let mix = clamp01(params.luminance_mix);
    (1.0 - mix) * d_space + mix * d_space.max(luma_term)
}

#[derive(Clone, Copy)]
struct Cyl {
    hue: f32,
    sat: f32,
    light: f32,
}

fn cylindrical(c: Cyl, r: Cyl, params: &DistanceParams) -> (f32, f32) {
    let dl = (c.light - r.light).abs();
    // Near-gray references have no meaningful hue; compare brightness only.
    if r.sat <= params.saturation_threshold {
        return (dl, dl);
    }

    let hue_range = params.hue_range.clamp(0.0, 0.5);
    let hue_term = if hue_range >= 0.5 - EPS {
        0.0
    } else {
        (hue_distance(c.hue, r.hue) - hue_range).max(0.0) / (0.5 - hue_range)
    };
    let weight = c.sat.min(r.sat);
    let ds = c.sat - r.sat;
    let d = (hue_term * hue_term * weight + ds * ds + dl * dl).sqrt() / SQRT_3;
    (d, dl)
}

fn luma_excess(dy: f32, range: f32) -> f32 {
    let range = clamp01(range);
    (dy - range).max(0.0) / (1.0 - range).max(EPS)
}

#[cfg(test)]
#[path = "../../tests/unit/color/distance.rs"]
mod tests;
