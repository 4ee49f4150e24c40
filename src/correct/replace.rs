//! Alpha-side corrections and the replacement layer.

use crate::{
    foundation::core::{Rgb, Rgba},
    foundation::math::{EPS, clamp01, luma709},
};

/// Semi-transparency weight: 0 for opaque or clear pixels, 1 at `alpha = 0.5`.
pub fn semi_transparency(alpha: f32) -> f32 {
    4.0 * alpha * (1.0 - alpha)
}

/// Pull semi-transparent alpha toward its neighborhood mean by `quality`.
pub fn refine_transparency(alpha: f32, neighborhood_mean: f32, quality: f32) -> f32 {
    let t = quality * semi_transparency(alpha);
    clamp01(alpha + (neighborhood_mean - alpha) * t)
}

/// Remove the key color that bled into a semi-transparent pixel.
///
/// Treats the observed color as `fg * a + key * (1 - a)` and solves for `fg`, blending the
/// estimate in by `amount` weighted by semi-transparency.
pub fn unmix_background(color: Rgb, alpha: f32, key: Rgb, amount: f32) -> Rgb {
    if amount <= 0.0 || alpha <= 1e-3 {
        return color;
    }
    let fg = color
        .sub(key.scale(1.0 - alpha))
        .scale(1.0 / alpha)
        .clamped();
    color.lerp(fg, amount * semi_transparency(alpha))
}

/// Shift `replace` so its luma moves toward `original`'s luma by `preserve`.
pub fn preserve_luminance(replace: Rgb, original: Rgb, preserve: f32) -> Rgb {
    if preserve <= 0.0 {
        return replace;
    }
    let shift = (luma709(original) - luma709(replace)) * preserve;
    replace.map(|v| v + shift).clamped()
}

/// Composite the keyed pixel over a replacement layer of `replace` at `intensity`.
///
/// Opaque pixels are untouched; removed and transition pixels pick up the replacement color in
/// proportion to how transparent they are.
pub fn composite_replacement(color: Rgb, alpha: f32, replace: Rgba, intensity: f32) -> (Rgb, f32) {
    let under = clamp01(intensity * replace.a);
    if under <= 0.0 {
        return (color, alpha);
    }
    let out_a = alpha + under * (1.0 - alpha);
    if out_a <= EPS {
        return (color, alpha);
    }
    let c = color
        .scale(alpha)
        .add(replace.rgb().scale(under * (1.0 - alpha)))
        .scale(1.0 / out_a);
    (c.clamped(), clamp01(out_a))
}

#[cfg(test)]
#[path = "../../tests/unit/correct/replace.rs"]
mod tests;
