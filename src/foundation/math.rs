use crate::foundation::core::Rgb;

/// Smallest divisor / width the kernel allows; guards every normalization.
pub const EPS: f32 = 1e-5;

pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite step between `edge0` and `edge1`. A degenerate interval acts as a hard step at `edge0`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 - edge0 <= EPS {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp01((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// BT.709 luma of an encoded triple.
pub fn luma709(c: Rgb) -> f32 {
    0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b
}

/// Circular distance between two hues expressed in turns; result in `[0, 0.5]`.
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(1.0);
    d.min(1.0 - d)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
