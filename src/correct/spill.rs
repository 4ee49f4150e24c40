use crate::{
    foundation::core::Rgb,
    foundation::math::clamp01,
};

/// Smallest distance reach over which spill fades out.
const MIN_REACH: f32 = 0.05;

/// How far (in distance units) spill suppression reaches from the key, given the key boundary.
pub fn spill_reach(tolerance: f32, soft_width: f32) -> f32 {
    (tolerance + soft_width).max(MIN_REACH) * 2.0
}

/// Suppression strength for one pixel: the spill control scaled by proximity to the key, plus
/// translucent despill scaled by how semi-transparent the pixel is.
pub fn spill_amount(
    spill: f32,
    translucent: f32,
    distance: f32,
    reach: f32,
    alpha: f32,
) -> f32 {
    let proximity = clamp01(1.0 - distance / reach);
    let semi = 4.0 * alpha * (1.0 - alpha);
    clamp01(spill * proximity + translucent * semi)
}

/// Pull the key's dominant channel down toward the mean of the other two.
///
/// Only the excess above that mean is touched, so neutral colors pass through unchanged.
pub fn suppress_spill(color: Rgb, key: Rgb, amount: f32) -> Rgb {
    if amount <= 0.0 {
        return color;
    }
    let k = key.dominant_channel();
    let mut c = color.to_array();
    let others = (c[(k + 1) % 3] + c[(k + 2) % 3]) * 0.5;
    let excess = (c[k] - others).max(0.0);
    c[k] -= excess * amount;
    Rgb::from_array(c)
}

#[cfg(test)]
#[path = "../../tests/unit/correct/spill.rs"]
mod tests;
