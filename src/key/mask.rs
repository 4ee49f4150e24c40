use crate::{
    color::distance::{DistanceParams, color_distance},
    foundation::core::Rgb,
    foundation::math::{EPS, clamp01, smoothstep},
    params::model::{KeyReference, KeyingParameters},
};

/// Distance reported by an inert key.
pub const INERT_DISTANCE: f32 = 1.0;

/// Main key: maps a color to its raw matte value.
///
/// Built once per frame from sanitized parameters; evaluation is pure and allocation-free.
/// A custom key with a fully transparent base color is inert: every color stays opaque.

#[derive(Clone, Debug)]
pub struct KeyMaskBuilder {
    active: bool,
    reference: KeyReference,
    distance: DistanceParams,
    low: f32,
    width: f32,
    clip_black: f32,
    clip_white: f32,
    inverted: bool,
    hard: bool,
}

impl KeyMaskBuilder {
    pub fn new(params: &KeyingParameters) -> Self {
        let width = params.soft_width();
        Self {
            active: params.has_main_key(),
            reference: params.key_reference(),
            distance: params.distance_params(),
            low: (params.tolerance + params.edge_balance * width * 0.5).max(0.0),
            width,
            clip_black: params.clip_black,
            clip_white: params.clip_white,
            inverted: params.is_inverted,
            hard: params.is_complete_key,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Point of the key gradient closest to `color`.
    pub fn nearest_key(&self, color: Rgb) -> Rgb {
        project_on_segment(color, self.reference.base, self.reference.end)
    }

    /// Distance from `color` to the key gradient, in the active space.
    pub fn distance(&self, color: Rgb) -> f32 {
        if !self.active {
            return INERT_DISTANCE;
        }
        let key = self.nearest_key(color);
        color_distance(color, key, self.reference.space, &self.distance)
    }

    /// Matte value for a precomputed distance: soft threshold, clip remap, inversion.
    pub fn raw_alpha(&self, distance: f32) -> f32 {
        if !self.active {
            return 1.0;
        }
        let a = if self.hard {
            if distance < self.low + self.width * 0.5 {
                0.0
            } else {
                1.0
            }
        } else {
            smoothstep(self.low, self.low + self.width, distance)
        };
        let a = remap_clip(a, self.clip_black, self.clip_white);
        if self.inverted { 1.0 - a } else { a }
    }
}

/// Linear remap so `black` maps to 0 and `white` to 1, clamped.
pub fn remap_clip(alpha: f32, black: f32, white: f32) -> f32 {
    if black <= 0.0 && white >= 1.0 {
        return alpha;
    }
    clamp01((alpha - black) / (white - black).max(EPS))
}

/// Orthogonal projection of `c` onto the segment `a..b` in RGB.
pub fn project_on_segment(c: Rgb, a: Rgb, b: Rgb) -> Rgb {
    let ab = b.sub(a);
    let len2 = ab.dot(ab);
    if len2 <= EPS * EPS {
        return a;
    }
    let t = clamp01(c.sub(a).dot(ab) / len2);
    a.lerp(b, t)
}

#[cfg(test)]
#[path = "../../tests/unit/key/mask.rs"]
mod tests;
