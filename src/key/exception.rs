use crate::{
    color::distance::{DistanceParams, color_distance},
    color::space::ColorSpace,
    foundation::core::{Rgb, ScreenSize},
    foundation::math::{EPS, clamp01, smoothstep},
    params::model::KeyingParameters,
};

/// Secondary key for colors that must survive the main key.
///
/// The reference color runs from exception color 1 to exception color 2 across the screen along
/// the exception gradient angle, so a foreground that shades from one tone to another can be
/// protected with a single control.
#[derive(Clone, Debug)]
pub struct ExceptionKey {
    start: Rgb,
    end: Rgb,
    strength: f32,
    axis: (f32, f32),
    center: (f32, f32),
    half_diagonal: f32,
    tolerance: f32,
    width: f32,
    space: ColorSpace,
    distance: DistanceParams,
}

impl ExceptionKey {
    /// `None` when exception color 1 is unset (zero alpha).
    pub fn new(params: &KeyingParameters) -> Option<Self> {
        if !params.exception_color1.is_active() {
            return None;
        }
        let ScreenSize { width, height } = params.screen;
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        let angle = params.exception_gradient_angle;
        Some(Self {
            start: params.exception_color1.rgb(),
            end: params.exception_color2,
            strength: params.exception_gradient_strength,
            axis: (angle.cos(), angle.sin()),
            center: (w * 0.5, h * 0.5),
            half_diagonal: (0.5 * (w * w + h * h).sqrt()).max(EPS),
            tolerance: params.exception_tolerance,
            width: params.soft_width(),
            space: params.key_reference().space,
            distance: params.distance_params(),
        })
    }

    /// Position of pixel `(x, y)` along the gradient axis, `0` at one screen corner and `1` at
    /// the opposite one.
    pub fn spatial_t(&self, x: u32, y: u32) -> f32 {
        let dx = x as f32 + 0.5 - self.center.0;
        let dy = y as f32 + 0.5 - self.center.1;
        let s = (dx * self.axis.0 + dy * self.axis.1) / self.half_diagonal;
        clamp01((s + 1.0) * 0.5)
    }

    pub fn reference_at(&self, x: u32, y: u32) -> Rgb {
        if self.strength <= 0.0 {
            return self.start;
        }
        self.start
            .lerp(self.end, self.spatial_t(x, y) * self.strength)
    }

    /// Protection weight in `[0, 1]`: 1 inside the exception tolerance, fading over the soft band.
    pub fn protection(&self, color: Rgb, x: u32, y: u32) -> f32 {
        let reference = self.reference_at(x, y);
        let d = color_distance(color, reference, self.space, &self.distance);
        1.0 - smoothstep(self.tolerance, self.tolerance + self.width, d)
    }
}

/// Raise `alpha` toward opaque by protection weight `p`.
pub fn protect(alpha: f32, p: f32) -> f32 {
    alpha + (1.0 - alpha) * p
}

#[cfg(test)]
#[path = "../../tests/unit/key/exception.rs"]
mod tests;
