use crate::{
    color::distance::DistanceParams,
    color::space::ColorSpace,
    foundation::core::{Rgb, Rgba, ScreenSize},
    foundation::math::{EPS, clamp01},
};

/// Smallest gap kept between the clip levels when the caller hands in `clip_black >= clip_white`.
pub const CLIP_EPS: f32 = 1e-3;

/// Largest radius (pixels) accepted by the neighborhood stages.
pub const MAX_RADIUS_PX: f32 = 64.0;

/// Built-in key color selector. Anything but `Custom` overrides the base color and color space.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MainKeyColor {
    #[default]
    Custom,
    Green,
    Blue,
    Red,
}

impl MainKeyColor {
    /// Fixed reference color for presets, `None` for `Custom`.
    pub fn preset_rgb(self) -> Option<Rgb> {
        match self {
            Self::Custom => None,
            Self::Green => Some(Rgb::new(0.0, 1.0, 0.0)),
            Self::Blue => Some(Rgb::new(0.0, 0.0, 1.0)),
            Self::Red => Some(Rgb::new(1.0, 0.0, 0.0)),
        }
    }
}

/// Speed/quality trade-off for the neighborhood stages.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QualityPreset {
    Fast,
    #[default]
    Balanced,
    HighQuality,
}

impl QualityPreset {
    /// Gaussian support in sigmas; `None` selects a flat box filter.
    pub fn gaussian_extent(self) -> Option<f32> {
        match self {
            Self::Fast => None,
            Self::Balanced => Some(2.0),
            Self::HighQuality => Some(3.0),
        }
    }

    /// Half-width of the median window used by denoise.
    pub fn denoise_radius(self) -> usize {
        match self {
            Self::Fast | Self::Balanced => 1,
            Self::HighQuality => 2,
        }
    }

    /// Neighborhood used to stabilize semi-transparent alpha.
    pub fn transparency_taps(self) -> TransparencyTaps {
        match self {
            Self::Fast => TransparencyTaps::None,
            Self::Balanced => TransparencyTaps::Cross,
            Self::HighQuality => TransparencyTaps::Box3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransparencyTaps {
    None,
    /// Center plus 4-neighborhood.
    Cross,
    /// Full 3x3 window.
    Box3,
}

/// Which intermediate value is written to the output.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DebugMode {
    /// The final composite.
    #[default]
    Result,
    /// Raw matte (main key, clip levels, inversion, exception protection), before refinement,
    /// as opaque gray.
    Matte,
    /// The refined matte the composite uses, as opaque gray.
    RefinedMatte,
    /// Raw main-key distance, clamped to `[0, 1]`, as opaque gray.
    ColorDistance,
    /// Color after spill suppression.
    SpillSuppressed,
    /// Color after every correction stage, before replacement.
    ColorCorrected,
}

/// Resolved key reference: what to remove and in which space to compare.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyReference {
    /// Start of the key gradient.
    pub base: Rgb,
    /// End of the key gradient, already scaled by the gradient strength.
    pub end: Rgb,
    pub space: ColorSpace,
}

/// Per-frame keying parameters, already resolved and normalized by the caller.
///
/// Percent-style values are in `[0, 1]`, angles in radians, radii in pixels. The kernel treats
/// the struct as read-only; [`KeyingParameters::sanitized`] produces the clamped copy it
/// actually evaluates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KeyingParameters {
    /// Render target size, used by screen-relative stages.
    pub screen: ScreenSize,

    pub base_color: Rgba,
    pub end_color: Rgb,
    pub main_key_color: MainKeyColor,
    /// Only consulted when `main_key_color` is `Custom`.
    pub color_space: ColorSpace,

    pub tolerance: f32,
    pub luminance_mix: f32,
    pub hue_range: f32,
    pub saturation_threshold: f32,
    pub luminance_range: f32,

    pub edge_softness: f32,
    pub clip_black: f32,
    pub clip_white: f32,
    pub edge_blur: f32,
    pub despot: f32,
    /// Signed: negative shrinks the opaque region, positive grows it.
    pub erode: f32,
    /// Signed sub-pixel boundary bias.
    pub key_cleanup: f32,
    pub edge_detection: f32,
    pub denoise: f32,
    pub feathering: f32,

    pub gradient_strength: f32,
    pub gradient_angle: f32,

    pub spill_suppression: f32,
    /// `[-1, 1]`: positive pushes the key boundary into the foreground.
    pub edge_balance: f32,
    pub edge_desaturation: f32,

    pub replace_color: Rgba,
    pub replace_intensity: f32,
    pub preserve_luminance: f32,

    pub exception_color1: Rgba,
    pub exception_color2: Rgb,
    pub exception_tolerance: f32,
    pub exception_gradient_strength: f32,
    pub exception_gradient_angle: f32,

    pub residual_color_correction: f32,
    pub target_residual_color: Rgb,
    pub corrected_color: Rgb,
    pub correction_tolerance: f32,

    pub transparency_quality: f32,
    pub alpha_blend_adjustment: f32,
    pub translucent_despill: f32,

    /// `[-1, 1]`, neutral at 0.
    pub foreground_brightness: f32,
    /// `[-1, 1]`, neutral at 0.
    pub foreground_contrast: f32,
    /// `[-1, 1]`, neutral at 0.
    pub foreground_saturation: f32,

    pub is_inverted: bool,
    pub is_complete_key: bool,
    pub quality_preset: QualityPreset,
    pub debug_mode: DebugMode,
}

impl Default for KeyingParameters {
    fn default() -> Self {
        Self {
            screen: ScreenSize::default(),
            base_color: Rgba::TRANSPARENT,
            end_color: Rgb::BLACK,
            main_key_color: MainKeyColor::Custom,
            color_space: ColorSpace::Lab,
            tolerance: 0.2,
            luminance_mix: 0.5,
            hue_range: 0.1,
            saturation_threshold: 0.1,
            luminance_range: 0.4,
            edge_softness: 0.1,
            clip_black: 0.0,
            clip_white: 1.0,
            edge_blur: 0.0,
            despot: 0.0,
            erode: 0.0,
            key_cleanup: 0.0,
            edge_detection: 0.0,
            denoise: 0.0,
            feathering: 0.0,
            gradient_strength: 0.0,
            gradient_angle: std::f32::consts::FRAC_PI_2,
            spill_suppression: 0.15,
            edge_balance: 0.0,
            edge_desaturation: 0.2,
            replace_color: Rgba::TRANSPARENT,
            replace_intensity: 0.0,
            preserve_luminance: 0.75,
            exception_color1: Rgba::TRANSPARENT,
            exception_color2: Rgb::BLACK,
            exception_tolerance: 0.1,
            exception_gradient_strength: 0.0,
            exception_gradient_angle: std::f32::consts::FRAC_PI_2,
            residual_color_correction: 0.0,
            target_residual_color: Rgb::BLACK,
            corrected_color: Rgb::BLACK,
            correction_tolerance: 0.2,
            transparency_quality: 0.5,
            alpha_blend_adjustment: 0.0,
            translucent_despill: 0.0,
            foreground_brightness: 0.0,
            foreground_contrast: 0.0,
            foreground_saturation: 0.0,
            is_inverted: false,
            is_complete_key: false,
            quality_preset: QualityPreset::Balanced,
            debug_mode: DebugMode::Result,
        }
    }
}

impl KeyingParameters {
    /// Copy with every value forced into its documented range.
    ///
    /// Non-finite numbers collapse to the neutral value of their control, and inverted clip
    /// levels become `clip_black = clip_white - CLIP_EPS`. The result never yields NaN or
    /// negative alpha downstream.
    pub fn sanitized(&self) -> Self {
        let (clip_black, clip_white) = sanitize_clip(self.clip_black, self.clip_white);
        Self {
            screen: self.screen,
            base_color: rgba01(self.base_color),
            end_color: rgb01(self.end_color),
            main_key_color: self.main_key_color,
            color_space: self.color_space,
            tolerance: clamp01(self.tolerance),
            luminance_mix: clamp01(self.luminance_mix),
            hue_range: finite_or(self.hue_range, 0.0).clamp(0.0, 0.5),
            saturation_threshold: clamp01(self.saturation_threshold),
            luminance_range: clamp01(self.luminance_range),
            edge_softness: clamp01(self.edge_softness),
            clip_black,
            clip_white,
            edge_blur: radius(self.edge_blur),
            despot: radius(self.despot),
            erode: signed_radius(self.erode),
            key_cleanup: signed_radius(self.key_cleanup),
            edge_detection: clamp01(self.edge_detection),
            denoise: clamp01(self.denoise),
            feathering: clamp01(self.feathering),
            gradient_strength: clamp01(self.gradient_strength),
            gradient_angle: finite_or(self.gradient_angle, 0.0),
            spill_suppression: clamp01(self.spill_suppression),
            edge_balance: signed_unit(self.edge_balance),
            edge_desaturation: clamp01(self.edge_desaturation),
            replace_color: rgba01(self.replace_color),
            replace_intensity: clamp01(self.replace_intensity),
            preserve_luminance: clamp01(self.preserve_luminance),
            exception_color1: rgba01(self.exception_color1),
            exception_color2: rgb01(self.exception_color2),
            exception_tolerance: clamp01(self.exception_tolerance),
            exception_gradient_strength: clamp01(self.exception_gradient_strength),
            exception_gradient_angle: finite_or(self.exception_gradient_angle, 0.0),
            residual_color_correction: clamp01(self.residual_color_correction),
            target_residual_color: rgb01(self.target_residual_color),
            corrected_color: rgb01(self.corrected_color),
            correction_tolerance: clamp01(self.correction_tolerance),
            transparency_quality: clamp01(self.transparency_quality),
            alpha_blend_adjustment: clamp01(self.alpha_blend_adjustment),
            translucent_despill: clamp01(self.translucent_despill),
            foreground_brightness: signed_unit(self.foreground_brightness),
            foreground_contrast: signed_unit(self.foreground_contrast),
            foreground_saturation: signed_unit(self.foreground_saturation),
            is_inverted: self.is_inverted,
            is_complete_key: self.is_complete_key,
            quality_preset: self.quality_preset,
            debug_mode: self.debug_mode,
        }
    }

    /// `true` when the clip levels would have to be repaired by [`Self::sanitized`].
    pub fn has_inverted_clip(&self) -> bool {
        self.clip_black >= self.clip_white
    }

    /// `false` for a custom key whose base color is fully transparent; such a key removes nothing.
    pub fn has_main_key(&self) -> bool {
        self.main_key_color != MainKeyColor::Custom || self.base_color.is_active()
    }

    /// Resolve the main key reference.
    ///
    /// Presets use a fixed color compared in YUV and ignore the gradient. For `Custom`, the end
    /// of the gradient is `lerp(base, end, gradient_strength)`, so a zero strength collapses the
    /// range onto the base color.
    pub fn key_reference(&self) -> KeyReference {
        if let Some(rgb) = self.main_key_color.preset_rgb() {
            return KeyReference {
                base: rgb,
                end: rgb,
                space: ColorSpace::Yuv,
            };
        }
        let base = self.base_color.rgb();
        let end = if self.gradient_strength <= 0.0 {
            base
        } else {
            base.lerp(self.end_color, self.gradient_strength)
        };
        KeyReference {
            base,
            end,
            space: self.color_space,
        }
    }

    pub fn distance_params(&self) -> DistanceParams {
        DistanceParams {
            hue_range: self.hue_range,
            saturation_threshold: self.saturation_threshold,
            luminance_range: self.luminance_range,
            luminance_mix: self.luminance_mix,
        }
    }

    /// Width of the soft transition band in distance units.
    pub fn soft_width(&self) -> f32 {
        self.edge_softness.max(EPS)
    }

    /// `true` when every neighborhood stage is disabled, so a pixel depends on itself only.
    pub fn is_pointwise(&self) -> bool {
        self.edge_blur == 0.0
            && self.erode == 0.0
            && self.despot == 0.0
            && self.key_cleanup == 0.0
            && self.feathering == 0.0
            && self.edge_detection == 0.0
            && self.denoise == 0.0
            && (self.is_complete_key || self.edge_desaturation == 0.0)
            && (self.transparency_quality == 0.0
                || self.quality_preset.transparency_taps() == TransparencyTaps::None)
    }
}

fn sanitize_clip(black: f32, white: f32) -> (f32, f32) {
    let black = clamp01(black);
    let white = clamp01(finite_or(white, 1.0));
    if black < white {
        return (black, white);
    }
    if white >= CLIP_EPS {
        (white - CLIP_EPS, white)
    } else {
        (0.0, CLIP_EPS)
    }
}

fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() { v } else { fallback }
}

fn radius(v: f32) -> f32 {
    finite_or(v, 0.0).clamp(0.0, MAX_RADIUS_PX)
}

fn signed_radius(v: f32) -> f32 {
    finite_or(v, 0.0).clamp(-MAX_RADIUS_PX, MAX_RADIUS_PX)
}

fn signed_unit(v: f32) -> f32 {
    finite_or(v, 0.0).clamp(-1.0, 1.0)
}

fn rgb01(c: Rgb) -> Rgb {
    c.map(clamp01)
}

fn rgba01(c: Rgba) -> Rgba {
    Rgba::new(clamp01(c.r), clamp01(c.g), clamp01(c.b), clamp01(c.a))
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
