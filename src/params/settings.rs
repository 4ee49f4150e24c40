//! Host-unit settings record.
//!
//! This is what a user edits: percentages, degrees, pixel radii and 8-bit colors, with the same
//! defaults as the effect's property panel. [`KeySettings::resolve`] performs the caller-side unit
//! conversion into [`KeyingParameters`].

use std::path::Path;

use crate::{
    color::space::ColorSpace,
    foundation::core::{Rgb, Rgba, ScreenSize},
    foundation::error::{KeyError, KeyResult},
    params::model::{DebugMode, KeyingParameters, MainKeyColor, QualityPreset},
};

/// Straight RGBA8 color as written in settings documents.
pub type Color8 = [u8; 4];

const TRANSPARENT: Color8 = [0, 0, 0, 0];

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KeySettings {
    pub base_color: Color8,
    pub end_color: Color8,
    pub main_key_color: MainKeyColor,
    pub color_space: ColorSpace,

    /// Percent.
    pub tolerance: f32,
    pub luminance_mix: f32,
    pub edge_softness: f32,
    pub clip_black: f32,
    pub clip_white: f32,
    /// Pixels.
    pub edge_blur: f32,

    pub gradient_strength: f32,
    /// Degrees.
    pub gradient_angle: f32,

    pub replace_color: Color8,
    pub replace_intensity: f32,
    pub preserve_luminance: f32,

    /// Percent, `0..=50`.
    pub hue_range: f32,
    pub saturation_threshold: f32,
    pub luminance_range: f32,

    pub spill_suppression: f32,
    /// Percent, `-100..=100`.
    pub edge_balance: f32,
    /// Pixels.
    pub despot: f32,
    /// Pixels, `-10..=10`.
    pub erode: f32,

    pub exception_color1: Color8,
    pub exception_color2: Color8,
    pub exception_tolerance: f32,
    pub exception_gradient_strength: f32,
    /// Degrees.
    pub exception_gradient_angle: f32,

    pub edge_desaturation: f32,
    /// Pixels, `-50..=50`.
    pub key_cleanup: f32,
    pub edge_detection: f32,
    pub denoise: f32,
    pub feathering: f32,

    pub residual_color_correction: f32,
    pub target_residual_color: Color8,
    pub corrected_color: Color8,
    pub correction_tolerance: f32,

    pub transparency_quality: f32,
    pub alpha_blend_adjustment: f32,
    pub translucent_despill: f32,

    /// Percent, `-100..=100`.
    pub foreground_brightness: f32,
    pub foreground_contrast: f32,
    pub foreground_saturation: f32,

    pub is_complete_key: bool,
    pub is_inverted: bool,
    pub quality_preset: QualityPreset,
    pub debug_mode: DebugMode,
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            base_color: TRANSPARENT,
            end_color: TRANSPARENT,
            main_key_color: MainKeyColor::Custom,
            color_space: ColorSpace::Lab,
            tolerance: 20.0,
            luminance_mix: 50.0,
            edge_softness: 10.0,
            clip_black: 0.0,
            clip_white: 100.0,
            edge_blur: 0.0,
            gradient_strength: 0.0,
            gradient_angle: 90.0,
            replace_color: TRANSPARENT,
            replace_intensity: 0.0,
            preserve_luminance: 75.0,
            hue_range: 10.0,
            saturation_threshold: 10.0,
            luminance_range: 40.0,
            spill_suppression: 15.0,
            edge_balance: 0.0,
            despot: 0.0,
            erode: 0.0,
            exception_color1: TRANSPARENT,
            exception_color2: TRANSPARENT,
            exception_tolerance: 10.0,
            exception_gradient_strength: 0.0,
            exception_gradient_angle: 90.0,
            edge_desaturation: 20.0,
            key_cleanup: 0.0,
            edge_detection: 0.0,
            denoise: 0.0,
            feathering: 0.0,
            residual_color_correction: 0.0,
            target_residual_color: TRANSPARENT,
            corrected_color: TRANSPARENT,
            correction_tolerance: 20.0,
            transparency_quality: 50.0,
            alpha_blend_adjustment: 0.0,
            translucent_despill: 0.0,
            foreground_brightness: 0.0,
            foreground_contrast: 0.0,
            foreground_saturation: 0.0,
            is_complete_key: false,
            is_inverted: false,
            quality_preset: QualityPreset::Balanced,
            debug_mode: DebugMode::Result,
        }
    }
}

impl KeySettings {
    pub fn from_json_str(s: &str) -> KeyResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> KeyResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            KeyError::Other(anyhow::Error::new(e).context(format!(
                "read key settings '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Set the base color; the end color follows it, like picking a base color in the panel.
    pub fn with_base_color(mut self, color: Color8) -> Self {
        self.base_color = color;
        self.end_color = color;
        self
    }

    /// Set exception color 1; exception color 2 follows it.
    pub fn with_exception_color(mut self, color: Color8) -> Self {
        self.exception_color1 = color;
        self.exception_color2 = color;
        self
    }

    /// Convert to kernel units for a render target of size `screen`.
    pub fn resolve(&self, screen: ScreenSize) -> KeyingParameters {
        fn pct(v: f32) -> f32 {
            v / 100.0
        }

        KeyingParameters {
            screen,
            base_color: Rgba::from_u8(self.base_color),
            end_color: rgb(self.end_color),
            main_key_color: self.main_key_color,
            color_space: self.color_space,
            tolerance: pct(self.tolerance),
            luminance_mix: pct(self.luminance_mix),
            hue_range: pct(self.hue_range),
            saturation_threshold: pct(self.saturation_threshold),
            luminance_range: pct(self.luminance_range),
            edge_softness: pct(self.edge_softness),
            clip_black: pct(self.clip_black),
            clip_white: pct(self.clip_white),
            edge_blur: self.edge_blur,
            despot: self.despot,
            erode: self.erode,
            key_cleanup: self.key_cleanup,
            edge_detection: pct(self.edge_detection),
            denoise: pct(self.denoise),
            feathering: pct(self.feathering),
            gradient_strength: pct(self.gradient_strength),
            gradient_angle: self.gradient_angle.to_radians(),
            spill_suppression: pct(self.spill_suppression),
            edge_balance: pct(self.edge_balance),
            edge_desaturation: pct(self.edge_desaturation),
            replace_color: Rgba::from_u8(self.replace_color),
            replace_intensity: pct(self.replace_intensity),
            preserve_luminance: pct(self.preserve_luminance),
            exception_color1: Rgba::from_u8(self.exception_color1),
            exception_color2: rgb(self.exception_color2),
            exception_tolerance: pct(self.exception_tolerance),
            exception_gradient_strength: pct(self.exception_gradient_strength),
            exception_gradient_angle: self.exception_gradient_angle.to_radians(),
            residual_color_correction: pct(self.residual_color_correction),
            target_residual_color: rgb(self.target_residual_color),
            corrected_color: rgb(self.corrected_color),
            correction_tolerance: pct(self.correction_tolerance),
            transparency_quality: pct(self.transparency_quality),
            alpha_blend_adjustment: pct(self.alpha_blend_adjustment),
            translucent_despill: pct(self.translucent_despill),
            foreground_brightness: pct(self.foreground_brightness),
            foreground_contrast: pct(self.foreground_contrast),
            foreground_saturation: pct(self.foreground_saturation),
            is_inverted: self.is_inverted,
            is_complete_key: self.is_complete_key,
            quality_preset: self.quality_preset,
            debug_mode: self.debug_mode,
        }
    }
}

fn rgb(c: Color8) -> Rgb {
    Rgb::from_u8(c[0], c[1], c[2])
}

#[cfg(test)]
#[path = "../../tests/unit/params/settings.rs"]
mod tests;
