use crate::{
    correct::replace::{
        composite_replacement, preserve_luminance, refine_transparency, unmix_background,
    },
    correct::residual::ResidualCorrection,
    correct::spill::{spill_amount, spill_reach, suppress_spill},
    correct::tone::{ToneAdjust, desaturate, edge_weight},
    foundation::core::Rgba,
    key::exception::{ExceptionKey, protect},
    key::mask::KeyMaskBuilder,
    params::model::KeyingParameters,
    render::debug::{StageTaps, select_view},
};

/// Main-key result for one pixel, before any neighborhood stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeySample {
    pub distance: f32,
    pub alpha: f32,
}

/// Neighborhood-derived inputs of the color pass. All but `raw` come from the refined matte.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatteNeighborhood {
    /// Matte before refinement, for the raw matte view.
    pub raw: f32,
    pub matte: f32,
    /// Gradient magnitude of the refined matte.
    pub edge: f32,
    /// Mean of the refined matte over the transparency taps.
    pub mean: f32,
}

impl MatteNeighborhood {
    /// A pixel seen in isolation: flat surroundings equal to its own matte.
    pub fn isolated(matte: f32) -> Self {
        Self {
            raw: matte,
            matte,
            edge: 0.0,
            mean: matte,
        }
    }
}

/// Everything the per-pixel stages need, resolved once per frame.
#[derive(Clone, Debug)]
pub struct PixelKeyer {
    params: KeyingParameters,
    mask: KeyMaskBuilder,
    exception: Option<ExceptionKey>,
    reach: f32,
    tone: ToneAdjust,
    residual: ResidualCorrection,
}

impl PixelKeyer {
    /// `params` must already be sanitized.
    pub fn new(params: &KeyingParameters) -> Self {
        Self {
            mask: KeyMaskBuilder::new(params),
            exception: ExceptionKey::new(params),
            reach: spill_reach(params.tolerance, params.soft_width()),
            tone: ToneAdjust {
                brightness: params.foreground_brightness,
                contrast: params.foreground_contrast,
                saturation: params.foreground_saturation,
            },
            residual: ResidualCorrection {
                target: params.target_residual_color,
                corrected: params.corrected_color,
                strength: params.residual_color_correction,
                tolerance: params.correction_tolerance,
            },
            params: params.clone(),
        }
    }

    pub fn params(&self) -> &KeyingParameters {
        &self.params
    }

    /// Distance and raw matte (main key, clip, inversion, exception protection).
    pub fn sample(&self, px: Rgba, x: u32, y: u32) -> KeySample {
        let color = px.rgb();
        let distance = self.mask.distance(color);
        let mut alpha = self.mask.raw_alpha(distance);
        if let Some(ex) = &self.exception {
            alpha = protect(alpha, ex.protection(color, x, y));
        }
        KeySample { distance, alpha }
    }

    /// Color pass and alpha finishing for one pixel, then debug view selection.
    pub fn shade(&self, px: Rgba, distance: f32, n: MatteNeighborhood) -> Rgba {
        let p = &self.params;
        let original = px.rgb();
        let key = self.mask.nearest_key(original);
        let soft = !p.is_complete_key;
        let keyed = self.mask.is_active();

        let mut color = original;
        if soft && keyed {
            let amount = spill_amount(
                p.spill_suppression,
                p.translucent_despill,
                distance,
                self.reach,
                n.matte,
            );
            color = suppress_spill(color, key, amount);
        }
        let spill_suppressed = color;

        if soft && p.edge_desaturation > 0.0 {
            color = desaturate(color, p.edge_desaturation * edge_weight(n.edge));
        }
        color = self.residual.apply(color);
        color = self.tone.apply(color);

        let mut alpha = n.matte;
        if p.transparency_quality > 0.0 {
            alpha = refine_transparency(alpha, n.mean, p.transparency_quality);
        }
        if keyed {
            color = unmix_background(color, alpha, key, p.alpha_blend_adjustment);
        }
        let corrected = color;

        if p.replace_intensity > 0.0 && p.replace_color.is_active() {
            let mut replace = p.replace_color;
            if soft {
                let shifted = preserve_luminance(replace.rgb(), original, p.preserve_luminance);
                replace = Rgba::from_rgb(shifted, replace.a);
            }
            (color, alpha) = composite_replacement(color, alpha, replace, p.replace_intensity);
        }

        let taps = StageTaps {
            distance,
            raw_matte: n.raw,
            refined_matte: n.matte,
            spill_suppressed,
            corrected,
            result: Rgba::from_rgb(color.clamped(), alpha * px.a),
        };
        select_view(p.debug_mode, &taps)
    }
}

/// Key a single straight-alpha pixel at `(x, y)` of the reported screen.
///
/// Neighborhood stages see the pixel in isolation, so this matches [`crate::key_frame`] exactly
/// when [`KeyingParameters::is_pointwise`] holds.
pub fn key_pixel(px: Rgba, x: u32, y: u32, params: &KeyingParameters) -> Rgba {
    let keyer = PixelKeyer::new(&params.sanitized());
    let s = keyer.sample(px, x, y);
    keyer.shade(px, s.distance, MatteNeighborhood::isolated(s.alpha))
}

#[cfg(test)]
#[path = "../../tests/unit/key/pixel.rs"]
mod tests;
