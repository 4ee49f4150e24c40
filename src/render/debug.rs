use crate::{
    foundation::core::{Rgb, Rgba},
    foundation::math::clamp01,
    params::model::DebugMode,
};

/// Intermediate values of one pixel's evaluation, captured for debug output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageTaps {
    pub distance: f32,
    /// Matte before refinement.
    pub raw_matte: f32,
    /// Matte after refinement, as composited.
    pub refined_matte: f32,
    pub spill_suppressed: Rgb,
    pub corrected: Rgb,
    pub result: Rgba,
}

/// Pick the value written for `mode`. Every view except `Result` is opaque.
pub fn select_view(mode: DebugMode, taps: &StageTaps) -> Rgba {
    match mode {
        DebugMode::Result => taps.result,
        DebugMode::Matte => gray(taps.raw_matte),
        DebugMode::RefinedMatte => gray(taps.refined_matte),
        DebugMode::ColorDistance => gray(taps.distance),
        DebugMode::SpillSuppressed => Rgba::from_rgb(taps.spill_suppressed.clamped(), 1.0),
        DebugMode::ColorCorrected => Rgba::from_rgb(taps.corrected.clamped(), 1.0),
    }
}

fn gray(v: f32) -> Rgba {
    let v = clamp01(v);
    Rgba::new(v, v, v, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/render/debug.rs"]
mod tests;
