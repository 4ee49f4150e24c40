//! Gradient chroma keyer.
//!
//! Removes a key color, or a two-color gradient of key colors, from straight-alpha RGBA frames
//! and produces a refined, spill-corrected foreground.
//!
//! # Pipeline overview
//!
//! 1. **Key**: per pixel, distance to the key gradient in the selected color space becomes a raw
//!    matte (soft threshold, clip levels, inversion, exception protection).
//! 2. **Refine**: neighborhood stages over the whole matte (edge blur, erode, despot, key
//!    cleanup, feathering, denoise, edge detection), each skipped at zero.
//! 3. **Correct**: per pixel again, spill suppression, edge desaturation, residual color remap,
//!    foreground tone, transparency finishing and the replacement layer.
//! 4. **Debug** (optional): write an intermediate value instead of the result.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total per-pixel kernel**: out-of-range parameters are clamped, never rejected, and never
//!   produce NaN. Errors only come from frame buffers, thread pools and settings documents.
//! - **Deterministic**: serial and parallel evaluation produce identical bytes.
//! - **Straight RGBA8** in and out; premultiply at the boundary with
//!   [`RgbaFrame::to_premultiplied`].
#![forbid(unsafe_code)]

mod color;
mod correct;
mod foundation;
mod key;
mod params;
mod refine;
mod render;

pub use color::distance::{DistanceParams, color_distance};
pub use color::space::{
    ColorSpace, rgb_to_hsv, rgb_to_lab, rgb_to_lch, rgb_to_xyz, rgb_to_yuv, srgb_to_linear,
    to_space,
};
pub use foundation::core::{Rgb, Rgba, Rgba8Premul, RgbaFrame, ScreenSize};
pub use foundation::error::{KeyError, KeyResult};
pub use foundation::math::{clamp01, lerp, luma709, smoothstep};
pub use key::exception::{ExceptionKey, protect};
pub use key::mask::{KeyMaskBuilder, project_on_segment, remap_clip};
pub use key::pixel::{KeySample, MatteNeighborhood, PixelKeyer, key_pixel};
pub use params::model::{
    DebugMode, KeyReference, KeyingParameters, MainKeyColor, QualityPreset, TransparencyTaps,
};
pub use params::settings::{Color8, KeySettings};
pub use refine::pipeline::refine_matte;
pub use render::kernel::{KeyThreading, key_frame, key_frame_with};
pub use render::plane::{MattePlane, RowExec};
