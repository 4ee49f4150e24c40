use crate::{
    params::model::KeyingParameters,
    refine::blur::blur_plane,
    refine::detail::{denoise, feather, sharpen_edges},
    refine::morph::{MorphShape, SpeckleOrder, despeckle, morph_signed},
    render::plane::{MattePlane, RowExec},
};

/// Run the matte refinement stages in order:
/// edge blur, erode, despot, key cleanup, feathering, denoise, edge detection.
///
/// `params` must already be sanitized. Each stage is skipped when its control is zero, so with
/// every control at zero the output equals the input.
///
/// An inverted matte has its morphology mirrored, so without exception protection
/// refining an inverted raw matte yields exactly `1 -` the refined plain matte.
/// Protection happens before refinement and only ever raises the raw matte, which breaks
/// that symmetry wherever an exception color matches.
#[tracing::instrument(skip_all, fields(width = raw.width(), height = raw.height()))]
pub fn refine_matte(raw: &MattePlane, params: &KeyingParameters, exec: RowExec) -> MattePlane {
    let quality = params.quality_preset;
    let (polarity, speckle) = if params.is_inverted {
        (-1.0, SpeckleOrder::CloseOpen)
    } else {
        (1.0, SpeckleOrder::OpenClose)
    };
    let mut matte = raw.clone();

    if params.edge_blur > 0.0 {
        matte = blur_plane(&matte, params.edge_blur, quality, exec);
    }
    if params.erode != 0.0 {
        matte = morph_signed(&matte, polarity * params.erode, MorphShape::Square, exec);
    }
    if params.despot > 0.0 {
        matte = despeckle(&matte, params.despot, speckle, exec);
    }
    if params.key_cleanup != 0.0 {
        matte = morph_signed(&matte, polarity * params.key_cleanup, MorphShape::Diamond, exec);
    }
    if params.feathering > 0.0 {
        matte = feather(&matte, params.feathering, params.screen, quality, exec);
    }
    if params.denoise > 0.0 {
        matte = denoise(&matte, params.denoise, quality.denoise_radius(), exec);
    }
    if params.edge_detection > 0.0 {
        matte = sharpen_edges(&matte, params.edge_detection, exec);
    }

    tracing::trace!("matte refined");
    matte
}

#[cfg(test)]
#[path = "../../tests/unit/refine/pipeline.rs"]
mod tests;
