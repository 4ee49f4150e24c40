use crate::{
    foundation::core::{Rgba, RgbaFrame},
    foundation::error::{KeyError, KeyResult},
    key::pixel::{KeySample, MatteNeighborhood, PixelKeyer},
    params::model::{DebugMode, KeyingParameters},
    refine::detail::{gradient_magnitude, neighborhood_mean},
    refine::pipeline::refine_matte,
    render::plane::{MattePlane, RowExec},
};

/// Key one frame.
///
/// Input and output carry **straight** alpha. The output has the same dimensions as the input;
/// its alpha is the refined matte times the input alpha.
pub fn key_frame(frame: &RgbaFrame, params: &KeyingParameters) -> KeyResult<RgbaFrame> {
    key_frame_with(frame, params, &KeyThreading::default())
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KeyThreading {
    /// Spread row passes over a dedicated rayon pool.
    pub parallel: bool,
    /// Pool size; `None` lets rayon decide.
    pub threads: Option<usize>,
}

/// [`key_frame`] with explicit threading. Serial and parallel runs produce identical bytes.
#[tracing::instrument(
    skip(frame, params),
    fields(width = frame.width, height = frame.height)
)]
pub fn key_frame_with(
    frame: &RgbaFrame,
    params: &KeyingParameters,
    threading: &KeyThreading,
) -> KeyResult<RgbaFrame> {
    frame.validate()?;
    if params.has_inverted_clip() {
        tracing::warn!(
            clip_black = params.clip_black,
            clip_white = params.clip_white,
            "clip black is not below clip white, clamping"
        );
    }
    if !params.has_main_key() {
        tracing::warn!("custom base color is fully transparent, main key disabled");
    }

    let mut p = params.sanitized();
    let screen = frame.screen();
    if p.screen != screen {
        tracing::debug!(
            reported_width = p.screen.width,
            reported_height = p.screen.height,
            "reported screen differs from frame, using frame size"
        );
        p.screen = screen;
    }

    if !threading.parallel {
        return Ok(run_frame(frame, &p, RowExec::SERIAL));
    }
    let pool = build_thread_pool(threading.threads)?;
    Ok(pool.install(|| run_frame(frame, &p, RowExec::PARALLEL)))
}

fn run_frame(frame: &RgbaFrame, p: &KeyingParameters, exec: RowExec) -> RgbaFrame {
    let keyer = PixelKeyer::new(p);
    let w = frame.width as usize;
    let h = frame.height as usize;
    let pixel = |x: usize, y: usize| {
        let i = (y * w + x) * 4;
        let d = &frame.data;
        Rgba::from_u8([d[i], d[i + 1], d[i + 2], d[i + 3]])
    };

    let mut samples = vec![
        KeySample {
            distance: 0.0,
            alpha: 0.0,
        };
        w * h
    ];
    exec.fill_rows(&mut samples, w, |y, row| {
        for (x, s) in row.iter_mut().enumerate() {
            *s = keyer.sample(pixel(x, y), x as u32, y as u32);
        }
    });
    let distance = MattePlane::from_vec(w, h, samples.iter().map(|s| s.distance).collect());
    let raw = MattePlane::from_vec(w, h, samples.into_iter().map(|s| s.alpha).collect());

    let matte = refine_matte(&raw, p, exec);
    let edge = needs_edges(p).then(|| gradient_magnitude(&matte, exec));
    let mean = if p.transparency_quality > 0.0 {
        neighborhood_mean(&matte, p.quality_preset.transparency_taps(), exec)
    } else {
        None
    };
    tracing::debug!(
        edges = edge.is_some(),
        transparency = mean.is_some(),
        "color pass"
    );

    let mut data = vec![0u8; w * h * 4];
    exec.fill_rows(&mut data, w * 4, |y, row| {
        for (x, out) in row.chunks_exact_mut(4).enumerate() {
            let m = matte.at(x, y);
            let n = MatteNeighborhood {
                raw: raw.at(x, y),
                matte: m,
                edge: edge.as_ref().map_or(0.0, |e| e.at(x, y)),
                mean: mean.as_ref().map_or(m, |e| e.at(x, y)),
            };
            let px = keyer.shade(pixel(x, y), distance.at(x, y), n);
            out.copy_from_slice(&px.to_u8());
        }
    });

    RgbaFrame {
        width: frame.width,
        height: frame.height,
        data,
    }
}

fn needs_edges(p: &KeyingParameters) -> bool {
    !p.is_complete_key
        && p.edge_desaturation > 0.0
        && !matches!(
            p.debug_mode,
            DebugMode::Matte
                | DebugMode::RefinedMatte
                | DebugMode::ColorDistance
                | DebugMode::SpillSuppressed
        )
}

fn build_thread_pool(threads: Option<usize>) -> KeyResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(KeyError::validation(
            "key threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| KeyError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/kernel.rs"]
mod tests;
