use crate::{
    params::model::QualityPreset,
    render::plane::{MattePlane, RowExec},
};

/// Blur `src` with a separable kernel of nominal radius `radius_px`.
///
/// The quality preset picks the kernel: a flat box for `Fast`, a Gaussian with
/// `sigma = radius / 2` truncated at 2 or 3 sigma otherwise. A radius below half a pixel returns
/// the input unchanged.
pub fn blur_plane(
    src: &MattePlane,
    radius_px: f32,
    quality: QualityPreset,
    exec: RowExec,
) -> MattePlane {
    if radius_px.is_nan() || radius_px < 0.5 {
        return src.clone();
    }
    let kernel = match quality.gaussian_extent() {
        Some(extent) => gaussian_kernel(radius_px / 2.0, extent),
        None => box_kernel(radius_px),
    };
    convolve_separable(src, &kernel, exec)
}

/// Flat `(2r + 1)`-tap mean, used directly by the detail stages.
pub fn box_blur(src: &MattePlane, radius: usize, exec: RowExec) -> MattePlane {
    if radius == 0 {
        return src.clone();
    }
    convolve_separable(src, &box_kernel(radius as f32), exec)
}

fn gaussian_kernel(sigma: f32, extent: f32) -> Vec<f32> {
    let r = (sigma * extent).ceil().max(1.0) as i32;
    let denom = 2.0 * sigma * sigma;
    let mut weights: Vec<f32> = (-r..=r)
        .map(|i| {
            let x = i as f32;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

fn box_kernel(radius_px: f32) -> Vec<f32> {
    let taps = 2 * radius_px.round().max(1.0) as usize + 1;
    vec![1.0 / taps as f32; taps]
}

fn convolve_separable(src: &MattePlane, k: &[f32], exec: RowExec) -> MattePlane {
    let tmp = horizontal_pass(src, k, exec);
    vertical_pass(&tmp, k, exec)
}

fn horizontal_pass(src: &MattePlane, k: &[f32], exec: RowExec) -> MattePlane {
    let radius = (k.len() / 2) as isize;
    MattePlane::generate(src.width(), src.height(), exec, |y, row| {
        let y = y as isize;
        for (x, dst) in row.iter_mut().enumerate() {
            let x = x as isize;
            let mut acc = 0.0f32;
            for (ki, &kw) in k.iter().enumerate() {
                acc += kw * src.get(x + ki as isize - radius, y);
            }
            *dst = acc.clamp(0.0, 1.0);
        }
    })
}

fn vertical_pass(src: &MattePlane, k: &[f32], exec: RowExec) -> MattePlane {
    let radius = (k.len() / 2) as isize;
    MattePlane::generate(src.width(), src.height(), exec, |y, row| {
        let y = y as isize;
        for (x, dst) in row.iter_mut().enumerate() {
            let x = x as isize;
            let mut acc = 0.0f32;
            for (ki, &kw) in k.iter().enumerate() {
                acc += kw * src.get(x, y + ki as isize - radius);
            }
            *dst = acc.clamp(0.0, 1.0);
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/refine/blur.rs"]
mod tests;
