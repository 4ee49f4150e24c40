use crate::{
    foundation::core::ScreenSize,
    params::model::{QualityPreset, TransparencyTaps},
    refine::blur::{blur_plane, box_blur},
    render::plane::{MattePlane, RowExec},
};

/// Feathering radius as a fraction of the shorter screen side, at full strength.
pub const FEATHER_SCREEN_FRACTION: f32 = 0.01;

/// Blend toward a blurred copy whose radius scales with the render target:
/// `lerp(a, blur(a, amount * 1% * min_side), amount)`.
pub fn feather(
    src: &MattePlane,
    amount: f32,
    screen: ScreenSize,
    quality: QualityPreset,
    exec: RowExec,
) -> MattePlane {
    if amount <= 0.0 {
        return src.clone();
    }
    let radius = (amount * FEATHER_SCREEN_FRACTION * screen.min_side()).max(1.0);
    let blurred = blur_plane(src, radius, quality, exec);
    src.lerp(&blurred, amount, exec)
}

/// Blend toward a median-filtered copy with a `(2r + 1)^2` window.
pub fn denoise(src: &MattePlane, amount: f32, radius: usize, exec: RowExec) -> MattePlane {
    if amount <= 0.0 || radius == 0 {
        return src.clone();
    }
    let r = radius as isize;
    let taps = (2 * radius + 1) * (2 * radius + 1);
    MattePlane::generate(src.width(), src.height(), exec, |y, row| {
        let y = y as isize;
        let mut window = Vec::with_capacity(taps);
        for (x, dst) in row.iter_mut().enumerate() {
            let x = x as isize;
            window.clear();
            for dy in -r..=r {
                for dx in -r..=r {
                    window.push(src.get(x + dx, y + dy));
                }
            }
            let mid = window.len() / 2;
            let (_, median, _) = window.select_nth_unstable_by(mid, f32::total_cmp);
            let a = src.get(x, y);
            *dst = a + (*median - a) * amount;
        }
    })
}

/// Unsharp mask on the matte: `a + amount * 2 * (a - box3(a))`, clamped.
pub fn sharpen_edges(src: &MattePlane, amount: f32, exec: RowExec) -> MattePlane {
    if amount <= 0.0 {
        return src.clone();
    }
    let smooth = box_blur(src, 1, exec);
    MattePlane::generate(src.width(), src.height(), exec, |y, row| {
        for ((dst, &a), &s) in row.iter_mut().zip(src.row(y)).zip(smooth.row(y)) {
            *dst = (a + amount * 2.0 * (a - s)).clamp(0.0, 1.0);
        }
    })
}

/// Central-difference gradient magnitude.
pub fn gradient_magnitude(src: &MattePlane, exec: RowExec) -> MattePlane {
    MattePlane::generate(src.width(), src.height(), exec, |y, row| {
        let y = y as isize;
        for (x, dst) in row.iter_mut().enumerate() {
            let x = x as isize;
            let gx = (src.get(x + 1, y) - src.get(x - 1, y)) * 0.5;
            let gy = (src.get(x, y + 1) - src.get(x, y - 1)) * 0.5;
            *dst = (gx * gx + gy * gy).sqrt();
        }
    })
}

/// Mean over the preset's transparency neighborhood; `None` when the preset has no taps.
pub fn neighborhood_mean(
    src: &MattePlane,
    taps: TransparencyTaps,
    exec: RowExec,
) -> Option<MattePlane> {
    match taps {
        TransparencyTaps::None => None,
        TransparencyTaps::Box3 => Some(box_blur(src, 1, exec)),
        TransparencyTaps::Cross => Some(MattePlane::generate(
            src.width(),
            src.height(),
            exec,
            |y, row| {
                let y = y as isize;
                for (x, dst) in row.iter_mut().enumerate() {
                    let x = x as isize;
                    let sum = src.get(x, y)
                        + src.get(x - 1, y)
                        + src.get(x + 1, y)
                        + src.get(x, y - 1)
                        + src.get(x, y + 1);
                    *dst = sum / 5.0;
                }
            },
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/refine/detail.rs"]
mod tests;
