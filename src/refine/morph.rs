//! Min/max morphology on mattes.
//!
//! Radii may be fractional: the result is the per-pixel lerp between the floor and ceiling
//! integer radius, so a slider moves the matte boundary continuously.

use crate::render::plane::{MattePlane, RowExec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphOp {
    /// Min filter: shrinks the opaque region.
    Erode,
    /// Max filter: grows the opaque region.
    Dilate,
}

impl MorphOp {
    fn pick(self, a: f32, b: f32) -> f32 {
        match self {
            Self::Erode => a.min(b),
            Self::Dilate => a.max(b),
        }
    }

    /// Negative amounts erode, positive amounts dilate.
    pub fn for_signed(amount: f32) -> Self {
        if amount < 0.0 {
            Self::Erode
        } else {
            Self::Dilate
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphShape {
    /// `(2r + 1)^2` window, evaluated separably.
    Square,
    /// L1 ball of radius `r`, built from `r` cross passes.
    Diamond,
}

/// Morphology by a signed fractional radius: `|amount|` pixels of `MorphOp::for_signed(amount)`.
pub fn morph_signed(
    src: &MattePlane,
    amount: f32,
    shape: MorphShape,
    exec: RowExec,
) -> MattePlane {
    let op = MorphOp::for_signed(amount);
    let r = amount.abs();
    let lo = r.floor();
    let frac = r - lo;
    let lo = lo as usize;

    let near = morph(src, lo, op, shape, exec);
    if frac <= 1e-4 {
        return near;
    }
    let far = morph(src, lo + 1, op, shape, exec);
    near.lerp(&far, frac, exec)
}

/// Integer-radius morphology. Radius 0 returns the input unchanged.
pub fn morph(
    src: &MattePlane,
    radius: usize,
    op: MorphOp,
    shape: MorphShape,
    exec: RowExec,
) -> MattePlane {
    if radius == 0 {
        return src.clone();
    }
    match shape {
        MorphShape::Square => {
            let tmp = line_pass(src, radius, op, true, exec);
            line_pass(&tmp, radius, op, false, exec)
        }
        MorphShape::Diamond => {
            let mut cur = cross_pass(src, op, exec);
            for _ in 1..radius {
                cur = cross_pass(&cur, op, exec);
            }
            cur
        }
    }
}

/// Which filter of a despeckle runs first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeckleOrder {
    /// Opening then closing: opaque islands go before holes are filled.
    OpenClose,
    /// Closing then opening. On `1 - m` this mirrors `OpenClose` on `m`.
    CloseOpen,
}

/// Remove specks up to `radius` pixels with an opening (drops small opaque islands) and a
/// closing (fills small holes), in `order`.
pub fn despeckle(
    src: &MattePlane,
    radius: f32,
    order: SpeckleOrder,
    exec: RowExec,
) -> MattePlane {
    let r = radius.round().max(0.0) as usize;
    if r == 0 {
        return src.clone();
    }
    let (first, second) = match order {
        SpeckleOrder::OpenClose => (MorphOp::Erode, MorphOp::Dilate),
        SpeckleOrder::CloseOpen => (MorphOp::Dilate, MorphOp::Erode),
    };
    let sq = MorphShape::Square;
    let once = morph(&morph(src, r, first, sq, exec), r, second, sq, exec);
    morph(&morph(&once, r, second, sq, exec), r, first, sq, exec)
}

fn line_pass(
    src: &MattePlane,
    radius: usize,
    op: MorphOp,
    horizontal: bool,
    exec: RowExec,
) -> MattePlane {
    let r = radius as isize;
    MattePlane::generate(src.width(), src.height(), exec, |y, row| {
        let y = y as isize;
        for (x, dst) in row.iter_mut().enumerate() {
            let x = x as isize;
            let mut v = src.get(x, y);
            for d in -r..=r {
                let s = if horizontal {
                    src.get(x + d, y)
                } else {
                    src.get(x, y + d)
                };
                v = op.pick(v, s);
            }
            *dst = v;
        }
    })
}

fn cross_pass(src: &MattePlane, op: MorphOp, exec: RowExec) -> MattePlane {
    MattePlane::generate(src.width(), src.height(), exec, |y, row| {
        let y = y as isize;
        for (x, dst) in row.iter_mut().enumerate() {
            let x = x as isize;
            let mut v = src.get(x, y);
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                v = op.pick(v, src.get(x + dx, y + dy));
            }
            *dst = v;
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/refine/morph.rs"]
mod tests;
