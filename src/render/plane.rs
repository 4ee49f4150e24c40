use rayon::prelude::*;

/// Row scheduler for whole-plane passes.
///
/// Each pass writes into a buffer it exclusively owns while reading only from planes produced by
/// earlier passes, so rows can run in any order on any thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowExec {
    pub parallel: bool,
}

impl RowExec {
    pub const SERIAL: Self = Self { parallel: false };
    pub const PARALLEL: Self = Self { parallel: true };

    /// Call `f(y, row)` for every `stride`-wide row of `out`.
    pub fn fill_rows<T, F>(self, out: &mut [T], stride: usize, f: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Sync + Send,
    {
        if stride == 0 {
            return;
        }
        if self.parallel {
            out.par_chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        } else {
            out.chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
    }
}

/// Scalar `f32` plane (a matte, a distance field, a gradient magnitude), row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct MattePlane {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl MattePlane {
    pub fn new(width: usize, height: usize, fill: f32) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    /// Wrap `data`; callers guarantee `data.len() == width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Build a plane row by row into a freshly owned buffer.
    pub fn generate<F>(width: usize, height: usize, exec: RowExec, f: F) -> Self
    where
        F: Fn(usize, &mut [f32]) + Sync + Send,
    {
        let mut data = vec![0.0f32; width * height];
        exec.fill_rows(&mut data, width, f);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn at(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    /// Sample with clamp-to-edge addressing.
    pub fn get(&self, x: isize, y: isize) -> f32 {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        self.data[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Per-pixel `lerp(self, other, t)`.
    pub fn lerp(&self, other: &Self, t: f32, exec: RowExec) -> Self {
        Self::generate(self.width, self.height, exec, |y, row| {
            for ((dst, &a), &b) in row.iter_mut().zip(self.row(y)).zip(other.row(y)) {
                *dst = a + (b - a) * t;
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plane.rs"]
mod tests;
