use crate::foundation::error::{KeyError, KeyResult};
use crate::foundation::math::clamp01;

/// sRGB-encoded color triple, channels nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn clamped(self) -> Self {
        Self::new(clamp01(self.r), clamp01(self.g), clamp01(self.b))
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    pub fn scale(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    pub fn dot(self, other: Self) -> f32 {
        self.r * other.r + self.g * other.g + self.b * other.b
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Index of the strongest channel (0 = r, 1 = g, 2 = b). Ties resolve to the lower index.
    pub fn dominant_channel(self) -> usize {
        let v = self.to_array();
        let mut best = 0;
        for i in 1..3 {
            if v[i] > v[best] {
                best = i;
            }
        }
        best
    }
}

/// Straight-alpha color, all channels nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_u8(px: [u8; 4]) -> Self {
        Self::new(
            f32::from(px[0]) / 255.0,
            f32::from(px[1]) / 255.0,
            f32::from(px[2]) / 255.0,
            f32::from(px[3]) / 255.0,
        )
    }

    pub fn from_rgb(rgb: Rgb, a: f32) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// A color with zero alpha is treated as "unset" by the features it gates.
    pub fn is_active(self) -> bool {
        self.a > 0.0
    }

    pub fn to_u8(self) -> [u8; 4] {
        fn q(v: f32) -> u8 {
            (clamp01(v) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Render target dimensions reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn min_side(self) -> f32 {
        self.width.min(self.height) as f32
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}

/// An RGBA8 frame, tightly packed and row-major.
///
/// Frames handed to and returned from the keyer carry **straight** alpha; use
/// [`RgbaFrame::to_premultiplied`] when the downstream compositor expects premultiplied pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes.
    pub data: Vec<u8>,
}

impl RgbaFrame {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> KeyResult<Self> {
        let frame = Self {
            width,
            height,
            data,
        };
        frame.validate()?;
        Ok(frame)
    }

    /// A frame filled with a single straight RGBA8 color.
    pub fn solid(width: u32, height: u32, px: [u8; 4]) -> Self {
        Self {
            width,
            height,
            data: px.repeat(width as usize * height as usize),
        }
    }

    pub fn validate(&self) -> KeyResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(KeyError::validation("frame dimensions must be non-zero"));
        }
        let expected_len = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| KeyError::validation("frame buffer size overflow"))?;
        if self.data.len() != expected_len {
            return Err(KeyError::validation(format!(
                "frame buffer holds {} bytes, expected width*height*4 = {expected_len}",
                self.data.len()
            )));
        }
        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&px);
    }

    pub fn screen(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }

    pub fn to_premultiplied(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let p = Rgba8Premul::from_straight_rgba(px[0], px[1], px[2], px[3]);
            out.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
