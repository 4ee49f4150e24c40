use crate::{
    foundation::core::Rgb,
    foundation::math::{clamp01, luma709},
};

/// Matte gradient magnitude at which an edge counts as fully hard.
const EDGE_GRADIENT_FULL: f32 = 0.5;

/// Edge weight in `[0, 1]` from a matte gradient magnitude.
pub fn edge_weight(gradient: f32) -> f32 {
    clamp01(gradient / EDGE_GRADIENT_FULL)
}

/// Move `color` toward its own luma by `amount`.
pub fn desaturate(color: Rgb, amount: f32) -> Rgb {
    if amount <= 0.0 {
        return color;
    }
    let y = luma709(color);
    color.lerp(Rgb::new(y, y, y), clamp01(amount))
}

/// Foreground tone controls, each in `[-1, 1]` and neutral at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToneAdjust {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
}

impl ToneAdjust {
    pub fn is_neutral(&self) -> bool {
        self.brightness == 0.0 && self.contrast == 0.0 && self.saturation == 0.0
    }

    /// Brightness offset, contrast around mid-gray, then saturation around luma.
    pub fn apply(&self, color: Rgb) -> Rgb {
        if self.is_neutral() {
            return color;
        }
        let k = 1.0 + self.contrast;
        let c = color.map(|v| (v + self.brightness - 0.5) * k + 0.5);
        let y = luma709(c);
        Rgb::new(y, y, y)
            .lerp(c, 1.0 + self.saturation)
            .clamped()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/correct/tone.rs"]
mod tests;
