use crate::{
    foundation::core::Rgb,
    foundation::math::{EPS, smoothstep},
};

const SQRT_3: f32 = 1.732_050_8;

/// Remap colors near `target` toward `corrected`.
///
/// Pixels within `tolerance` (normalized RGB distance) of the target are pulled hardest; the
/// pull fades to nothing at the tolerance edge. `strength = 0` disables the stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResidualCorrection {
    pub target: Rgb,
    pub corrected: Rgb,
    pub strength: f32,
    pub tolerance: f32,
}

impl ResidualCorrection {
    pub fn weight(&self, color: Rgb) -> f32 {
        let d = color.sub(self.target).length() / SQRT_3;
        if self.tolerance <= EPS {
            return if d <= EPS { 1.0 } else { 0.0 };
        }
        1.0 - smoothstep(0.0, self.tolerance, d)
    }

    pub fn apply(&self, color: Rgb) -> Rgb {
        if self.strength <= 0.0 {
            return color;
        }
        let w = self.weight(color) * self.strength;
        color.lerp(self.corrected, w)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/correct/residual.rs"]
mod tests;
