//! Alpha map stage

use crate::foundation::math::Vec4;
use crate::shading::{FragmentState, LevelRange, ShadingParams};

/// Scales diffuse alpha by a grayscale map
///
/// Reads green: it has the most precision in 565 and block-compressed
/// formats, and luminance textures replicate into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaMapStage {
    level: LevelRange,
}

impl AlphaMapStage {
    /// Build the stage for a draw
    pub const fn new(params: &ShadingParams) -> Self {
        Self { level: params.alpha_map_level }
    }

    /// Alpha multiplier for a sample
    pub fn factor(&self, sample: &Vec4) -> f32 {
        self.level.remap(sample.y)
    }

    /// Multiply the fragment's alpha
    pub fn apply(&self, state: &mut FragmentState, sample: &Vec4) {
        state.diffuse_color.w *= self.factor(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reads_green_channel() {
        let stage = AlphaMapStage::new(&ShadingParams::default());
        let mut state = FragmentState::default();

        stage.apply(&mut state, &Vec4::new(1.0, 0.25, 1.0, 1.0));

        assert_relative_eq!(state.alpha(), 0.25);
        assert_relative_eq!(state.diffuse_color.x, 1.0);
    }

    #[test]
    fn test_level_range_remaps_green() {
        let params = ShadingParams { alpha_map_level: LevelRange::new(0.2, 0.4), ..ShadingParams::default() };
        let stage = AlphaMapStage::new(&params);
        assert_relative_eq!(stage.factor(&Vec4::new(0.0, 0.4, 0.0, 0.0)), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_alpha_never_increases_within_unit_range() {
        let stage = AlphaMapStage::new(&ShadingParams::default());
        for green in [0.0, 0.1, 0.5, 0.9, 1.0] {
            let mut state = FragmentState::new(Vec4::new(1.0, 1.0, 1.0, 0.6), crate::foundation::math::Vec3::z());
            stage.apply(&mut state, &Vec4::new(0.0, green, 0.0, 1.0));
            assert!(state.alpha() <= 0.6);
        }
    }
}
