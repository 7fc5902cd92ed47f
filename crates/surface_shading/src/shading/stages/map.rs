//! Diffuse map stage: saturation, level remap and color modulation

use crate::foundation::math::utils::{luminance, mix};
use crate::foundation::math::{Vec3, Vec4};
use crate::shading::{srgb_transfer_eotf, FeatureSet, FragmentState, LevelRange, ShadingParams};

/// Modulates the running diffuse color by the diffuse map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapStage {
    saturation: f32,
    level: LevelRange,
    decode_video: bool,
}

impl MapStage {
    /// Build the stage for a draw
    pub fn new(params: &ShadingParams, features: FeatureSet) -> Self {
        Self {
            saturation: params.map_saturation,
            level: params.map_level,
            decode_video: features.contains(FeatureSet::DECODE_VIDEO_TEXTURE),
        }
    }

    /// RGBA factor the diffuse color is multiplied by
    ///
    /// Saturation 0 yields the luminance-weighted gray, 1 the sampled color;
    /// other values extrapolate along the same line.
    pub fn modulation(&self, sample: &Vec4) -> Vec4 {
        let texel = if self.decode_video { srgb_transfer_eotf(sample) } else { *sample };

        let rgb = texel.xyz();
        let gray = luminance(&rgb);
        let saturated = Vec3::new(
            mix(gray, rgb.x, self.saturation),
            mix(gray, rgb.y, self.saturation),
            mix(gray, rgb.z, self.saturation),
        );
        self.level.remap_rgb(&saturated).push(texel.w)
    }

    /// Multiply the fragment's diffuse color, alpha included
    pub fn apply(&self, state: &mut FragmentState, sample: &Vec4) {
        state.diffuse_color.component_mul_assign(&self.modulation(sample));
    }
}
