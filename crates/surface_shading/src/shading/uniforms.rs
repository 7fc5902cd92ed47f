//! Shading uniform block for GPU upload
//!
//! The GPU program and this crate evaluate the same stages; the uniform block
//! carries exactly the values the CPU pipeline reads so both sides agree.

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::Mat3;

use super::{FeatureSet, ShadingParams};

/// Shading parameters packed for a uniform buffer
///
/// Layout must match the corresponding GLSL uniform block (std140, every
/// member a 16-byte row).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShadingUniforms {
    /// mapSaturation, aoMapIntensity, aoMapFade, roughness
    pub scalars: [f32; 4],
    /// mapLevel.xy, alphaMapLevel.xy
    pub map_levels: [f32; 4],
    /// aoMapLevel.xy, roughnessMapLevel.xy
    pub occlusion_roughness_levels: [f32; 4],
    /// roughnessColorFactor.xyz, detailNormalAO
    pub roughness_color_factor: [f32; 4],
    /// roughnessOffset.xy, detailNormalScale.xy
    pub offsets: [f32; 4],
    /// uvTransform rows, each padded to a vec4
    pub uv_transform: [[f32; 4]; 3],
    /// Feature bits, then padding
    pub features: [u32; 4],
}

impl ShadingUniforms {
    /// Pack parameters and features
    pub fn from_params(params: &ShadingParams, features: FeatureSet) -> Self {
        let uv = params.uv_transform.unwrap_or_else(Mat3::identity);
        let row = |r: usize| [uv[(r, 0)], uv[(r, 1)], uv[(r, 2)], 0.0];

        Self {
            scalars: [params.map_saturation, params.ao_map_intensity, params.ao_map_fade, params.roughness],
            map_levels: [
                params.map_level.min,
                params.map_level.max,
                params.alpha_map_level.min,
                params.alpha_map_level.max,
            ],
            occlusion_roughness_levels: [
                params.ao_map_level.min,
                params.ao_map_level.max,
                params.roughness_map_level.min,
                params.roughness_map_level.max,
            ],
            roughness_color_factor: [
                params.roughness_color_factor.x,
                params.roughness_color_factor.y,
                params.roughness_color_factor.z,
                params.detail_normal_ao,
            ],
            offsets: [
                params.roughness_offset.x,
                params.roughness_offset.y,
                params.detail_normal_scale.x,
                params.detail_normal_scale.y,
            ],
            uv_transform: [row(0), row(1), row(2)],
            features: [features.bits(), 0, 0, 0],
        }
    }

    /// Feature set encoded in the block; unknown bits are dropped
    pub const fn feature_set(&self) -> FeatureSet {
        FeatureSet::from_bits_truncate(self.features[0])
    }

    /// Size of the block in bytes
    pub const fn size() -> usize {
        std::mem::size_of::<Self>()
    }

    /// Byte view for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::LevelRange;

    #[test]
    fn test_block_is_row_aligned() {
        assert_eq!(ShadingUniforms::size() % 16, 0);
        assert_eq!(ShadingUniforms::size(), 9 * 16);
    }

    #[test]
    fn test_packs_levels_and_features() {
        let params = ShadingParams { alpha_map_level: LevelRange::new(0.1, 0.7), ..ShadingParams::default() };
        let features = FeatureSet::ALPHA_MAP | FeatureSet::SHEEN;

        let block = ShadingUniforms::from_params(&params, features);

        assert_eq!(block.map_levels, [0.0, 1.0, 0.1, 0.7]);
        assert_eq!(block.feature_set(), features);
        assert_eq!(block.uv_transform[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(block.as_bytes().len(), ShadingUniforms::size());
    }
}
