//! Per-material shading parameters
//!
//! These are the uniforms a material feeds the stages. Creative-control
//! scalars (saturation, intensities, fade) are deliberately unvalidated and
//! extrapolate; only level-range denominators are checked.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::{Mat3, Vec2, Vec3};

use super::{FeatureSet, LevelRange, ShadingResult, TextureChannel};

/// Uniform values consumed by the shading stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingParams {
    /// Blend between luminance (0) and the sampled color (1); default 1
    pub map_saturation: f32,
    /// Diffuse map level range; default (0, 1)
    pub map_level: LevelRange,
    /// Alpha map level range; default (0, 1)
    pub alpha_map_level: LevelRange,
    /// AO map level range; default (0, 1)
    pub ao_map_level: LevelRange,
    /// Occlusion strength, 0 disables the effect; default 1
    pub ao_map_intensity: f32,
    /// Blend from the AO red channel (0) to its alpha channel (1); default 0
    pub ao_map_fade: f32,
    /// Base roughness; default 1
    pub roughness: f32,
    /// Roughness map level range; default (0, 1)
    pub roughness_map_level: LevelRange,
    /// Weights of diffuse RGB added to roughness; default (0, 0, 0)
    pub roughness_color_factor: Vec3,
    /// Added before (x) and after (y) the [0, 1] clamp; default (0, 0)
    pub roughness_offset: Vec2,
    /// Strength of the detail normal occlusion term; default 1
    pub detail_normal_ao: f32,
    /// Tangent-space XY scale of the detail normal; default (1, 1)
    pub detail_normal_scale: Vec2,
    /// UV transform for point primitives; default identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv_transform: Option<Mat3>,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            map_saturation: 1.0,
            map_level: LevelRange::IDENTITY,
            alpha_map_level: LevelRange::IDENTITY,
            ao_map_level: LevelRange::IDENTITY,
            ao_map_intensity: 1.0,
            ao_map_fade: 0.0,
            roughness: 1.0,
            roughness_map_level: LevelRange::IDENTITY,
            roughness_color_factor: Vec3::zeros(),
            roughness_offset: Vec2::zeros(),
            detail_normal_ao: 1.0,
            detail_normal_scale: Vec2::new(1.0, 1.0),
            uv_transform: None,
        }
    }
}

impl Config for ShadingParams {}

impl ShadingParams {
    /// Check every level range used by a stage `features` enables
    pub fn validate(&self, features: FeatureSet) -> ShadingResult<()> {
        let ranges = [
            (FeatureSet::MAP, TextureChannel::Map, &self.map_level),
            (FeatureSet::ALPHA_MAP, TextureChannel::AlphaMap, &self.alpha_map_level),
            (FeatureSet::AO_MAP, TextureChannel::AoMap, &self.ao_map_level),
            (FeatureSet::ROUGHNESS_MAP, TextureChannel::RoughnessMap, &self.roughness_map_level),
        ];

        for (flag, channel, range) in ranges {
            if features.contains(flag) {
                range.validate(channel)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;
    use crate::shading::ShadingError;

    #[test]
    fn test_disabled_stage_range_not_checked() {
        let params = ShadingParams {
            alpha_map_level: LevelRange::new(0.0, 0.0),
            ..ShadingParams::default()
        };
        assert!(params.validate(FeatureSet::MAP).is_ok());
        assert_eq!(
            params.validate(FeatureSet::MAP | FeatureSet::ALPHA_MAP),
            Err(ShadingError::ZeroLevelRange { channel: TextureChannel::AlphaMap })
        );
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let params = ShadingParams::from_str_with_format(
            "(map_saturation: 0.0, ao_map_level: (min: 0.1, max: 0.8))",
            ConfigFormat::Ron,
        )
        .unwrap();
        assert_eq!(params.map_saturation, 0.0);
        assert_eq!(params.ao_map_level, LevelRange::new(0.1, 0.8));
        assert_eq!(params.roughness, 1.0);
        assert_eq!(params.uv_transform, None);
    }

    #[test]
    fn test_toml_round_trip() {
        let params = ShadingParams {
            roughness_offset: Vec2::new(0.1, -0.2),
            map_level: LevelRange::new(0.05, 0.9),
            ..ShadingParams::default()
        };
        let text = params.to_string_with_format(ConfigFormat::Toml).unwrap();
        let parsed = ShadingParams::from_str_with_format(&text, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, params);
    }
}
