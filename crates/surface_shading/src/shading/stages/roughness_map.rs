//! Roughness stage: base, color factor, map, offset
//!
//! Runs for every fragment, since it always establishes the roughness factor
//! from the material's base roughness. Order is fixed: base → color factor →
//! map multiply → offset.

use crate::foundation::math::utils::clamp;
use crate::foundation::math::{Vec2, Vec3, Vec4};
use crate::shading::{FeatureSet, FragmentState, LevelRange, ShadingParams};

/// Derives the roughness factor handed to the lighting model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoughnessMapStage {
    base: f32,
    color_factor: Option<Vec3>,
    map_level: Option<LevelRange>,
    offset: Option<Vec2>,
}

impl RoughnessMapStage {
    /// Build the stage for a draw
    pub fn new(params: &ShadingParams, features: FeatureSet) -> Self {
        Self {
            base: params.roughness,
            color_factor: features
                .contains(FeatureSet::COLOR_ROUGHNESS_FACTOR)
                .then_some(params.roughness_color_factor),
            map_level: features
                .contains(FeatureSet::ROUGHNESS_MAP)
                .then_some(params.roughness_map_level),
            offset: features
                .contains(FeatureSet::ROUGHNESS_OFFSET)
                .then_some(params.roughness_offset),
        }
    }

    /// Whether the stage reads the roughness map
    pub const fn samples_map(&self) -> bool {
        self.map_level.is_some()
    }

    /// Roughness for a fragment color and optional roughness texel
    ///
    /// `offset.x` is added before the clamp and `offset.y` after it, so the
    /// result may leave [0, 1] when `offset.y` is non-zero.
    pub fn evaluate(&self, diffuse_rgb: &Vec3, sample: Option<&Vec4>) -> f32 {
        let mut roughness = self.base;

        if let Some(factor) = self.color_factor {
            roughness += diffuse_rgb.dot(&factor);
        }

        if let (Some(level), Some(texel)) = (self.map_level, sample) {
            roughness *= level.remap(texel.y);
        }

        if let Some(offset) = self.offset {
            roughness = clamp(roughness + offset.x, 0.0, 1.0) + offset.y;
        }

        roughness
    }

    /// Write the roughness factor to the fragment
    pub fn apply(&self, state: &mut FragmentState, sample: Option<&Vec4>) {
        state.roughness_factor = self.evaluate(&state.diffuse_color.xyz(), sample);
    }
}
