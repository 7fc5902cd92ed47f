//! Ambient occlusion map stage

use crate::foundation::math::utils::mix;
use crate::foundation::math::Vec4;
use crate::shading::{FeatureSet, FragmentState, LevelRange, ShadingParams, SurfaceFrame};

use super::OcclusionPaths;

/// Attenuates indirect light by an occlusion map
///
/// The occlusion value blends the red and alpha channels by `ao_map_fade`,
/// so both a plain occlusion texture (red) and packed
/// occlusion-roughness-metallic textures work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AoMapStage {
    level: LevelRange,
    intensity: f32,
    fade: f32,
    paths: OcclusionPaths,
}

impl AoMapStage {
    /// Build the stage for a draw
    pub const fn new(params: &ShadingParams, features: FeatureSet) -> Self {
        Self {
            level: params.ao_map_level,
            intensity: params.ao_map_intensity,
            fade: params.ao_map_fade,
            paths: OcclusionPaths::from_features(features),
        }
    }

    /// Remapped occlusion value before intensity
    pub fn value(&self, sample: &Vec4) -> f32 {
        self.level.remap(mix(sample.x, sample.w, self.fade))
    }

    /// Ambient occlusion multiplier; intensity 0 always yields 1
    pub fn occlusion(&self, sample: &Vec4) -> f32 {
        (self.value(sample) - 1.0) * self.intensity + 1.0
    }

    /// Apply to the fragment, returning the multiplier used
    pub fn apply(&self, state: &mut FragmentState, sample: &Vec4, frame: &SurfaceFrame) -> f32 {
        let ambient_occlusion = self.occlusion(sample);
        self.paths.apply(state, ambient_occlusion, frame);
        ambient_occlusion
    }
}
