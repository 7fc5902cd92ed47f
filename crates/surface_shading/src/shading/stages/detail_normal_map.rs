//! Detail normal map stage
//!
//! A secondary normal map perturbs the shading normal and contributes an
//! occlusion term from how far the detail normal leans away from flat. Its
//! alpha channel doubles as a detail mask on diffuse color.

use crate::foundation::math::{Vec2, Vec3, Vec4};
use crate::shading::{FeatureSet, FragmentState, ShadingParams, SurfaceFrame};

use super::OcclusionPaths;

/// Perturbs the normal and applies detail occlusion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailNormalMapStage {
    ao_strength: f32,
    scale: Vec2,
    object_space: bool,
    paths: OcclusionPaths,
}

impl DetailNormalMapStage {
    /// Build the stage for a draw
    pub const fn new(params: &ShadingParams, features: FeatureSet) -> Self {
        Self {
            ao_strength: params.detail_normal_ao,
            scale: params.detail_normal_scale,
            object_space: features.contains(FeatureSet::NORMAL_MAP_OBJECT_SPACE),
            paths: OcclusionPaths::from_features(features),
        }
    }

    /// Detail occlusion: 1 for a flat texel `(_, _, 1)`
    pub fn occlusion(&self, sample: &Vec4) -> f32 {
        let flatness = Vec3::z().dot(&sample.xyz());
        1.0 - (1.0 - flatness) * self.ao_strength
    }

    /// Perturbed unit normal
    ///
    /// Falls back to the incoming normal if the perturbation cancels it out.
    pub fn perturb_normal(&self, normal: &Vec3, sample: &Vec4, frame: &SurfaceFrame) -> Vec3 {
        let offset = if self.object_space {
            frame.normal_matrix * sample.xyz()
        } else {
            let mut tangent = sample.xyz() * 2.0 - Vec3::repeat(1.0);
            tangent.x *= self.scale.x;
            tangent.y *= self.scale.y;
            frame.tbn * tangent
        };

        (normal + offset)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(|| normal.normalize())
    }

    /// Apply occlusion, normal perturbation and detail mask, returning the
    /// occlusion multiplier used
    pub fn apply(&self, state: &mut FragmentState, sample: &Vec4, frame: &SurfaceFrame) -> f32 {
        let detail_ao = self.occlusion(sample);
        self.paths.apply(state, detail_ao, frame);

        state.normal = self.perturb_normal(&state.normal, sample, frame);

        let mask = sample.w;
        state.diffuse_color.x *= mask;
        state.diffuse_color.y *= mask;
        state.diffuse_color.z *= mask;

        detail_ao
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat3;
    use approx::assert_relative_eq;

    fn stage(features: FeatureSet) -> DetailNormalMapStage {
        DetailNormalMapStage::new(&ShadingParams::default(), features)
    }

    #[test]
    fn test_flat_texel_has_no_occlusion() {
        let s = stage(FeatureSet::DETAIL_NORMAL_MAP);
        assert_relative_eq!(s.occlusion(&Vec4::new(0.5, 0.5, 1.0, 1.0)), 1.0);
    }

    #[test]
    fn test_occlusion_scales_with_strength() {
        let params = ShadingParams { detail_normal_ao: 0.5, ..ShadingParams::default() };
        let s = DetailNormalMapStage::new(&params, FeatureSet::DETAIL_NORMAL_MAP);
        // 1 - (1 - 0.6) * 0.5
        assert_relative_eq!(s.occlusion(&Vec4::new(0.5, 0.5, 0.6, 1.0)), 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_tangent_space_flat_texel_keeps_normal() {
        let s = stage(FeatureSet::DETAIL_NORMAL_MAP);
        let n = s.perturb_normal(&Vec3::z(), &Vec4::new(0.5, 0.5, 1.0, 1.0), &SurfaceFrame::default());
        assert_relative_eq!(n, Vec3::z(), epsilon = 1e-6);
    }

    #[test]
    fn test_tangent_space_scale_applies_to_xy() {
        let params = ShadingParams { detail_normal_scale: Vec2::new(2.0, 0.0), ..ShadingParams::default() };
        let s = DetailNormalMapStage::new(&params, FeatureSet::DETAIL_NORMAL_MAP);
        // Texel decodes to (0.5, 0.5, 0); scaled to (1, 0, 0)
        let n = s.perturb_normal(&Vec3::z(), &Vec4::new(0.75, 0.75, 0.5, 1.0), &SurfaceFrame::default());
        let expected = Vec3::new(1.0, 0.0, 1.0).normalize();
        assert_relative_eq!(n, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_object_space_uses_normal_matrix() {
        let s = stage(FeatureSet::DETAIL_NORMAL_MAP | FeatureSet::NORMAL_MAP_OBJECT_SPACE);
        let frame = SurfaceFrame { normal_matrix: Mat3::new_scaling(2.0), ..SurfaceFrame::default() };
        let n = s.perturb_normal(&Vec3::z(), &Vec4::new(0.5, 0.0, 0.0, 1.0), &frame);
        assert_relative_eq!(n, Vec3::new(1.0, 0.0, 1.0).normalize(), epsilon = 1e-6);
    }

    #[test]
    fn test_normal_is_unit_length_in_both_conventions() {
        let texels = [
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(1.0, 0.2, 0.7, 1.0),
            Vec4::new(0.3, 0.9, 0.1, 0.5),
        ];
        let frame = SurfaceFrame {
            tbn: Mat3::new(0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            normal_matrix: Mat3::new(1.0, 0.2, 0.0, 0.0, 0.8, 0.1, 0.0, 0.0, 1.3),
            ..SurfaceFrame::default()
        };
        for features in [
            FeatureSet::DETAIL_NORMAL_MAP,
            FeatureSet::DETAIL_NORMAL_MAP | FeatureSet::NORMAL_MAP_OBJECT_SPACE,
        ] {
            let s = stage(features);
            for texel in &texels {
                let mut state = FragmentState::new(Vec4::new(1.0, 1.0, 1.0, 1.0), Vec3::new(0.2, 0.1, 0.9));
                s.apply(&mut state, texel, &frame);
                assert_relative_eq!(state.normal.norm(), 1.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_cancelling_perturbation_keeps_incoming_normal() {
        let s = stage(FeatureSet::DETAIL_NORMAL_MAP | FeatureSet::NORMAL_MAP_OBJECT_SPACE);
        let frame = SurfaceFrame { normal_matrix: -Mat3::identity(), ..SurfaceFrame::default() };
        let n = s.perturb_normal(&Vec3::z(), &Vec4::new(0.0, 0.0, 1.0, 1.0), &frame);
        assert_relative_eq!(n, Vec3::z());
    }

    #[test]
    fn test_detail_occlusion_reaches_every_indirect_path() {
        let features = FeatureSet::DETAIL_NORMAL_MAP
            | FeatureSet::CLEARCOAT
            | FeatureSet::SHEEN
            | FeatureSet::ENVMAP
            | FeatureSet::STANDARD;
        let s = stage(features);
        let frame = SurfaceFrame { lighting_roughness: 0.25, ..SurfaceFrame::default() };
        let one = Vec3::new(1.0, 1.0, 1.0);
        let mut state = FragmentState::default().with_indirect(one, one).with_layer_indirect(one, one);

        let detail_ao = s.apply(&mut state, &Vec4::new(0.5, 0.5, 0.6, 1.0), &frame);

        assert_relative_eq!(detail_ao, 0.6, epsilon = 1e-6);
        assert_relative_eq!(state.indirect_diffuse, one * 0.6, epsilon = 1e-6);
        assert_relative_eq!(state.clearcoat_specular_indirect, one * 0.6, epsilon = 1e-6);
        assert_relative_eq!(state.sheen_specular_indirect, one * 0.6, epsilon = 1e-6);

        // 1.6^(2^-5) - 1 + 0.6
        let specular = super::super::compute_specular_occlusion(1.0, 0.6, 0.25);
        assert_relative_eq!(specular, 0.614_796, epsilon = 1e-4);
        assert_relative_eq!(state.indirect_specular, one * specular, epsilon = 1e-6);
    }

    #[test]
    fn test_detail_occlusion_skips_disabled_paths() {
        let s = stage(FeatureSet::DETAIL_NORMAL_MAP);
        let one = Vec3::new(1.0, 1.0, 1.0);
        let mut state = FragmentState::default().with_indirect(one, one).with_layer_indirect(one, one);

        s.apply(&mut state, &Vec4::new(0.5, 0.5, 0.6, 1.0), &SurfaceFrame::default());

        assert_relative_eq!(state.indirect_diffuse, one * 0.6, epsilon = 1e-6);
        assert_relative_eq!(state.indirect_specular, one);
        assert_relative_eq!(state.clearcoat_specular_indirect, one);
        assert_relative_eq!(state.sheen_specular_indirect, one);
    }

    #[test]
    fn test_alpha_masks_diffuse_rgb_only() {
        let s = stage(FeatureSet::DETAIL_NORMAL_MAP);
        let mut state = FragmentState::new(Vec4::new(0.8, 0.6, 0.4, 0.9), Vec3::z());

        s.apply(&mut state, &Vec4::new(0.5, 0.5, 1.0, 0.5), &SurfaceFrame::default());

        assert_relative_eq!(state.diffuse_color, Vec4::new(0.4, 0.3, 0.2, 0.9), epsilon = 1e-6);
    }
}
