//! Occlusion application shared by the AO and detail-normal stages

use crate::foundation::math::utils::saturate;
use crate::shading::{FeatureSet, FragmentState, SurfaceFrame};

/// View-dependent specular occlusion weight
///
/// Monotonic in `ambient_occlusion` and exactly 1 when it is 1, so an
/// unoccluded surface keeps its full indirect specular.
pub fn compute_specular_occlusion(dot_nv: f32, ambient_occlusion: f32, roughness: f32) -> f32 {
    let exponent = (-16.0 * roughness - 1.0).exp2();
    saturate((dot_nv + ambient_occlusion).powf(exponent) - 1.0 + ambient_occlusion)
}

/// Which indirect accumulators an occlusion multiplier reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OcclusionPaths {
    /// Scale clearcoat indirect specular
    pub clearcoat: bool,
    /// Scale sheen indirect specular
    pub sheen: bool,
    /// Weight indirect specular by specular occlusion
    pub specular: bool,
}

impl OcclusionPaths {
    /// Resolve the light paths enabled for a draw
    pub const fn from_features(features: FeatureSet) -> Self {
        Self {
            clearcoat: features.contains(FeatureSet::CLEARCOAT),
            sheen: features.contains(FeatureSet::SHEEN),
            specular: features.specular_occlusion(),
        }
    }

    /// Attenuate the fragment's indirect light by `occlusion`
    ///
    /// Indirect diffuse is always scaled; the layered and environment paths
    /// only when enabled.
    pub fn apply(&self, state: &mut FragmentState, occlusion: f32, frame: &SurfaceFrame) {
        state.indirect_diffuse *= occlusion;

        if self.clearcoat {
            state.clearcoat_specular_indirect *= occlusion;
        }
        if self.sheen {
            state.sheen_specular_indirect *= occlusion;
        }
        if self.specular {
            let dot_nv = saturate(frame.geometry_normal.dot(&frame.view_dir));
            state.indirect_specular *=
                compute_specular_occlusion(dot_nv, occlusion, frame.lighting_roughness);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_specular_occlusion_unoccluded_is_one() {
        for dot_nv in [0.0, 0.3, 1.0] {
            for roughness in [0.0, 0.5, 1.0] {
                assert_relative_eq!(compute_specular_occlusion(dot_nv, 1.0, roughness), 1.0);
            }
        }
    }

    #[test]
    fn test_specular_occlusion_monotonic_in_ao() {
        let mut previous = 0.0;
        for step in 0..=10 {
            let ao = step as f32 / 10.0;
            let weight = compute_specular_occlusion(0.6, ao, 0.4);
            assert!(weight >= previous);
            previous = weight;
        }
    }

    #[test]
    fn test_specular_occlusion_fully_occluded_grazing() {
        assert_relative_eq!(compute_specular_occlusion(0.0, 0.0, 0.5), 0.0);
    }

    #[test]
    fn test_apply_respects_paths() {
        let mut state = FragmentState::default()
            .with_indirect(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0))
            .with_layer_indirect(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
        let paths = OcclusionPaths { clearcoat: true, sheen: false, specular: false };

        paths.apply(&mut state, 0.5, &SurfaceFrame::default());

        assert_relative_eq!(state.indirect_diffuse, Vec3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(state.clearcoat_specular_indirect, Vec3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(state.sheen_specular_indirect, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(state.indirect_specular, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_apply_specular_uses_weight_not_raw_occlusion() {
        let mut state =
            FragmentState::default().with_indirect(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let frame = SurfaceFrame { lighting_roughness: 0.0, ..SurfaceFrame::default() };
        let paths = OcclusionPaths::from_features(FeatureSet::ENVMAP | FeatureSet::STANDARD);

        paths.apply(&mut state, 0.5, &frame);

        // dotNV = 1, exponent = 0.5: sqrt(1.5) - 0.5
        let expected = 1.5_f32.sqrt() - 0.5;
        assert_relative_eq!(state.indirect_specular.x, expected, epsilon = 1e-6);
    }
}
