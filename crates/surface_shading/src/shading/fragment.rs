//! Per-fragment data threaded through the stages

use crate::foundation::math::{Mat3, Vec3, Vec4};

use super::PrimitiveCoordinate;

/// Mutable accumulator for one fragment
///
/// The pipeline reads and writes this record; the lighting model reads it
/// afterwards. Occlusion stages only ever scale the indirect accumulators,
/// and the alpha channel of `diffuse_color` is only ever scaled down by the
/// alpha map.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentState {
    /// Running diffuse color, RGB + alpha
    pub diffuse_color: Vec4,
    /// Shading normal, kept unit length
    pub normal: Vec3,
    /// Indirect diffuse light
    pub indirect_diffuse: Vec3,
    /// Indirect specular light
    pub indirect_specular: Vec3,
    /// Clearcoat indirect specular light
    pub clearcoat_specular_indirect: Vec3,
    /// Sheen indirect specular light
    pub sheen_specular_indirect: Vec3,
    /// Roughness handed to the lighting model
    pub roughness_factor: f32,
}

impl FragmentState {
    /// Start a fragment from its base color and interpolated normal
    pub fn new(diffuse_color: Vec4, normal: Vec3) -> Self {
        Self {
            diffuse_color,
            normal: normal.normalize(),
            ..Self::default()
        }
    }

    /// Seed the indirect diffuse and specular accumulators
    #[must_use]
    pub fn with_indirect(mut self, diffuse: Vec3, specular: Vec3) -> Self {
        self.indirect_diffuse = diffuse;
        self.indirect_specular = specular;
        self
    }

    /// Seed the clearcoat and sheen indirect accumulators
    #[must_use]
    pub fn with_layer_indirect(mut self, clearcoat: Vec3, sheen: Vec3) -> Self {
        self.clearcoat_specular_indirect = clearcoat;
        self.sheen_specular_indirect = sheen;
        self
    }

    /// Alpha component of the diffuse color
    pub fn alpha(&self) -> f32 {
        self.diffuse_color.w
    }
}

impl Default for FragmentState {
    fn default() -> Self {
        Self {
            diffuse_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            normal: Vec3::z(),
            indirect_diffuse: Vec3::zeros(),
            indirect_specular: Vec3::zeros(),
            clearcoat_specular_indirect: Vec3::zeros(),
            sheen_specular_indirect: Vec3::zeros(),
            roughness_factor: 1.0,
        }
    }
}

/// Geometric quantities computed upstream for one fragment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    /// Unperturbed geometric normal
    pub geometry_normal: Vec3,
    /// Direction from the surface toward the viewer
    pub view_dir: Vec3,
    /// Tangent-bitangent-normal frame for tangent-space maps
    pub tbn: Mat3,
    /// Normal matrix for object-space maps
    pub normal_matrix: Mat3,
    /// Roughness the lighting model resolved for this fragment, used by
    /// specular occlusion
    pub lighting_roughness: f32,
}

impl Default for SurfaceFrame {
    fn default() -> Self {
        Self {
            geometry_normal: Vec3::z(),
            view_dir: Vec3::z(),
            tbn: Mat3::identity(),
            normal_matrix: Mat3::identity(),
            lighting_roughness: 1.0,
        }
    }
}

/// Everything the pipeline needs to shade a fragment besides its state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FragmentInputs {
    /// Coordinate the sampling UV is resolved from
    pub coordinate: PrimitiveCoordinate,
    /// Geometry supplied by the vertex stage
    pub frame: SurfaceFrame,
}
