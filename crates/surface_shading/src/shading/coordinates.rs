//! Sampling coordinate resolution
//!
//! Meshes carry a UV attribute. Point and billboard primitives instead supply
//! a quad-local coordinate in [0, 1]² with Y measured downward, which is
//! flipped and pushed through the material's UV transform.

use crate::foundation::math::{Mat3, Vec2, Vec3};

use super::FeatureSet;

/// Intrinsic coordinate supplied by the primitive being shaded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveCoordinate {
    /// Standard mesh with a per-vertex UV attribute
    Mesh {
        /// Interpolated UV attribute
        uv: Vec2,
    },
    /// Point or billboard primitive
    Point {
        /// Quad-local coordinate, origin top-left, Y down
        point_coord: Vec2,
        /// Per-point UV attribute, used when points carry their own UVs
        uv: Option<Vec2>,
    },
}

impl Default for PrimitiveCoordinate {
    fn default() -> Self {
        Self::Mesh { uv: Vec2::zeros() }
    }
}

/// Derives the UV used by every sampling stage of a draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateResolver {
    points_uv: bool,
    uv_transform: Mat3,
}

impl CoordinateResolver {
    /// Create a resolver; an absent transform is the identity
    pub fn new(features: FeatureSet, uv_transform: Option<Mat3>) -> Self {
        Self {
            points_uv: features.contains(FeatureSet::POINTS_UV),
            uv_transform: uv_transform.unwrap_or_else(Mat3::identity),
        }
    }

    /// Resolve the texture-space UV for one fragment
    pub fn resolve(&self, coordinate: &PrimitiveCoordinate) -> Vec2 {
        match *coordinate {
            PrimitiveCoordinate::Mesh { uv } => uv,
            PrimitiveCoordinate::Point { uv: Some(uv), .. } if self.points_uv => uv,
            PrimitiveCoordinate::Point { point_coord, .. } => {
                let flipped = Vec3::new(point_coord.x, 1.0 - point_coord.y, 1.0);
                (self.uv_transform * flipped).xy()
            }
        }
    }
}

impl Default for CoordinateResolver {
    fn default() -> Self {
        Self::new(FeatureSet::empty(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mesh_uv_passes_through() {
        let resolver = CoordinateResolver::new(FeatureSet::empty(), Some(Mat3::new_scaling(2.0)));
        let uv = resolver.resolve(&PrimitiveCoordinate::Mesh { uv: Vec2::new(0.25, 0.75) });
        assert_eq!(uv, Vec2::new(0.25, 0.75));
    }

    #[test]
    fn test_point_coord_flips_y() {
        let resolver = CoordinateResolver::default();
        let uv = resolver.resolve(&PrimitiveCoordinate::Point {
            point_coord: Vec2::new(0.2, 0.1),
            uv: None,
        });
        assert_relative_eq!(uv, Vec2::new(0.2, 0.9), epsilon = 1e-6);
    }

    #[test]
    fn test_point_coord_applies_transform() {
        // Offset by (0.5, 0.25), then scale by 0.5
        let transform = Mat3::new(
            0.5, 0.0, 0.5,
            0.0, 0.5, 0.25,
            0.0, 0.0, 1.0,
        );
        let resolver = CoordinateResolver::new(FeatureSet::MAP, Some(transform));
        let uv = resolver.resolve(&PrimitiveCoordinate::Point {
            point_coord: Vec2::new(1.0, 1.0),
            uv: None,
        });
        assert_relative_eq!(uv, Vec2::new(1.0, 0.25), epsilon = 1e-6);
    }

    #[test]
    fn test_points_uv_uses_attribute_unmodified() {
        let resolver =
            CoordinateResolver::new(FeatureSet::POINTS_UV, Some(Mat3::new_scaling(3.0)));
        let uv = resolver.resolve(&PrimitiveCoordinate::Point {
            point_coord: Vec2::new(0.0, 0.0),
            uv: Some(Vec2::new(0.4, 0.6)),
        });
        assert_eq!(uv, Vec2::new(0.4, 0.6));
    }

    #[test]
    fn test_point_uv_ignored_without_points_uv_flag() {
        let resolver = CoordinateResolver::default();
        let uv = resolver.resolve(&PrimitiveCoordinate::Point {
            point_coord: Vec2::new(0.0, 0.0),
            uv: Some(Vec2::new(0.4, 0.6)),
        });
        assert_relative_eq!(uv, Vec2::new(0.0, 1.0), epsilon = 1e-6);
    }
}
