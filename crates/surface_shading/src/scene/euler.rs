//! Euler angle rotations

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Axis application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EulerOrder {
    /// X, then Y, then Z
    #[default]
    Xyz,
    /// Y, then Z, then X
    Yzx,
    /// Z, then X, then Y
    Zxy,
    /// X, then Z, then Y
    Xzy,
    /// Y, then X, then Z
    Yxz,
    /// Z, then Y, then X
    Zyx,
}

/// Rotation in radians about each axis
///
/// Serialized as `[x, y, z, order]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f32, f32, f32, EulerOrder)", into = "(f32, f32, f32, EulerOrder)")]
pub struct Euler {
    /// Rotation about X
    pub x: f32,
    /// Rotation about Y
    pub y: f32,
    /// Rotation about Z
    pub z: f32,
    /// Order the rotations apply in
    pub order: EulerOrder,
}

impl Euler {
    /// Create a rotation with the default XYZ order
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, order: EulerOrder::Xyz }
    }

    /// Angles as a vector
    pub fn angles(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Whether every angle is zero
    pub fn is_identity(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl From<(f32, f32, f32, EulerOrder)> for Euler {
    fn from((x, y, z, order): (f32, f32, f32, EulerOrder)) -> Self {
        Self { x, y, z, order }
    }
}

impl From<Euler> for (f32, f32, f32, EulerOrder) {
    fn from(e: Euler) -> Self {
        (e.x, e.y, e.z, e.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_array_with_order() {
        let rotation = Euler { x: 0.5, y: 0.0, z: -1.0, order: EulerOrder::Zyx };
        let text = ron::to_string(&rotation).unwrap();
        assert!(text.starts_with('(') && text.ends_with("ZYX)"));
        assert_eq!(ron::from_str::<Euler>(&text).unwrap(), rotation);
    }

    #[test]
    fn test_default_is_identity() {
        assert!(Euler::default().is_identity());
        assert!(!Euler::new(0.0, 0.1, 0.0).is_identity());
    }
}
