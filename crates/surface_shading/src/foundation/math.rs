//! Math utilities and types
//!
//! Provides the vector and matrix aliases used by the shading stages, plus the
//! scalar helpers that mirror shader built-ins (`mix`, `saturate`, `clamp`).

pub use nalgebra::{Matrix3, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// Math constants
pub mod constants {
    /// Luminance weights applied to linear RGB
    pub const LUMINANCE_WEIGHTS: [f32; 3] = [0.2125, 0.7154, 0.0721];
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// Clamp a value to [0, 1]
    pub fn saturate(value: f32) -> f32 {
        clamp(value, 0.0, 1.0)
    }

    /// Linear interpolation, unclamped in `t`
    pub fn mix(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Relative luminance of a linear RGB color
    pub fn luminance(rgb: &Vec3) -> f32 {
        rgb.dot(&Vec3::from(constants::LUMINANCE_WEIGHTS))
    }
}
