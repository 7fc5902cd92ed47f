//! Level remapping of sampled values

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Vec2, Vec3};

use super::{ShadingError, ShadingResult, TextureChannel};

/// Authored `(min, max)` range rescaling a raw sample to `(s - min) / max`
///
/// `max` is a span, not an upper bound: `remap(min + max) == 1`. A zero span
/// is rejected by [`LevelRange::validate`] before any fragment is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelRange {
    /// Value mapped to 0
    pub min: f32,
    /// Span mapped onto [0, 1]
    pub max: f32,
}

impl LevelRange {
    /// Identity range `(0, 1)`
    pub const IDENTITY: Self = Self { min: 0.0, max: 1.0 };

    /// Create a range
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Remap a scalar sample
    pub fn remap(&self, value: f32) -> f32 {
        (value - self.min) / self.max
    }

    /// Remap each RGB component with the same scalar range
    pub fn remap_rgb(&self, rgb: &Vec3) -> Vec3 {
        rgb.map(|v| self.remap(v))
    }

    /// Reject a zero or NaN denominator for `channel`
    pub fn validate(&self, channel: TextureChannel) -> ShadingResult<()> {
        if self.max == 0.0 || self.max.is_nan() {
            return Err(ShadingError::ZeroLevelRange { channel });
        }
        Ok(())
    }
}

impl Default for LevelRange {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Vec2> for LevelRange {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<LevelRange> for Vec2 {
    fn from(range: LevelRange) -> Self {
        Self::new(range.min, range.max)
    }
}
