//! Texture sampling interface
//!
//! Sampling, filtering and mip selection belong to the caller. The stages only
//! ask for an RGBA value of a named channel at a UV, and read the components
//! their channel convention assigns (green for alpha and roughness, red/alpha
//! for occlusion).

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Vec2, Vec3, Vec4};

/// Texture channels the stages sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureChannel {
    /// Diffuse color map
    Map,
    /// Grayscale alpha map (green channel)
    AlphaMap,
    /// Ambient occlusion map (red/alpha blend)
    AoMap,
    /// Roughness map (green channel)
    RoughnessMap,
    /// Detail normal map (RGB normal, alpha detail mask)
    DetailNormalMap,
}

impl TextureChannel {
    /// Channel name as used in logs and errors
    pub const fn name(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::AlphaMap => "alphaMap",
            Self::AoMap => "aoMap",
            Self::RoughnessMap => "roughnessMap",
            Self::DetailNormalMap => "detailNormalMap",
        }
    }
}

impl fmt::Display for TextureChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of already-filtered texture samples
///
/// Implementations must be side-effect free from the pipeline's point of
/// view; a pipeline shares one provider across every fragment it shades.
pub trait TextureSampleProvider {
    /// Sample `channel` at `uv`, returning RGBA in [0, 1]
    fn sample(&self, channel: TextureChannel, uv: &Vec2) -> Vec4;

    /// Whether a texture is bound for `channel`
    fn has_binding(&self, channel: TextureChannel) -> bool;
}

/// Provider binding one constant RGBA value per channel
///
/// Useful for probes, previews and tests where the surface is uniform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConstantSampleProvider {
    channels: HashMap<TextureChannel, Vec4>,
}

impl ConstantSampleProvider {
    /// Create a provider with no bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a constant sample to a channel
    #[must_use]
    pub fn with_channel(mut self, channel: TextureChannel, value: Vec4) -> Self {
        self.channels.insert(channel, value);
        self
    }

    /// Bind or replace a channel's sample
    pub fn bind(&mut self, channel: TextureChannel, value: Vec4) {
        self.channels.insert(channel, value);
    }

    /// Remove a channel's binding
    pub fn unbind(&mut self, channel: TextureChannel) -> Option<Vec4> {
        self.channels.remove(&channel)
    }
}

impl TextureSampleProvider for ConstantSampleProvider {
    fn sample(&self, channel: TextureChannel, _uv: &Vec2) -> Vec4 {
        self.channels.get(&channel).copied().unwrap_or_else(Vec4::zeros)
    }

    fn has_binding(&self, channel: TextureChannel) -> bool {
        self.channels.contains_key(&channel)
    }
}

impl<P: TextureSampleProvider + ?Sized> TextureSampleProvider for &P {
    fn sample(&self, channel: TextureChannel, uv: &Vec2) -> Vec4 {
        (**self).sample(channel, uv)
    }

    fn has_binding(&self, channel: TextureChannel) -> bool {
        (**self).has_binding(channel)
    }
}

/// sRGB transfer decode (electro-optical transfer function)
///
/// Applies to RGB; alpha is stored linearly and passes through.
pub fn srgb_transfer_eotf(value: &Vec4) -> Vec4 {
    let decode = |v: f32| {
        if v <= 0.040_45 {
            v * 0.077_399_380_8
        } else {
            (v * 0.947_867_298_6 + 0.052_132_701_4).powf(2.4)
        }
    };
    let rgb = Vec3::new(decode(value.x), decode(value.y), decode(value.z));
    rgb.push(value.w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_provider_bindings() {
        let mut provider = ConstantSampleProvider::new()
            .with_channel(TextureChannel::AoMap, Vec4::new(0.5, 0.0, 0.0, 1.0));

        assert!(provider.has_binding(TextureChannel::AoMap));
        assert!(!provider.has_binding(TextureChannel::Map));
        assert_eq!(
            provider.sample(TextureChannel::AoMap, &Vec2::new(0.3, 0.7)),
            Vec4::new(0.5, 0.0, 0.0, 1.0)
        );

        provider.unbind(TextureChannel::AoMap);
        assert!(!provider.has_binding(TextureChannel::AoMap));
    }

    #[test]
    fn test_srgb_decode_endpoints_and_alpha() {
        let decoded = srgb_transfer_eotf(&Vec4::new(0.0, 1.0, 0.04045, 0.3));
        assert_relative_eq!(decoded.x, 0.0);
        assert_relative_eq!(decoded.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(decoded.z, 0.04045 / 12.92, epsilon = 1e-6);
        assert_relative_eq!(decoded.w, 0.3);
    }

    #[test]
    fn test_srgb_decode_midpoint() {
        // sRGB 0.5 decodes to roughly 0.214 linear
        let decoded = srgb_transfer_eotf(&Vec4::new(0.5, 0.5, 0.5, 1.0));
        assert_relative_eq!(decoded.x, 0.214_041, epsilon = 1e-4);
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(TextureChannel::RoughnessMap.to_string(), "roughnessMap");
    }
}
