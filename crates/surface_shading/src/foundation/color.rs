//! 24-bit hex color conversion
//!
//! Scene-level colors (fog) are configured and serialized as `0xRRGGBB`
//! integers; shading math works on normalized RGB vectors.

use super::math::Vec3;

/// Convert a `0xRRGGBB` integer into normalized RGB
pub fn hex_to_rgb(hex: u32) -> Vec3 {
    let channel = |shift: u32| f32::from(((hex >> shift) & 0xff) as u8) / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}

/// Convert normalized RGB into a `0xRRGGBB` integer, clamping each channel
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hex(rgb: &Vec3) -> u32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
    (channel(rgb.x) << 16) | (channel(rgb.y) << 8) | channel(rgb.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hex_to_rgb() {
        let rgb = hex_to_rgb(0xff8000);
        assert_relative_eq!(rgb.x, 1.0);
        assert_relative_eq!(rgb.y, 128.0 / 255.0);
        assert_relative_eq!(rgb.z, 0.0);
    }

    #[test]
    fn test_hex_survives_conversion() {
        for hex in [0x000000, 0xffffff, 0x123456, 0xabcdef] {
            assert_eq!(rgb_to_hex(&hex_to_rgb(hex)), hex);
        }
    }

    #[test]
    fn test_out_of_range_channels_clamp() {
        assert_eq!(rgb_to_hex(&Vec3::new(2.0, -1.0, 0.0)), 0xff0000);
    }
}
