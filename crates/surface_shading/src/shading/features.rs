//! Capability flags resolved per material and draw call

use bitflags::bitflags;

bitflags! {
    /// Immutable set of shading capabilities for one draw
    ///
    /// Stage flags switch whole stages on; light-path flags (`CLEARCOAT`,
    /// `SHEEN`, `ENVMAP`) are independent of each other and may combine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct FeatureSet: u32 {
        /// Diffuse color map is bound
        const MAP = 1 << 0;
        /// Grayscale alpha map is bound
        const ALPHA_MAP = 1 << 1;
        /// Ambient occlusion map is bound
        const AO_MAP = 1 << 2;
        /// Roughness map is bound
        const ROUGHNESS_MAP = 1 << 3;
        /// Detail normal map is bound
        const DETAIL_NORMAL_MAP = 1 << 4;
        /// Surface color contributes to roughness
        const COLOR_ROUGHNESS_FACTOR = 1 << 5;
        /// Offset-clamp-offset adjustment of roughness
        const ROUGHNESS_OFFSET = 1 << 6;
        /// Clearcoat indirect specular path
        const CLEARCOAT = 1 << 7;
        /// Sheen indirect specular path
        const SHEEN = 1 << 8;
        /// Environment map indirect specular path
        const ENVMAP = 1 << 9;
        /// Physically-based (standard) material variant
        const STANDARD = 1 << 10;
        /// Point primitives carry their own UV attribute
        const POINTS_UV = 1 << 11;
        /// Normal maps are encoded in object space
        const NORMAL_MAP_OBJECT_SPACE = 1 << 12;
        /// Diffuse map needs an inline sRGB decode (video sources)
        const DECODE_VIDEO_TEXTURE = 1 << 13;
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FeatureSet {
    /// Whether indirect specular gets view-dependent specular occlusion
    pub const fn specular_occlusion(self) -> bool {
        self.contains(Self::ENVMAP.union(Self::STANDARD))
    }

    /// Whether any stage needs a sampling coordinate
    pub const fn samples_textures(self) -> bool {
        self.intersects(
            Self::MAP
                .union(Self::ALPHA_MAP)
                .union(Self::AO_MAP)
                .union(Self::ROUGHNESS_MAP)
                .union(Self::DETAIL_NORMAL_MAP),
        )
    }
}
