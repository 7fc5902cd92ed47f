//! Sprite material
//!
//! Parameters for billboard geometry. A sprite is transparent by default,
//! unlike opaque-by-default materials, and is affected by scene fog unless
//! told otherwise.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::{Vec3, Vec4};
use crate::shading::{FeatureSet, LevelRange, ShadingParams, ShadingResult};

use super::TextureHandle;

/// Material for rendering sprites
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteMaterial {
    /// Optional name for debugging
    pub name: Option<String>,
    /// Color the map is modulated by
    pub color: Vec3,
    /// Base opacity
    pub opacity: f32,
    /// Color map; its alpha channel multiplies opacity
    pub map: Option<TextureHandle>,
    /// Map saturation, 0 = luminance gray, 1 = unmodified
    pub map_saturation: f32,
    /// Map level range
    pub map_level: LevelRange,
    /// Grayscale opacity map (black transparent, white opaque)
    pub alpha_map: Option<TextureHandle>,
    /// Alpha map level range
    pub alpha_map_level: LevelRange,
    /// Bias added to the sampler's mip level selection
    pub mipmap_bias: f32,
    /// Rotation in radians
    pub rotation: f32,
    /// Whether sprite size shrinks with camera depth (perspective only)
    pub size_attenuation: bool,
    /// Whether the sprite is alpha blended
    pub transparent: bool,
    /// Whether scene fog affects the sprite
    pub fog: bool,
}

impl Default for SpriteMaterial {
    fn default() -> Self {
        Self {
            name: None,
            color: Vec3::new(1.0, 1.0, 1.0),
            opacity: 1.0,
            map: None,
            map_saturation: 1.0,
            map_level: LevelRange::IDENTITY,
            alpha_map: None,
            alpha_map_level: LevelRange::IDENTITY,
            mipmap_bias: 0.0,
            rotation: 0.0,
            size_attenuation: true,
            transparent: true,
            fog: true,
        }
    }
}

/// Overrides applied on top of sprite defaults at construction
///
/// Every field left `None` keeps the default documented on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteMaterialParams {
    /// Debug name; default none
    pub name: Option<String>,
    /// Color; default white `(1, 1, 1)`
    pub color: Option<Vec3>,
    /// Opacity; default 1
    pub opacity: Option<f32>,
    /// Color map; default none
    pub map: Option<TextureHandle>,
    /// Map saturation; default 1
    pub map_saturation: Option<f32>,
    /// Map level range; default (0, 1)
    pub map_level: Option<LevelRange>,
    /// Alpha map; default none
    pub alpha_map: Option<TextureHandle>,
    /// Alpha map level range; default (0, 1)
    pub alpha_map_level: Option<LevelRange>,
    /// Mip bias; default 0
    pub mipmap_bias: Option<f32>,
    /// Rotation in radians; default 0
    pub rotation: Option<f32>,
    /// Size attenuation; default true
    pub size_attenuation: Option<bool>,
    /// Transparency; default true
    pub transparent: Option<bool>,
    /// Fog; default true
    pub fog: Option<bool>,
}

impl Config for SpriteMaterialParams {}

impl SpriteMaterial {
    /// Create a sprite material with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sprite material from defaults plus overrides
    pub fn with_params(params: &SpriteMaterialParams) -> Self {
        let mut material = Self::default();
        material.set_values(params);
        material
    }

    /// Apply every override present in `params`
    pub fn set_values(&mut self, params: &SpriteMaterialParams) {
        if let Some(name) = &params.name {
            self.name = Some(name.clone());
        }
        if let Some(color) = params.color {
            self.color = color;
        }
        if let Some(opacity) = params.opacity {
            self.opacity = opacity;
        }
        if params.map.is_some() {
            self.map = params.map;
        }
        if let Some(saturation) = params.map_saturation {
            self.map_saturation = saturation;
        }
        if let Some(level) = params.map_level {
            self.map_level = level;
        }
        if params.alpha_map.is_some() {
            self.alpha_map = params.alpha_map;
        }
        if let Some(level) = params.alpha_map_level {
            self.alpha_map_level = level;
        }
        if let Some(bias) = params.mipmap_bias {
            self.mipmap_bias = bias;
        }
        if let Some(rotation) = params.rotation {
            self.rotation = rotation;
        }
        if let Some(size_attenuation) = params.size_attenuation {
            self.size_attenuation = size_attenuation;
        }
        if let Some(transparent) = params.transparent {
            self.transparent = transparent;
        }
        if let Some(fog) = params.fog {
            self.fog = fog;
        }
    }

    /// Copy every parameter from `source`
    ///
    /// Colors and level ranges are copied by value; texture handles are
    /// aliased, so both materials keep sampling the same textures.
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.name.clone_from(&source.name);
        self.color = source.color;
        self.opacity = source.opacity;
        self.map = source.map;
        self.map_saturation = source.map_saturation;
        self.map_level = source.map_level;
        self.alpha_map = source.alpha_map;
        self.alpha_map_level = source.alpha_map_level;
        self.mipmap_bias = source.mipmap_bias;
        self.rotation = source.rotation;
        self.size_attenuation = source.size_attenuation;
        self.transparent = source.transparent;
        self.fog = source.fog;

        log::trace!("Copied sprite material {:?}", source.name);
        self
    }

    /// Stages this material enables
    pub fn feature_set(&self) -> FeatureSet {
        let mut features = FeatureSet::empty();
        features.set(FeatureSet::MAP, self.map.is_some());
        features.set(FeatureSet::ALPHA_MAP, self.alpha_map.is_some());
        features
    }

    /// Shading uniforms for this material
    pub fn shading_params(&self) -> ShadingParams {
        ShadingParams {
            map_saturation: self.map_saturation,
            map_level: self.map_level,
            alpha_map_level: self.alpha_map_level,
            ..ShadingParams::default()
        }
    }

    /// Diffuse color a fragment starts from, before any map
    pub fn base_diffuse(&self) -> Vec4 {
        self.color.push(self.opacity)
    }

    /// Check the level ranges of every bound map
    pub fn validate(&self) -> ShadingResult<()> {
        self.shading_params().validate(self.feature_set())
    }
}
