//! Scene environment state
//!
//! Set by scene configuration before a render pass and treated as read-only
//! while fragments are shaded. Fog goes through [`FogFacade`] so the fog
//! object can never disagree with its cached parameters.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::material::{MaterialId, TextureHandle};

use super::{Euler, Fog, FogFacade, FogState, FogType};

/// What is drawn behind the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Background {
    /// Uniform color
    Color(Vec3),
    /// Flat screen-space texture
    Texture(TextureHandle),
    /// Cube map skybox
    CubeTexture(TextureHandle),
    /// Equirectangular skybox
    Equirectangular(TextureHandle),
}

impl Background {
    /// Whether the background is an environment map that blur and rotation affect
    pub const fn is_environment_map(&self) -> bool {
        matches!(self, Self::CubeTexture(_) | Self::Equirectangular(_))
    }
}

/// Scene-level values read once per draw
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentState {
    /// Background color or texture
    pub background: Option<Background>,
    /// Environment map for physically-based materials without their own
    pub environment: Option<TextureHandle>,
    /// Background blur in [0, 1]; only environment-map backgrounds
    pub background_blurriness: f32,
    /// Background color attenuation; only texture backgrounds
    pub background_intensity: f32,
    /// Background rotation; only environment-map backgrounds
    pub background_rotation: Euler,
    /// Environment map attenuation
    pub environment_intensity: f32,
    /// Environment map rotation
    pub environment_rotation: Euler,
    /// Scale applied to the environment's diffuse contribution
    pub environment_diffuse_multiplier: f32,
    /// Scene-wide ambient occlusion intensity
    pub ao_map_intensity: f32,
    /// Material every object renders with, when set
    pub override_material: Option<MaterialId>,
    fog: FogFacade,
}

impl Default for EnvironmentState {
    fn default() -> Self {
        Self {
            background: None,
            environment: None,
            background_blurriness: 0.0,
            background_intensity: 1.0,
            background_rotation: Euler::default(),
            environment_intensity: 1.0,
            environment_rotation: Euler::default(),
            environment_diffuse_multiplier: 1.0,
            ao_map_intensity: 1.0,
            override_material: None,
            fog: FogFacade::default(),
        }
    }
}

/// Per-draw snapshot handed to the lighting model
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentUniforms {
    /// Live fog, if any
    pub fog: Option<Fog>,
    /// Environment map attenuation
    pub environment_intensity: f32,
    /// Environment diffuse scale
    pub environment_diffuse_multiplier: f32,
    /// Scene-wide ambient occlusion intensity
    pub ao_map_intensity: f32,
    /// Environment map rotation
    pub environment_rotation: Euler,
    /// Background attenuation
    pub background_intensity: f32,
    /// Background blur
    pub background_blurriness: f32,
}

impl EnvironmentState {
    /// Create an environment with defaults and no fog
    pub fn new() -> Self {
        Self::default()
    }

    /// Fog facade
    pub const fn fog_facade(&self) -> &FogFacade {
        &self.fog
    }

    /// Live fog object, present unless the fog type is `None`
    pub const fn fog(&self) -> Option<&Fog> {
        self.fog.fog()
    }

    /// Fog state machine state
    pub const fn fog_state(&self) -> FogState {
        self.fog.state()
    }

    /// Selected fog type
    pub const fn fog_type(&self) -> FogType {
        self.fog.fog_type()
    }

    /// Select the fog type; see [`FogFacade::set_fog_type`]
    pub fn set_fog_type(&mut self, fog_type: FogType) {
        self.fog.set_fog_type(fog_type);
    }

    /// Fog color as `0xRRGGBB`
    pub const fn fog_color(&self) -> u32 {
        self.fog.fog_color()
    }

    /// Set the fog color
    pub fn set_fog_color(&mut self, color: u32) {
        self.fog.set_fog_color(color);
    }

    /// Distance at which fog starts
    pub const fn fog_distance_min(&self) -> f32 {
        self.fog.fog_distance_min()
    }

    /// Set the distance at which fog starts
    pub fn set_fog_distance_min(&mut self, near: f32) {
        self.fog.set_fog_distance_min(near);
    }

    /// Distance at which fog is fully opaque
    pub const fn fog_distance_max(&self) -> f32 {
        self.fog.fog_distance_max()
    }

    /// Set the distance at which fog is fully opaque
    pub fn set_fog_distance_max(&mut self, far: f32) {
        self.fog.set_fog_distance_max(far);
    }

    /// Rename the live fog object; no-op without fog
    pub fn set_fog_name(&mut self, name: &str) {
        self.fog.set_fog_name(name);
    }

    /// Values the lighting model reads for one draw
    pub fn draw_uniforms(&self) -> EnvironmentUniforms {
        EnvironmentUniforms {
            fog: self.fog().cloned(),
            environment_intensity: self.environment_intensity,
            environment_diffuse_multiplier: self.environment_diffuse_multiplier,
            ao_map_intensity: self.ao_map_intensity,
            environment_rotation: self.environment_rotation,
            background_intensity: self.background_intensity,
            background_blurriness: self.background_blurriness,
        }
    }

    /// Copy every value from `source`
    ///
    /// Fog is replayed through the facade setters.
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.background = source.background;
        self.environment = source.environment;
        self.background_blurriness = source.background_blurriness;
        self.background_intensity = source.background_intensity;
        self.background_rotation = source.background_rotation;
        self.environment_intensity = source.environment_intensity;
        self.environment_rotation = source.environment_rotation;
        self.environment_diffuse_multiplier = source.environment_diffuse_multiplier;
        self.ao_map_intensity = source.ao_map_intensity;
        self.override_material = source.override_material;
        self.fog.copy_from(&source.fog);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let env = EnvironmentState::new();
        assert_eq!(env.background, None);
        assert_eq!(env.background_blurriness, 0.0);
        assert_eq!(env.background_intensity, 1.0);
        assert_eq!(env.environment_intensity, 1.0);
        assert_eq!(env.environment_diffuse_multiplier, 1.0);
        assert_eq!(env.fog_type(), FogType::None);
        assert!(env.fog().is_none());
    }

    #[test]
    fn test_linear_fog_survives_none_round_trip() {
        let mut env = EnvironmentState::new();
        env.set_fog_type(FogType::Linear);
        env.set_fog_distance_min(10.0);
        env.set_fog_distance_max(500.0);
        env.set_fog_type(FogType::None);
        assert_eq!(env.fog_state(), FogState::NoFog);

        env.set_fog_type(FogType::Linear);

        let fog = env.fog().unwrap();
        assert_eq!(fog.near, 10.0);
        assert_eq!(fog.far, 500.0);
    }

    #[test]
    fn test_draw_uniforms_snapshot() {
        let mut env = EnvironmentState::new();
        env.environment_intensity = 0.5;
        env.ao_map_intensity = 0.25;
        env.set_fog_color(0xffffff);
        env.set_fog_type(FogType::ExponentialSquared);

        let uniforms = env.draw_uniforms();
        env.set_fog_type(FogType::None);

        assert_eq!(uniforms.environment_intensity, 0.5);
        assert_eq!(uniforms.ao_map_intensity, 0.25);
        assert_eq!(uniforms.fog.map(|fog| fog.color_hex()), Some(0xffffff));
    }

    #[test]
    fn test_copy_from() {
        let mut source = EnvironmentState::new();
        source.background = Some(Background::CubeTexture(TextureHandle(4)));
        source.override_material = Some(MaterialId(9));
        source.environment_rotation = Euler::new(0.0, 1.5, 0.0);
        source.set_fog_distance_max(42.0);
        source.set_fog_type(FogType::Linear);

        let mut target = EnvironmentState::new();
        target.copy_from(&source);

        assert_eq!(target, source);
    }

    #[test]
    fn test_environment_map_backgrounds() {
        assert!(Background::Equirectangular(TextureHandle(1)).is_environment_map());
        assert!(!Background::Color(Vec3::zeros()).is_environment_map());
    }
}
