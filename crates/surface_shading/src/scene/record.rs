//! Serialized environment record
//!
//! Field names follow the scene file format (`backgroundBlurriness`,
//! `fogDistanceMin`, ...). Background blur and intensity are written only
//! when they differ from their defaults; every other scalar and the fog
//! facade values are always written, and the fog object is written whenever
//! it exists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::material::{MaterialId, TextureHandle};

use super::{Background, EnvironmentState, Euler, FogRecord, FogType};

/// Errors restoring an environment from a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneRecordError {
    /// The record carries a fog object but its fog type is `none`
    #[error("fog object present while fogType is none")]
    UnexpectedFog,

    /// The record selects a fog type but carries no fog object
    #[error("fogType is {0} but no fog object is present")]
    MissingFog(FogType),
}

/// Serializable snapshot of an [`EnvironmentState`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentRecord {
    /// Background, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    /// Environment map, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<TextureHandle>,
    /// Override material, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_material: Option<MaterialId>,
    /// Fog object, when fog is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fog: Option<FogRecord>,
    /// Written only when above 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_blurriness: Option<f32>,
    /// Written only when not 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_intensity: Option<f32>,
    /// Background rotation
    pub background_rotation: Euler,
    /// Environment rotation
    pub environment_rotation: Euler,
    /// Environment intensity
    pub environment_intensity: f32,
    /// Environment diffuse multiplier
    pub environment_diffuse_multiplier: f32,
    /// Scene-wide AO intensity
    pub ao_map_intensity: f32,
    /// Fog type
    pub fog_type: FogType,
    /// Fog color as `0xRRGGBB`
    pub fog_color: u32,
    /// Fog near distance
    pub fog_distance_min: f32,
    /// Fog far distance
    pub fog_distance_max: f32,
}

impl Default for EnvironmentRecord {
    fn default() -> Self {
        EnvironmentState::default().to_record()
    }
}

impl Config for EnvironmentRecord {}

impl EnvironmentState {
    /// Serializable snapshot of this environment
    pub fn to_record(&self) -> EnvironmentRecord {
        EnvironmentRecord {
            background: self.background,
            environment: self.environment,
            override_material: self.override_material,
            fog: self.fog().map(super::Fog::to_record),
            background_blurriness: (self.background_blurriness > 0.0).then_some(self.background_blurriness),
            background_intensity: (self.background_intensity != 1.0).then_some(self.background_intensity),
            background_rotation: self.background_rotation,
            environment_rotation: self.environment_rotation,
            environment_intensity: self.environment_intensity,
            environment_diffuse_multiplier: self.environment_diffuse_multiplier,
            ao_map_intensity: self.ao_map_intensity,
            fog_type: self.fog_type(),
            fog_color: self.fog_color(),
            fog_distance_min: self.fog_distance_min(),
            fog_distance_max: self.fog_distance_max(),
        }
    }

    /// Rebuild an environment from a record
    ///
    /// The facade values are authoritative: fog parameters are cached first,
    /// then the fog type creates the fog object from them. The fog object's
    /// name is carried over from the record.
    ///
    /// # Errors
    /// Fails when the record's fog object and fog type disagree on whether
    /// fog is enabled.
    pub fn from_record(record: &EnvironmentRecord) -> Result<Self, SceneRecordError> {
        match (record.fog_type, &record.fog) {
            (FogType::None, Some(_)) => return Err(SceneRecordError::UnexpectedFog),
            (fog_type, None) if fog_type != FogType::None => {
                return Err(SceneRecordError::MissingFog(fog_type));
            }
            _ => {}
        }

        let mut env = Self::default();
        env.background = record.background;
        env.environment = record.environment;
        env.override_material = record.override_material;
        env.background_blurriness = record.background_blurriness.unwrap_or(0.0);
        env.background_intensity = record.background_intensity.unwrap_or(1.0);
        env.background_rotation = record.background_rotation;
        env.environment_rotation = record.environment_rotation;
        env.environment_intensity = record.environment_intensity;
        env.environment_diffuse_multiplier = record.environment_diffuse_multiplier;
        env.ao_map_intensity = record.ao_map_intensity;

        env.set_fog_color(record.fog_color);
        env.set_fog_distance_min(record.fog_distance_min);
        env.set_fog_distance_max(record.fog_distance_max);
        env.set_fog_type(record.fog_type);
        if let Some(fog) = &record.fog {
            env.set_fog_name(&fog.name);
        }

        log::debug!("Restored environment with fog {}", env.fog_type());
        Ok(env)
    }
}
