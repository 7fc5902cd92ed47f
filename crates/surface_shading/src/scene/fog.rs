//! Scene fog and its parameter facade
//!
//! Fog is configured through four independent values (`fog_type`,
//! `fog_color`, `fog_distance_min`, `fog_distance_max`). The facade owns a
//! cache of the three parameters and, only while the type is not `None`, a
//! live [`Fog`] built from that cache.
//!
//! # States
//!
//! - `NoFog`: no fog object; parameter setters only update the cache
//! - `Fog`: live fog object; parameter setters update cache and object
//!
//! Only [`FogFacade::set_fog_type`] moves between states. Leaving `Fog`
//! keeps the cache, so re-entering restores the previous parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::color::{hex_to_rgb, rgb_to_hex};
use crate::foundation::math::Vec3;

/// Default fog color (black)
pub const DEFAULT_FOG_COLOR: u32 = 0x000000;

/// Bits of a `0xRRGGBB` color; higher bits are dropped
const RGB_MASK: u32 = 0x00FF_FFFF;

/// Default distance at which fog starts
pub const DEFAULT_FOG_NEAR: f32 = 1.0;

/// Default distance at which fog is fully opaque
pub const DEFAULT_FOG_FAR: f32 = 1000.0;

/// Fog model selected for a scene
///
/// Serialized as its string name (`"none"`, `"linear"`, `"exponential-squared"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum FogType {
    /// No fog
    #[default]
    None,
    /// Fog density grows linearly between near and far
    Linear,
    /// Fog density grows with the square of distance
    ExponentialSquared,
}

impl FogType {
    /// Name used in configuration and serialized records
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Linear => "linear",
            Self::ExponentialSquared => "exponential-squared",
        }
    }
}

impl fmt::Display for FogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FogType> for &'static str {
    fn from(fog_type: FogType) -> Self {
        fog_type.as_str()
    }
}

impl TryFrom<String> for FogType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for FogType {
    type Err = String;

    /// Empty strings parse as `None`, like an absent type
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(Self::None),
            "linear" => Ok(Self::Linear),
            "exponential-squared" | "exp2" => Ok(Self::ExponentialSquared),
            other => Err(format!("unknown fog type '{other}'")),
        }
    }
}

/// Live fog object read by the lighting model
#[derive(Debug, Clone, PartialEq)]
pub struct Fog {
    /// Optional name
    pub name: String,
    /// Fog model
    pub kind: FogType,
    /// Fog color, normalized RGB
    pub color: Vec3,
    /// Distance at which fog starts
    pub near: f32,
    /// Distance at which fog is fully opaque
    pub far: f32,
}

impl Fog {
    /// Create a fog object from a hex color and distances
    pub fn new(kind: FogType, color: u32, near: f32, far: f32) -> Self {
        Self {
            name: String::new(),
            kind,
            color: hex_to_rgb(color),
            near,
            far,
        }
    }

    /// Fog color as `0xRRGGBB`
    pub fn color_hex(&self) -> u32 {
        rgb_to_hex(&self.color)
    }

    /// Serialized form of the fog object
    pub fn to_record(&self) -> FogRecord {
        FogRecord {
            kind: "Fog".to_string(),
            name: self.name.clone(),
            color: self.color_hex(),
            near: self.near,
            far: self.far,
        }
    }
}

/// Serialized fog object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FogRecord {
    /// Object type tag, always `"Fog"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional name
    #[serde(default)]
    pub name: String,
    /// Color as `0xRRGGBB`
    pub color: u32,
    /// Distance at which fog starts
    pub near: f32,
    /// Distance at which fog is fully opaque
    pub far: f32,
}

/// Observable state of the facade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogState {
    /// No fog object exists
    NoFog,
    /// A fog object exists and mirrors the cached parameters
    Fog,
}

/// Fog parameters with lazily created fog object
#[derive(Debug, Clone, PartialEq)]
pub struct FogFacade {
    fog_type: FogType,
    color: u32,
    near: f32,
    far: f32,
    fog: Option<Fog>,
}

impl Default for FogFacade {
    fn default() -> Self {
        Self {
            fog_type: FogType::None,
            color: DEFAULT_FOG_COLOR,
            near: DEFAULT_FOG_NEAR,
            far: DEFAULT_FOG_FAR,
            fog: None,
        }
    }
}

impl FogFacade {
    /// Create a facade in the `NoFog` state with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub const fn state(&self) -> FogState {
        if self.fog.is_some() {
            FogState::Fog
        } else {
            FogState::NoFog
        }
    }

    /// Live fog object, present unless the type is `None`
    pub const fn fog(&self) -> Option<&Fog> {
        self.fog.as_ref()
    }

    /// Selected fog type
    pub const fn fog_type(&self) -> FogType {
        self.fog_type
    }

    /// Select the fog type, creating or destroying the fog object
    ///
    /// Any non-`None` type builds a fresh fog object from the cached
    /// parameters; `None` drops it and keeps the cache.
    pub fn set_fog_type(&mut self, fog_type: FogType) {
        let previous = self.state();
        self.fog_type = fog_type;
        self.fog = match fog_type {
            FogType::None => None,
            kind => Some(Fog::new(kind, self.color, self.near, self.far)),
        };

        if previous != self.state() {
            log::debug!("Fog {:?} -> {:?} ({})", previous, self.state(), fog_type);
        }
    }

    /// Fog color as `0xRRGGBB`
    pub const fn fog_color(&self) -> u32 {
        self.color
    }

    /// Set the fog color; updates the live fog object if there is one
    ///
    /// Only the low 24 bits are kept.
    pub fn set_fog_color(&mut self, color: u32) {
        self.color = color & RGB_MASK;
        if let Some(fog) = &mut self.fog {
            fog.color = hex_to_rgb(self.color);
        }
    }

    /// Distance at which fog starts
    pub const fn fog_distance_min(&self) -> f32 {
        self.near
    }

    /// Set the near distance; updates the live fog object if there is one
    pub fn set_fog_distance_min(&mut self, near: f32) {
        self.near = near;
        if let Some(fog) = &mut self.fog {
            fog.near = near;
        }
    }

    /// Distance at which fog is fully opaque
    pub const fn fog_distance_max(&self) -> f32 {
        self.far
    }

    /// Set the far distance; updates the live fog object if there is one
    pub fn set_fog_distance_max(&mut self, far: f32) {
        self.far = far;
        if let Some(fog) = &mut self.fog {
            fog.far = far;
        }
    }

    /// Rename the live fog object; no-op without fog
    pub fn set_fog_name(&mut self, name: &str) {
        if let Some(fog) = &mut self.fog {
            fog.name = name.to_string();
        }
    }

    /// Copy type and parameters from another facade through the setters
    pub fn copy_from(&mut self, source: &Self) {
        self.set_fog_color(source.color);
        self.set_fog_distance_min(source.near);
        self.set_fog_distance_max(source.far);
        self.set_fog_type(source.fog_type);
        if let (Some(fog), Some(source_fog)) = (&mut self.fog, &source.fog) {
            fog.name.clone_from(&source_fog.name);
        }
    }
}
