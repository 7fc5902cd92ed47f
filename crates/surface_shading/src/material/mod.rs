//! Material parameters feeding the shading pipeline
//!
//! Materials own their scalar and color parameters and refer to textures and
//! other materials by handle. Handles are shared references: copying a
//! material aliases the same texture, it never duplicates it.

pub mod sprite;

pub use sprite::{SpriteMaterial, SpriteMaterialParams};

use serde::{Deserialize, Serialize};

/// Handle for a texture resource owned by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// Unique identifier for materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u32);
