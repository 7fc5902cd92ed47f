//! # Surface Shading
//!
//! The numeric core that turns sampled texture channels, per-material
//! parameters and scene environment state into the values a lighting model
//! consumes: diffuse color and alpha, roughness, occlusion-attenuated indirect
//! light and a perturbed surface normal.
//!
//! ## Features
//!
//! - **Fixed stage order**: Map → AlphaMap → AOMap → RoughnessMap → DetailNormalMap
//! - **Feature flags**: one resolved [`FeatureSet`](shading::FeatureSet) per draw selects stages and sub-paths
//! - **Fail-fast validation**: level ranges and texture bindings are checked when a pipeline is built
//! - **Scene environment**: background, environment lighting and a fog facade with an explicit state machine
//! - **Serializable**: shading parameters and scene records load and save as TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use surface_shading::prelude::*;
//!
//! fn main() -> Result<(), ShadingError> {
//!     let provider = ConstantSampleProvider::new()
//!         .with_channel(TextureChannel::Map, Vec4::new(0.8, 0.4, 0.2, 1.0));
//!     let params = ShadingParams::default();
//!     let pipeline = ShadingStagePipeline::new(FeatureSet::MAP, &params, &provider)?;
//!
//!     let inputs = FragmentInputs::default();
//!     let state = pipeline.shade(&inputs, FragmentState::default());
//!     assert!((state.diffuse_color.x - 0.8).abs() < 1e-6);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod material;
pub mod scene;
pub mod shading;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{Mat3, Vec2, Vec3, Vec4},
        material::{MaterialId, SpriteMaterial, SpriteMaterialParams, TextureHandle},
        scene::{Background, EnvironmentState, Euler, EulerOrder, Fog, FogType},
        shading::{
            ConstantSampleProvider, FeatureSet, FragmentInputs, FragmentState, LevelRange,
            PrimitiveCoordinate, ShadingError, ShadingParams, ShadingResult, ShadingStagePipeline,
            ShadingUniforms, TextureChannel, TextureSampleProvider,
        },
    };
}
