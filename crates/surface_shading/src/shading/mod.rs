//! Per-fragment shading stages
//!
//! This module holds the fixed-order stage pipeline and everything it reads
//! and writes:
//!
//! - [`FeatureSet`]: the resolved capability flags for one draw
//! - [`TextureSampleProvider`]: the external sampler the stages query
//! - [`CoordinateResolver`]: mesh UV or transformed point-quad coordinate
//! - [`FragmentState`]: the accumulator handed to the lighting model
//! - [`ShadingStagePipeline`]: validation at build time, then pure per-fragment evaluation
//!
//! # Stage Order
//!
//! Map → AlphaMap → AOMap → RoughnessMap → DetailNormalMap. Occlusion sources
//! stay independent multipliers; each stage applies its own and nothing is
//! renormalized when a stage is disabled.

pub mod coordinates;
pub mod features;
pub mod fragment;
pub mod level;
pub mod params;
pub mod pipeline;
pub mod sample;
pub mod stages;
pub mod uniforms;

pub use coordinates::{CoordinateResolver, PrimitiveCoordinate};
pub use features::FeatureSet;
pub use fragment::{FragmentInputs, FragmentState, SurfaceFrame};
pub use level::LevelRange;
pub use params::ShadingParams;
pub use pipeline::ShadingStagePipeline;
pub use sample::{srgb_transfer_eotf, ConstantSampleProvider, TextureChannel, TextureSampleProvider};
pub use uniforms::ShadingUniforms;

use thiserror::Error;

/// Configuration errors detected while building a pipeline
///
/// These are never produced per fragment: once a pipeline exists, shading is
/// total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShadingError {
    /// A level range used by an enabled stage has a zero or NaN denominator
    #[error("{channel} level range has a zero or NaN max; remapping would not produce finite values")]
    ZeroLevelRange {
        /// Channel whose range is invalid
        channel: TextureChannel,
    },

    /// A stage is enabled but the provider has no texture bound for it
    #[error("{channel} is enabled but no texture is bound")]
    MissingTexture {
        /// Channel with no binding
        channel: TextureChannel,
    },
}

/// Result type for shading configuration
pub type ShadingResult<T> = Result<T, ShadingError>;
