//! The fixed shading stages
//!
//! Each stage is built once per draw from [`ShadingParams`](super::ShadingParams)
//! and the [`FeatureSet`](super::FeatureSet), then applied to many fragments.
//! Stages receive already-sampled texels; sampling is the pipeline's job.

pub mod alpha_map;
pub mod ao_map;
pub mod detail_normal_map;
pub mod map;
pub mod occlusion;
pub mod roughness_map;

pub use alpha_map::AlphaMapStage;
pub use ao_map::AoMapStage;
pub use detail_normal_map::DetailNormalMapStage;
pub use map::MapStage;
pub use occlusion::{compute_specular_occlusion, OcclusionPaths};
pub use roughness_map::RoughnessMapStage;
