//! Fixed-order shading stage pipeline
//!
//! A pipeline is built once per draw. Construction validates the
//! configuration (level ranges, texture bindings) and resolves which stages
//! run; [`ShadingStagePipeline::shade`] is then a pure, total function of the
//! fragment's inputs and can be called for any number of fragments, from any
//! number of threads when the provider is `Sync`.

use crate::foundation::math::Vec4;

use super::stages::{AlphaMapStage, AoMapStage, DetailNormalMapStage, MapStage, RoughnessMapStage};
use super::{
    CoordinateResolver, FeatureSet, FragmentInputs, FragmentState, ShadingError, ShadingParams,
    ShadingResult, TextureChannel, TextureSampleProvider,
};

/// Map → AlphaMap → AOMap → RoughnessMap → DetailNormalMap
pub struct ShadingStagePipeline<'a, P: TextureSampleProvider + ?Sized> {
    features: FeatureSet,
    provider: &'a P,
    resolver: CoordinateResolver,
    map: Option<MapStage>,
    alpha_map: Option<AlphaMapStage>,
    ao_map: Option<AoMapStage>,
    roughness: RoughnessMapStage,
    detail_normal_map: Option<DetailNormalMapStage>,
}

impl<'a, P: TextureSampleProvider + ?Sized> ShadingStagePipeline<'a, P> {
    /// Validate a draw configuration and build its pipeline
    ///
    /// # Errors
    /// [`ShadingError::ZeroLevelRange`] when an enabled stage's level range
    /// has a zero span, [`ShadingError::MissingTexture`] when an enabled stage
    /// has no texture bound in `provider`.
    pub fn new(features: FeatureSet, params: &ShadingParams, provider: &'a P) -> ShadingResult<Self> {
        if let Err(err) = Self::validate(features, params, provider) {
            log::warn!("Rejected shading configuration {:?}: {}", features, err);
            return Err(err);
        }

        let pipeline = Self {
            features,
            provider,
            resolver: CoordinateResolver::new(features, params.uv_transform),
            map: features.contains(FeatureSet::MAP).then(|| MapStage::new(params, features)),
            alpha_map: features.contains(FeatureSet::ALPHA_MAP).then(|| AlphaMapStage::new(params)),
            ao_map: features.contains(FeatureSet::AO_MAP).then(|| AoMapStage::new(params, features)),
            roughness: RoughnessMapStage::new(params, features),
            detail_normal_map: features
                .contains(FeatureSet::DETAIL_NORMAL_MAP)
                .then(|| DetailNormalMapStage::new(params, features)),
        };

        log::debug!("Built shading pipeline for {:?}", features);
        Ok(pipeline)
    }

    fn validate(features: FeatureSet, params: &ShadingParams, provider: &P) -> ShadingResult<()> {
        params.validate(features)?;

        let bindings = [
            (FeatureSet::MAP, TextureChannel::Map),
            (FeatureSet::ALPHA_MAP, TextureChannel::AlphaMap),
            (FeatureSet::AO_MAP, TextureChannel::AoMap),
            (FeatureSet::ROUGHNESS_MAP, TextureChannel::RoughnessMap),
            (FeatureSet::DETAIL_NORMAL_MAP, TextureChannel::DetailNormalMap),
        ];
        for (flag, channel) in bindings {
            if features.contains(flag) && !provider.has_binding(channel) {
                return Err(ShadingError::MissingTexture { channel });
            }
        }
        Ok(())
    }

    /// Features this pipeline was built for
    pub const fn features(&self) -> FeatureSet {
        self.features
    }

    /// Run every enabled stage on one fragment
    pub fn shade(&self, inputs: &FragmentInputs, mut state: FragmentState) -> FragmentState {
        self.shade_in_place(inputs, &mut state);
        state
    }

    /// Run every enabled stage on a fragment in place
    pub fn shade_in_place(&self, inputs: &FragmentInputs, state: &mut FragmentState) {
        let uv = self.resolver.resolve(&inputs.coordinate);
        let sample = |channel| self.provider.sample(channel, &uv);

        if let Some(stage) = &self.map {
            stage.apply(state, &sample(TextureChannel::Map));
        }

        if let Some(stage) = &self.alpha_map {
            stage.apply(state, &sample(TextureChannel::AlphaMap));
        }

        if let Some(stage) = &self.ao_map {
            stage.apply(state, &sample(TextureChannel::AoMap), &inputs.frame);
        }

        let roughness_texel: Option<Vec4> =
            self.roughness.samples_map().then(|| sample(TextureChannel::RoughnessMap));
        self.roughness.apply(state, roughness_texel.as_ref());

        if let Some(stage) = &self.detail_normal_map {
            stage.apply(state, &sample(TextureChannel::DetailNormalMap), &inputs.frame);
        }
    }
}
