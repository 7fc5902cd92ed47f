//! Shading probe
//!
//! Shades a single fragment from a RON or TOML description and logs every
//! intermediate value the lighting model would receive. Useful for checking
//! material parameters without a renderer.
//!
//! ```text
//! RUST_LOG=debug shading_probe shading_probe/probes/sprite.ron
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use surface_shading::foundation::logging;
use surface_shading::prelude::*;
use surface_shading::scene::EnvironmentRecord;
use surface_shading::shading::SurfaceFrame;

/// Probe errors
#[derive(thiserror::Error, Debug)]
enum ProbeError {
    #[error("usage: shading_probe <probe.ron|probe.toml>")]
    Usage,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Shading(#[from] ShadingError),

    #[error(transparent)]
    Scene(#[from] surface_shading::scene::SceneRecordError),
}

/// One fragment to shade
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ProbeConfig {
    /// Stages enabled in addition to those the sprite material implies
    features: FeatureSet,
    /// Shading parameters used when no sprite material is given
    params: ShadingParams,
    /// Sprite material; replaces `params` and `diffuse`
    sprite: Option<SpriteMaterialParams>,
    /// Constant sample per bound channel
    samples: ConstantSampleProvider,
    /// Starting diffuse color
    diffuse: Vec4,
    /// Mesh UV
    uv: Vec2,
    /// Quad-local point coordinate; shades as a point primitive when set
    point_coord: Option<Vec2>,
    /// Interpolated normal
    normal: Vec3,
    /// Direction toward the viewer
    view_dir: Vec3,
    /// Roughness resolved by the lighting model
    lighting_roughness: f32,
    /// Indirect diffuse light
    indirect_diffuse: Vec3,
    /// Indirect specular light
    indirect_specular: Vec3,
    /// Scene environment to report alongside the fragment
    environment: Option<EnvironmentRecord>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            features: FeatureSet::empty(),
            params: ShadingParams::default(),
            sprite: None,
            samples: ConstantSampleProvider::new(),
            diffuse: Vec4::new(1.0, 1.0, 1.0, 1.0),
            uv: Vec2::zeros(),
            point_coord: None,
            normal: Vec3::z(),
            view_dir: Vec3::z(),
            lighting_roughness: 1.0,
            indirect_diffuse: Vec3::new(1.0, 1.0, 1.0),
            indirect_specular: Vec3::new(1.0, 1.0, 1.0),
            environment: None,
        }
    }
}

impl Config for ProbeConfig {}

impl ProbeConfig {
    fn inputs(&self) -> FragmentInputs {
        let coordinate = match self.point_coord {
            Some(point_coord) => PrimitiveCoordinate::Point { point_coord, uv: Some(self.uv) },
            None => PrimitiveCoordinate::Mesh { uv: self.uv },
        };
        FragmentInputs {
            coordinate,
            frame: SurfaceFrame {
                geometry_normal: self.normal.normalize(),
                view_dir: self.view_dir.normalize(),
                lighting_roughness: self.lighting_roughness,
                ..SurfaceFrame::default()
            },
        }
    }
}

fn run(config: &ProbeConfig) -> Result<(), ProbeError> {
    let (features, params, diffuse) = match &config.sprite {
        Some(sprite) => {
            let material = SpriteMaterial::with_params(sprite);
            material.validate()?;
            log::info!("Sprite material {:?}", material.name);
            (material.feature_set() | config.features, material.shading_params(), material.base_diffuse())
        }
        None => (config.features, config.params.clone(), config.diffuse),
    };

    let uniforms = ShadingUniforms::from_params(&params, features);
    log::info!("Uniform block: {} bytes, features {:?}", ShadingUniforms::size(), uniforms.feature_set());

    let pipeline = ShadingStagePipeline::new(features, &params, &config.samples)?;
    let state = FragmentState::new(diffuse, config.normal)
        .with_indirect(config.indirect_diffuse, config.indirect_specular);
    let shaded = pipeline.shade(&config.inputs(), state);

    log::info!("diffuse color: {:?}", shaded.diffuse_color.as_slice());
    log::info!("normal: {:?}", shaded.normal.as_slice());
    log::info!("roughness: {}", shaded.roughness_factor);
    log::info!("indirect diffuse: {:?}", shaded.indirect_diffuse.as_slice());
    log::info!("indirect specular: {:?}", shaded.indirect_specular.as_slice());

    if let Some(record) = &config.environment {
        let environment = EnvironmentState::from_record(record)?;
        let draw = environment.draw_uniforms();
        log::info!(
            "environment intensity {} (diffuse x{}), scene AO {}",
            draw.environment_intensity,
            draw.environment_diffuse_multiplier,
            draw.ao_map_intensity
        );
        match draw.fog {
            Some(fog) => log::info!("fog {} {:06x} {}..{}", fog.kind, fog.color_hex(), fog.near, fog.far),
            None => log::info!("no fog"),
        }
    }

    Ok(())
}

fn main() -> Result<(), ProbeError> {
    logging::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from).ok_or(ProbeError::Usage)?;
    log::info!("Loading probe {}", path.display());

    let config = ProbeConfig::load_from_file(&path)?;
    run(&config).map_err(|e| {
        log::error!("Probe failed: {e}");
        e
    })
}
