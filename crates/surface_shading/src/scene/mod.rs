//! Scene-level environment state
//!
//! Everything a draw reads once from the scene rather than per fragment:
//! background and environment references, environment lighting scalars,
//! the override material and fog. The shading pipeline never mutates it.

pub mod environment;
pub mod euler;
pub mod fog;
pub mod record;

pub use environment::{Background, EnvironmentState, EnvironmentUniforms};
pub use euler::{Euler, EulerOrder};
pub use fog::{Fog, FogFacade, FogRecord, FogState, FogType};
pub use record::{EnvironmentRecord, SceneRecordError};
