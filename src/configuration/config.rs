//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – window size and fixed tick rate for the viewer
//! - [`ParametersConfig`] – physical constants and gesture tuning
//! - [`BodyConfig`]       – bodies present before the first frame
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty file gives the classic empty sandbox.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   width: 1000.0
//!   height: 1000.0
//!   tick_rate: 60.0           # physics ticks per second
//!
//! parameters:
//!   G: 5.0                    # gravitational constant
//!   mass_multiplier: 1.0      # mass = radius * mass_multiplier
//!   min_radius: 5.0
//!   center: [500.0, 500.0]    # target of the largest body's pull
//!   center_scale: 0.5
//!   center_threshold: 10.0    # dead zone around the center
//!   velocity_scale: 0.05
//!   color_saturation_radius: 200.0
//!   eps: 0.01
//!   dt: 1.0
//!   radius_growth_ms: 100.0
//!
//! bodies:
//!   - x: [ 400.0, 500.0 ]
//!     v: [ 0.0, 1.5 ]
//!     radius: 20.0
//!   - x: [ 600.0, 500.0 ]
//!     radius: 5.0
//!     kind: ghost             # standard | non_colliding | ghost
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyKind, NVec2};

/// Viewer settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub width: f32,
    pub height: f32,
    pub tick_rate: f64, // fixed physics ticks per second
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            tick_rate: 60.0,
        }
    }
}

/// Physical constants and gesture tuning, see [`Parameters`]
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,
    pub mass_multiplier: f64,
    pub min_radius: f64,
    pub center: [f64; 2],
    pub center_scale: f64,
    pub center_threshold: f64,
    pub velocity_scale: f64,
    pub color_saturation_radius: f64,
    pub eps: f64,
    pub dt: f64,
    pub radius_growth_ms: f64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            G: p.G,
            mass_multiplier: p.mass_multiplier,
            min_radius: p.min_radius,
            center: [p.center.x, p.center.y],
            center_scale: p.center_scale,
            center_threshold: p.center_threshold,
            velocity_scale: p.velocity_scale,
            color_saturation_radius: p.color_saturation_radius,
            eps: p.eps,
            dt: p.dt,
            radius_growth_ms: p.radius_growth_ms,
        }
    }
}

impl From<ParametersConfig> for Parameters {
    fn from(cfg: ParametersConfig) -> Self {
        Parameters {
            G: cfg.G,
            mass_multiplier: cfg.mass_multiplier,
            min_radius: cfg.min_radius,
            center: NVec2::new(cfg.center[0], cfg.center[1]),
            center_scale: cfg.center_scale,
            center_threshold: cfg.center_threshold,
            velocity_scale: cfg.velocity_scale,
            color_saturation_radius: cfg.color_saturation_radius,
            eps: cfg.eps,
            dt: cfg.dt,
            radius_growth_ms: cfg.radius_growth_ms,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKindConfig {
    #[default]
    #[serde(rename = "standard")]
    Standard,

    #[serde(rename = "non_colliding")]
    NonColliding,

    #[serde(rename = "ghost")]
    Ghost,
}

impl From<BodyKindConfig> for BodyKind {
    fn from(kind: BodyKindConfig) -> Self {
        match kind {
            BodyKindConfig::Standard => BodyKind::Standard,
            BodyKindConfig::NonColliding => BodyKind::NonColliding,
            BodyKindConfig::Ghost => BodyKind::Ghost,
        }
    }
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // position in screen pixels
    #[serde(default)]
    pub v: [f64; 2], // velocity in pixels per tick
    pub radius: f64, // clamped up to min_radius
    #[serde(default)]
    pub kind: BodyKindConfig,
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(src: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(src)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
