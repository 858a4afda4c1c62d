use serde::Deserialize;
use thiserror::Error;

use crate::footprint::CameraGeometry;
use crate::planner::{GeoPoint, Rectangle};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Service configuration. Every section is optional; an empty file gives
/// the 30°/60° camera at 100 ft over the Lausanne test area.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default = "default_camera")]
    pub camera: CameraGeometry,
    #[serde(default = "default_area")]
    pub area: Rectangle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_camera() -> CameraGeometry {
    CameraGeometry {
        vertical_half_angle_rad: 0.523599,
        horizontal_half_angle_rad: 1.0472,
        altitude_m: 30.48,
    }
}

fn default_area() -> Rectangle {
    Rectangle::new(
        GeoPoint::new(6.54853888889, 46.5196583333),
        GeoPoint::new(6.55609166667, 46.5243833333),
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig::default(),
            camera: default_camera(),
            area: default_area(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
