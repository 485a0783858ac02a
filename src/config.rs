use crate::{bolt::geometry::Orientation, error::BoltError};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// The highest render rate a config may ask for.
pub const MAX_FPS: u32 = 240;

/// The initial parameters of a bolt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct BoltConfig {
    /// The axis the bolt travels along.
    #[serde(default)]
    pub orientation: Orientation,

    /// The number of jittered points between the two ends.
    #[serde(default = "default_branch_points")]
    pub branch_points: u32,

    /// The percentage of the cross axis the bolt may spread over.
    #[serde(default = "default_spread_percent")]
    pub spread_percent: f64,

    /// How many times per second a new bolt is drawn.
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl BoltConfig {
    /// Load and validate a config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BoltError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a config from YAML.
    pub fn from_yaml(contents: &str) -> Result<Self, BoltError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BoltError> {
        if self.branch_points == 0 {
            return Err(BoltError::InvalidConfig("branch_points must be at least 1".into()));
        }
        if !self.spread_percent.is_finite() || !(0.0..=100.0).contains(&self.spread_percent) {
            return Err(BoltError::InvalidConfig(format!(
                "spread_percent must be between 0 and 100, got {}",
                self.spread_percent
            )));
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(BoltError::InvalidConfig(format!("fps must be between 1 and {MAX_FPS}, got {}", self.fps)));
        }
        Ok(())
    }
}

impl Default for BoltConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            branch_points: default_branch_points(),
            spread_percent: default_spread_percent(),
            fps: default_fps(),
        }
    }
}

fn default_branch_points() -> u32 {
    10
}

fn default_spread_percent() -> f64 {
    35.0
}

fn default_fps() -> u32 {
    25
}
