pub mod defaults;
pub mod design_config;
pub mod motion_config;

pub use design_config::{DesignConfig, RestCondition};
pub use motion_config::{MotionConfig, MotionModel};

use serde::{Deserialize, Serialize};

use crate::errors::EvokeResult;

/// Top-level configuration for the predictor synthesis engines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvokeConfig {
    pub design: DesignConfig,
    pub motion: MotionConfig,
}

impl EvokeConfig {
    /// Parse a TOML document, filling unspecified options with defaults.
    pub fn from_toml(text: &str) -> EvokeResult<Self> {
        Ok(toml::from_str(text)?)
    }
}
