use serde::{Deserialize, Serialize};

use super::defaults;

/// Motion confound configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Combined confound model size.
    pub model: MotionModel,
    /// Framewise displacement above which a volume gets a spike regressor (mm).
    pub fd_spike_threshold_mm: f64,
    /// Sphere radius for converting rotations to arc displacement (mm).
    pub head_radius_mm: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            model: MotionModel::default(),
            fd_spike_threshold_mm: defaults::DEFAULT_FD_SPIKE_THRESHOLD_MM,
            head_radius_mm: defaults::DEFAULT_HEAD_RADIUS_MM,
        }
    }
}

/// Size of the combined motion confound model, serialized as its
/// predictor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum MotionModel {
    /// Z-scored parameters plus their temporal derivatives.
    #[default]
    Params12,
    /// Params12 plus squared parameters.
    Params18,
    /// Params18 plus squared derivatives.
    Params24,
}

impl MotionModel {
    /// Number of confound predictors in this model.
    pub fn n_predictors(self) -> usize {
        match self {
            MotionModel::Params12 => 12,
            MotionModel::Params18 => 18,
            MotionModel::Params24 => 24,
        }
    }
}

impl From<MotionModel> for u8 {
    fn from(model: MotionModel) -> Self {
        model.n_predictors() as u8
    }
}

impl TryFrom<u8> for MotionModel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(MotionModel::Params12),
            18 => Ok(MotionModel::Params18),
            24 => Ok(MotionModel::Params24),
            other => Err(format!("motion model must be 12, 18, or 24, got {other}")),
        }
    }
}
