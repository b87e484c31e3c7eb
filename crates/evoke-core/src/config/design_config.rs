use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::HrfParams;
use crate::stats::WeightScaling;

/// Task predictor synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    /// High-resolution sampling rate for rasterization and convolution (Hz).
    pub sampling_rate_hz: f64,
    /// Divide the kernel by its sum when the sum is above the stability floor.
    pub normalize_hrf_by_sum: bool,
    /// Scale the kernel so its peak magnitude is 1.
    pub scale_hrf_to_unit_peak: bool,
    /// Build parametric predictors when the protocol carries varying weights.
    pub parametric_predictors: bool,
    /// Standardization applied to parametric weights before rasterization.
    pub weight_scaling: WeightScaling,
    /// Divide each task predictor by its maximum after downsampling.
    pub scale_unit_amplitude: bool,
    /// Rest condition to drop from the protocol before synthesis.
    pub rest_condition: RestCondition,
    /// Two-gamma HRF shape parameters.
    pub hrf: HrfParams,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            sampling_rate_hz: defaults::DEFAULT_SAMPLING_RATE_HZ,
            normalize_hrf_by_sum: defaults::DEFAULT_NORMALIZE_HRF_BY_SUM,
            scale_hrf_to_unit_peak: defaults::DEFAULT_SCALE_HRF_TO_UNIT_PEAK,
            parametric_predictors: defaults::DEFAULT_PARAMETRIC_PREDICTORS,
            weight_scaling: WeightScaling::default(),
            scale_unit_amplitude: defaults::DEFAULT_SCALE_UNIT_AMPLITUDE,
            rest_condition: RestCondition::default(),
            hrf: HrfParams::default(),
        }
    }
}

/// Position of a rest condition to strip from the protocol before synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RestCondition {
    /// Keep all conditions.
    #[default]
    None,
    /// Drop the first condition.
    First,
    /// Drop the last condition.
    Last,
}
