use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Two-gamma HRF shape parameters. Times in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HrfParams {
    /// Delay of the response peak relative to onset.
    pub peak_delay_s: f64,
    /// Delay of the undershoot relative to onset.
    pub undershoot_delay_s: f64,
    /// Dispersion of the response gamma.
    pub peak_dispersion: f64,
    /// Dispersion of the undershoot gamma.
    pub undershoot_dispersion: f64,
    /// Amplitude ratio of response to undershoot.
    pub peak_undershoot_ratio: f64,
    /// Onset shift of the kernel.
    pub onset_s: f64,
    /// Kernel support length.
    pub length_s: f64,
}

impl Default for HrfParams {
    fn default() -> Self {
        Self {
            peak_delay_s: defaults::DEFAULT_HRF_PEAK_DELAY_S,
            undershoot_delay_s: defaults::DEFAULT_HRF_UNDERSHOOT_DELAY_S,
            peak_dispersion: defaults::DEFAULT_HRF_PEAK_DISPERSION,
            undershoot_dispersion: defaults::DEFAULT_HRF_UNDERSHOOT_DISPERSION,
            peak_undershoot_ratio: defaults::DEFAULT_HRF_PEAK_UNDERSHOOT_RATIO,
            onset_s: defaults::DEFAULT_HRF_ONSET_S,
            length_s: defaults::DEFAULT_HRF_LENGTH_S,
        }
    }
}

/// A sampled HRF kernel. Immutable once built; one kernel is shared
/// read-only by every condition of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrfKernel {
    samples: Vec<f64>,
    sampling_rate_hz: f64,
}

impl HrfKernel {
    pub fn new(samples: Vec<f64>, sampling_rate_hz: f64) -> Self {
        Self {
            samples,
            sampling_rate_hz,
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sampling_rate_hz(&self) -> f64 {
        self.sampling_rate_hz
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
