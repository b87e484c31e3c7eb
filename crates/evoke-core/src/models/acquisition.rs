use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, EvokeResult};

/// Temporal geometry of a functional run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Acquisition {
    /// Number of volumes in the run.
    pub n_volumes: usize,
    /// Repetition time in milliseconds.
    pub tr_ms: f64,
}

impl Acquisition {
    pub fn new(n_volumes: usize, tr_ms: f64) -> Self {
        Self { n_volumes, tr_ms }
    }

    /// Reject empty or non-positive geometry.
    pub fn validate(&self) -> EvokeResult<()> {
        if self.n_volumes == 0 || !(self.tr_ms > 0.0) {
            return Err(DesignError::InvalidAcquisition {
                n_volumes: self.n_volumes,
                tr_ms: self.tr_ms,
            }
            .into());
        }
        Ok(())
    }

    /// Run duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.n_volumes as f64 * self.tr_ms
    }

    /// High-resolution samples per volume at the given sampling rate.
    /// This is the decimation factor of the downsampling stage.
    pub fn samples_per_volume(&self, sampling_rate_hz: f64) -> EvokeResult<usize> {
        let per_volume = (sampling_rate_hz * self.tr_ms / 1000.0).round() as usize;
        if per_volume == 0 {
            return Err(DesignError::DegenerateSamplingRatio {
                sampling_rate_hz,
                tr_ms: self.tr_ms,
            }
            .into());
        }
        Ok(per_volume)
    }

    /// Length of the high-resolution raster covering the whole run.
    pub fn raster_len(&self, sampling_rate_hz: f64) -> usize {
        (self.duration_ms() / 1000.0 * sampling_rate_hz).round() as usize
    }
}
