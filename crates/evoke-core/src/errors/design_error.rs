use crate::models::TimeResolution;

/// Task predictor synthesis errors.
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    #[error("interval {start}..{stop} outside run extent {extent} ({resolution})")]
    OutOfRangeInterval {
        start: f64,
        stop: f64,
        extent: f64,
        resolution: TimeResolution,
    },

    #[error("interval stop {stop} precedes start {start}")]
    InvalidInterval { start: f64, stop: f64 },

    #[error("{intervals} intervals but {weights} weights")]
    WeightCountMismatch { intervals: usize, weights: usize },

    #[error("resampled predictor has {actual} samples, expected at least {expected}")]
    ResampleLengthMismatch { expected: usize, actual: usize },

    #[error("sampling rate {sampling_rate_hz} Hz yields no samples within a {tr_ms} ms volume")]
    DegenerateSamplingRatio { sampling_rate_hz: f64, tr_ms: f64 },

    #[error("predictor '{predictor}' has non-positive maximum {max}, cannot scale to unit amplitude")]
    DegenerateMaxValue { predictor: String, max: f64 },

    #[error("predictor '{predictor}' has {actual} samples, document expects {expected}")]
    PredictorLengthMismatch {
        predictor: String,
        expected: usize,
        actual: usize,
    },

    #[error("document header declares {declared} predictors, payload has {actual}")]
    PredictorCountMismatch { declared: usize, actual: usize },

    #[error("document declares a constant predictor but the last column is not all ones")]
    MalformedConstant,

    #[error("invalid acquisition geometry: {n_volumes} volumes, TR {tr_ms} ms")]
    InvalidAcquisition { n_volumes: usize, tr_ms: f64 },
}
