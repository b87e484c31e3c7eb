//! Default values for all configuration options.

/// High-resolution sampling rate for rasterization and convolution (Hz).
pub const DEFAULT_SAMPLING_RATE_HZ: f64 = 100.0;

/// Canonical two-gamma HRF shape. Times in seconds.
pub const DEFAULT_HRF_PEAK_DELAY_S: f64 = 6.0;
pub const DEFAULT_HRF_UNDERSHOOT_DELAY_S: f64 = 16.0;
pub const DEFAULT_HRF_PEAK_DISPERSION: f64 = 1.0;
pub const DEFAULT_HRF_UNDERSHOOT_DISPERSION: f64 = 1.0;
pub const DEFAULT_HRF_PEAK_UNDERSHOOT_RATIO: f64 = 6.0;
pub const DEFAULT_HRF_ONSET_S: f64 = 0.0;
pub const DEFAULT_HRF_LENGTH_S: f64 = 32.0;

/// Kernel normalization flags.
pub const DEFAULT_NORMALIZE_HRF_BY_SUM: bool = true;
pub const DEFAULT_SCALE_HRF_TO_UNIT_PEAK: bool = false;

/// Build parametric predictors when the protocol carries varying weights.
pub const DEFAULT_PARAMETRIC_PREDICTORS: bool = true;

/// Divide each task predictor by its maximum after downsampling.
pub const DEFAULT_SCALE_UNIT_AMPLITUDE: bool = false;

/// Framewise displacement above which a volume gets a spike regressor (mm).
pub const DEFAULT_FD_SPIKE_THRESHOLD_MM: f64 = 0.2;

/// Sphere radius for converting rotations to arc displacement (mm).
pub const DEFAULT_HEAD_RADIUS_MM: f64 = 50.0;
