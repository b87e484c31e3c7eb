/// Evoke system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File format version written to and accepted from SDM headers.
pub const SDM_FILE_VERSION: u32 = 1;

/// Number of rigid-body realignment parameters in a motion document.
pub const MOTION_PARAMETER_COUNT: usize = 6;

/// Name of the constant predictor appended to task design matrices.
pub const CONSTANT_PREDICTOR_NAME: &str = "Constant";

/// Color of the constant predictor.
pub const CONSTANT_PREDICTOR_COLOR: [u8; 3] = [255, 255, 255];
