//! # evoke-design
//!
//! Task-evoked predictor synthesis: two-gamma HRF kernel construction,
//! interval rasterization, convolution with polyphase downsampling, and
//! design matrix assembly.

pub mod assembler;
pub mod boxcar;
pub mod engine;
pub mod hrf;
pub mod resample;

pub use engine::{DesignEngine, DesignOutcome, SkippedCondition};
