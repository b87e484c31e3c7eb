//! # evoke-core
//!
//! Foundation crate for the Evoke predictor synthesis engines.
//! Defines the shared models, errors, config, constants, and the
//! descriptive statistics used across the workspace.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod stats;

// Re-export the most commonly used types at the crate root.
pub use config::{DesignConfig, EvokeConfig, MotionConfig, MotionModel, RestCondition};
pub use errors::{EvokeError, EvokeResult};
pub use models::{
    Acquisition, Condition, DocumentInfo, HrfKernel, HrfParams, Interval, MotionTrace, Predictor,
    PredictorKind, Protocol, SdmDocument, TimeResolution,
};
pub use stats::WeightScaling;
