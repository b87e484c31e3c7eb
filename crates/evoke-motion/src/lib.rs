//! # evoke-motion
//!
//! Motion confound derivation from rigid-body realignment parameters:
//! z-scored variant families, combined 12/18/24-regressor models,
//! framewise displacement, spike indicator columns, and a run-level
//! quality summary.

pub mod displacement;
pub mod engine;
pub mod model;
pub mod spikes;
pub mod summary;
pub mod variants;

pub use engine::{MotionEngine, MotionOutcome};
pub use summary::{MotionSeverity, MotionSummary};
pub use variants::MotionVariants;
