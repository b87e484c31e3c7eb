pub mod acquisition;
pub mod document;
pub mod hrf;
pub mod motion_trace;
pub mod predictor;
pub mod protocol;

pub use acquisition::Acquisition;
pub use document::{DocumentInfo, SdmDocument};
pub use hrf::{HrfKernel, HrfParams};
pub use motion_trace::MotionTrace;
pub use predictor::{Predictor, PredictorKind};
pub use protocol::{Condition, Interval, Protocol, TimeResolution};
