pub mod design_error;
pub mod format_error;
pub mod motion_error;
pub mod stats_error;

pub use design_error::DesignError;
pub use format_error::FormatError;
pub use motion_error::MotionError;
pub use stats_error::StatsError;

/// Top-level error aggregating all subsystem failures.
#[derive(Debug, thiserror::Error)]
pub enum EvokeError {
    #[error(transparent)]
    Design(#[from] DesignError),

    #[error(transparent)]
    Motion(#[from] MotionError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias used by all public fallible operations.
pub type EvokeResult<T> = Result<T, EvokeError>;
