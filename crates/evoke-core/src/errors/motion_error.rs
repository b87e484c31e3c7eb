/// Motion confound generation errors.
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    #[error("motion document has {predictors} predictors, need at least 6")]
    NotAMotionDocument { predictors: usize },

    #[error("motion trace has {volumes} volumes, need at least 2")]
    TraceTooShort { volumes: usize },

    #[error("motion parameter {parameter} has {actual} samples, expected {expected}")]
    RaggedTrace {
        parameter: usize,
        expected: usize,
        actual: usize,
    },
}
