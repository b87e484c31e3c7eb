/// Standardization and descriptive-statistics errors.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("zero variance: cannot z-score a constant vector")]
    ZeroVariance,

    #[error("statistic of an empty vector")]
    EmptyInput,
}
