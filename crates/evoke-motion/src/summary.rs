//! Run-level motion quality measures.

use std::fmt;

use evoke_core::config::MotionConfig;
use evoke_core::errors::EvokeResult;
use evoke_core::models::MotionTrace;
use evoke_core::stats;

use crate::displacement;

/// Severity band of a run's root-mean-square displacement, following
/// the cutoffs of Ciric et al. (2017): below 0.2 mm low, below 0.5 mm
/// moderate, anything above high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionSeverity {
    Low,
    Moderate,
    High,
}

impl MotionSeverity {
    pub fn from_rms(rms_mm: f64) -> Self {
        if rms_mm < 0.2 {
            MotionSeverity::Low
        } else if rms_mm < 0.5 {
            MotionSeverity::Moderate
        } else {
            MotionSeverity::High
        }
    }
}

impl fmt::Display for MotionSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MotionSeverity::Low => "low",
            MotionSeverity::Moderate => "moderate",
            MotionSeverity::High => "high",
        };
        f.write_str(label)
    }
}

/// Aggregate quality measures of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSummary {
    /// Mean over volumes of the euclidean displacement across all six
    /// parameters, after centering, millimeter conversion, and linear
    /// detrending.
    pub rms_mm: f64,
    /// Largest absolute centered displacement of any parameter (mm).
    pub max_motion_mm: f64,
    /// Mean framewise displacement (mm).
    pub mean_fd_mm: f64,
    /// Volumes whose displacement exceeds the spike threshold.
    pub spike_count: usize,
    pub severity: MotionSeverity,
}

/// Summarize one run from its trace and precomputed framewise
/// displacement.
pub fn summarize(
    trace: &MotionTrace,
    fd: &[f64],
    config: &MotionConfig,
) -> EvokeResult<MotionSummary> {
    let centered = displacement::centered_mm(trace, config.head_radius_mm);
    let max_motion_mm = centered
        .iter()
        .flat_map(|row| row.iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));

    let mut sum_squares = vec![0.0; trace.n_volumes()];
    for row in &centered {
        let detrended = stats::detrend_linear(row)?;
        for (t, value) in detrended.iter().enumerate() {
            sum_squares[t] += value * value;
        }
    }
    let rms_mm =
        sum_squares.iter().map(|s| s.sqrt()).sum::<f64>() / trace.n_volumes() as f64;

    let mean_fd_mm = stats::mean(fd)?;
    let spike_count = fd
        .iter()
        .filter(|&&value| value > config.fd_spike_threshold_mm)
        .count();

    Ok(MotionSummary {
        rms_mm,
        max_motion_mm,
        mean_fd_mm,
        spike_count,
        severity: MotionSeverity::from_rms(rms_mm),
    })
}
