//! Framewise displacement over a centered, millimeter-valued trace.

use evoke_core::constants::MOTION_PARAMETER_COUNT;
use evoke_core::models::{DocumentInfo, MotionTrace, Predictor, PredictorKind, SdmDocument};
use evoke_core::stats;

/// Name of the single column in a framewise displacement document.
pub const FD_PREDICTOR_NAME: &str = "Framewise Displacement";

const FD_PREDICTOR_COLOR: [u8; 3] = [0, 0, 0];

/// Convert a rotational displacement in degrees to arc length in
/// millimeters on a sphere of the given radius, after Power et al.
/// (2012).
pub fn deg_to_mm(degrees: f64, head_radius_mm: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0 * head_radius_mm
}

/// Zero-center every parameter at its first timepoint and convert the
/// rotation rows from degrees to millimeters.
pub fn centered_mm(
    trace: &MotionTrace,
    head_radius_mm: f64,
) -> [Vec<f64>; MOTION_PARAMETER_COUNT] {
    std::array::from_fn(|parameter| {
        // A trace always covers at least two volumes.
        let row = trace.row(parameter);
        let origin = row[0];
        row.iter()
            .map(|&value| {
                let centered = value - origin;
                if parameter < 3 {
                    centered
                } else {
                    deg_to_mm(centered, head_radius_mm)
                }
            })
            .collect()
    })
}

/// Per-volume framewise displacement.
///
/// ```text
/// FD[t] = Σ_p |Δ centered_mm[p][t]|      FD[0] = 0
/// ```
///
/// Translations contribute directly in millimeters, rotations as arc
/// length on the head sphere.
pub fn framewise_displacement(trace: &MotionTrace, head_radius_mm: f64) -> Vec<f64> {
    let rows = centered_mm(trace, head_radius_mm);
    let mut fd = vec![0.0; trace.n_volumes()];
    for row in &rows {
        for (t, delta) in stats::diff_padded(row).iter().enumerate() {
            fd[t] += delta.abs();
        }
    }
    fd
}

/// Wrap a displacement series as a single-column confound document.
pub fn fd_document(fd: Vec<f64>) -> SdmDocument {
    let info = DocumentInfo::confounds(1, fd.len());
    SdmDocument {
        info,
        predictors: vec![Predictor::new(
            FD_PREDICTOR_NAME,
            FD_PREDICTOR_COLOR,
            fd,
            PredictorKind::Confound,
        )],
    }
}
