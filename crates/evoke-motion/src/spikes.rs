//! Impulse regressors for high-motion volumes.

use evoke_core::models::{DocumentInfo, Predictor, PredictorKind, SdmDocument};

/// One impulse predictor per volume whose framewise displacement
/// exceeds the threshold, or `None` when every volume stays below it.
///
/// Predictors are named `Spike_<volume>` with 1-based volume numbers;
/// the red channel steps down per spike so neighbouring columns stay
/// distinguishable in a plot.
pub fn spike_document(fd: &[f64], threshold_mm: f64) -> Option<SdmDocument> {
    let spiking: Vec<usize> = fd
        .iter()
        .enumerate()
        .filter(|(_, &value)| value > threshold_mm)
        .map(|(volume, _)| volume)
        .collect();
    if spiking.is_empty() {
        return None;
    }

    let predictors: Vec<Predictor> = spiking
        .iter()
        .enumerate()
        .map(|(i, &volume)| {
            let mut values = vec![0.0; fd.len()];
            values[volume] = 1.0;
            Predictor::new(
                format!("Spike_{}", volume + 1),
                [(255 - 10 * i % 255) as u8, 0, 0],
                values,
                PredictorKind::Confound,
            )
        })
        .collect();
    let info = DocumentInfo::confounds(predictors.len(), fd.len());
    Some(SdmDocument { info, predictors })
}
