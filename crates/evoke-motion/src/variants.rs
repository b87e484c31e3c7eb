//! Z-scored variant families derived from a motion trace.
//!
//! Each family standardizes one transform of the six parameter rows:
//! the raw trace, its first difference, or their squares. Every family
//! yields a six-column confound document whose predictor names carry
//! the family suffix.

use evoke_core::constants::MOTION_PARAMETER_COUNT;
use evoke_core::errors::EvokeResult;
use evoke_core::models::{DocumentInfo, MotionTrace, Predictor, PredictorKind, SdmDocument};
use evoke_core::stats;

/// One of the four derived confound families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantFamily {
    /// Z-scored parameters.
    ZScored,
    /// Z-scored first differences.
    Derivative,
    /// Z-scored squared parameters.
    Squared,
    /// Z-scored squared first differences.
    DerivativeSquared,
}

impl VariantFamily {
    /// Suffix appended to the source parameter name, leading space
    /// included.
    pub fn suffix(self) -> &'static str {
        match self {
            VariantFamily::ZScored => " zscored",
            VariantFamily::Derivative => " derivative",
            VariantFamily::Squared => " squared",
            VariantFamily::DerivativeSquared => " derivative_squared",
        }
    }

    fn transform(self, row: &[f64]) -> EvokeResult<Vec<f64>> {
        match self {
            VariantFamily::ZScored => stats::zscore(row),
            VariantFamily::Derivative => stats::zscore(&stats::diff_padded(row)),
            VariantFamily::Squared => stats::zscore(&stats::square(row)),
            VariantFamily::DerivativeSquared => {
                stats::zscore(&stats::square(&stats::diff_padded(row)))
            }
        }
    }
}

/// Derive one family as a six-column confound document.
///
/// A parameter whose transformed row is constant cannot be z-scored
/// and fails the whole family with `ZeroVariance`.
pub fn variant_document(trace: &MotionTrace, family: VariantFamily) -> EvokeResult<SdmDocument> {
    let mut predictors = Vec::with_capacity(MOTION_PARAMETER_COUNT);
    for parameter in 0..MOTION_PARAMETER_COUNT {
        let values = family.transform(trace.row(parameter))?;
        predictors.push(Predictor::new(
            format!("{}{}", trace.name(parameter), family.suffix()),
            trace.color(parameter),
            values,
            PredictorKind::Confound,
        ));
    }
    let info = DocumentInfo::confounds(predictors.len(), trace.n_volumes());
    Ok(SdmDocument { info, predictors })
}

/// The four variant documents of one trace.
#[derive(Debug, Clone)]
pub struct MotionVariants {
    pub zscored: SdmDocument,
    pub derivative: SdmDocument,
    pub squared: SdmDocument,
    pub derivative_squared: SdmDocument,
}

/// Build all four families.
pub fn build(trace: &MotionTrace) -> EvokeResult<MotionVariants> {
    Ok(MotionVariants {
        zscored: variant_document(trace, VariantFamily::ZScored)?,
        derivative: variant_document(trace, VariantFamily::Derivative)?,
        squared: variant_document(trace, VariantFamily::Squared)?,
        derivative_squared: variant_document(trace, VariantFamily::DerivativeSquared)?,
    })
}
