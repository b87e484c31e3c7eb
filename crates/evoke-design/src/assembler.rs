//! Final document assembly: amplitude scaling, constant column, header.

use evoke_core::constants::{CONSTANT_PREDICTOR_COLOR, CONSTANT_PREDICTOR_NAME, SDM_FILE_VERSION};
use evoke_core::errors::{DesignError, EvokeResult};
use evoke_core::models::{DocumentInfo, Predictor, PredictorKind, SdmDocument};

/// Assemble task predictors into a complete design matrix document.
///
/// When requested, every non-parametric predictor is divided by its own
/// maximum; parametric columns keep their scale. The constant is
/// appended last and counted by the header, whose 1-based
/// `first_confound_predictor` points at it.
pub fn assemble(
    mut predictors: Vec<Predictor>,
    n_volumes: usize,
    scale_unit_amplitude: bool,
) -> EvokeResult<SdmDocument> {
    for predictor in &predictors {
        if predictor.len() != n_volumes {
            return Err(DesignError::PredictorLengthMismatch {
                predictor: predictor.name.clone(),
                expected: n_volumes,
                actual: predictor.len(),
            }
            .into());
        }
    }

    if scale_unit_amplitude {
        for predictor in &mut predictors {
            if predictor.kind == PredictorKind::Parametric {
                continue;
            }
            let max = predictor
                .values
                .iter()
                .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
            if !(max > 0.0) {
                return Err(DesignError::DegenerateMaxValue {
                    predictor: predictor.name.clone(),
                    max,
                }
                .into());
            }
            for value in &mut predictor.values {
                *value /= max;
            }
        }
    }

    predictors.push(Predictor::new(
        CONSTANT_PREDICTOR_NAME,
        CONSTANT_PREDICTOR_COLOR,
        vec![1.0; n_volumes],
        PredictorKind::Constant,
    ));

    let n_predictors = predictors.len();
    let document = SdmDocument {
        info: DocumentInfo {
            file_version: SDM_FILE_VERSION,
            n_predictors,
            n_volumes,
            includes_constant: true,
            first_confound_predictor: n_predictors,
        },
        predictors,
    };
    document.validate()?;
    Ok(document)
}
