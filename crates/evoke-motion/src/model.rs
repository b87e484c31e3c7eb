//! Combined multi-regressor confound models.

use evoke_core::config::MotionModel;
use evoke_core::models::{DocumentInfo, SdmDocument};

use crate::variants::MotionVariants;

/// Stack variant families into one confound document of the requested
/// size. Twelve regressors keep the z-scored parameters and their
/// derivatives, eighteen add the squares, twenty-four add the squared
/// derivatives.
pub fn combined_model(variants: &MotionVariants, model: MotionModel) -> SdmDocument {
    let mut predictors = variants.zscored.predictors.clone();
    predictors.extend(variants.derivative.predictors.iter().cloned());
    if matches!(model, MotionModel::Params18 | MotionModel::Params24) {
        predictors.extend(variants.squared.predictors.iter().cloned());
    }
    if model == MotionModel::Params24 {
        predictors.extend(variants.derivative_squared.predictors.iter().cloned());
    }
    let info = DocumentInfo::confounds(predictors.len(), variants.zscored.info.n_volumes);
    SdmDocument { info, predictors }
}
