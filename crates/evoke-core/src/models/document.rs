use serde::{Deserialize, Serialize};

use crate::constants::{CONSTANT_PREDICTOR_NAME, SDM_FILE_VERSION};
use crate::errors::{DesignError, EvokeResult};
use crate::models::Predictor;

/// Header metadata of a design matrix document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Format version.
    pub file_version: u32,
    /// Number of predictor columns, constant included when present.
    pub n_predictors: usize,
    /// Number of volumes (rows).
    pub n_volumes: usize,
    /// Whether the document ends with an all-ones constant column.
    pub includes_constant: bool,
    /// 1-based index of the first confound predictor.
    pub first_confound_predictor: usize,
}

impl DocumentInfo {
    /// Header for a confound-only document: no constant, confounds start
    /// at the first column.
    pub fn confounds(n_predictors: usize, n_volumes: usize) -> Self {
        Self {
            file_version: SDM_FILE_VERSION,
            n_predictors,
            n_volumes,
            includes_constant: false,
            first_confound_predictor: 1,
        }
    }
}

/// A complete design matrix: header plus ordered predictor columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdmDocument {
    pub info: DocumentInfo,
    pub predictors: Vec<Predictor>,
}

impl SdmDocument {
    /// Check the header against the predictor payload: declared counts
    /// match, every column covers every volume, and a declared constant
    /// is actually the trailing all-ones column.
    pub fn validate(&self) -> EvokeResult<()> {
        if self.info.n_predictors != self.predictors.len() {
            return Err(DesignError::PredictorCountMismatch {
                declared: self.info.n_predictors,
                actual: self.predictors.len(),
            }
            .into());
        }
        for predictor in &self.predictors {
            if predictor.len() != self.info.n_volumes {
                return Err(DesignError::PredictorLengthMismatch {
                    predictor: predictor.name.clone(),
                    expected: self.info.n_volumes,
                    actual: predictor.len(),
                }
                .into());
            }
        }
        if self.info.includes_constant {
            let constant_ok = self.predictors.last().is_some_and(|p| {
                p.name == CONSTANT_PREDICTOR_NAME && p.values.iter().all(|&v| v == 1.0)
            });
            if !constant_ok {
                return Err(DesignError::MalformedConstant.into());
            }
        }
        Ok(())
    }

    /// Borrow a predictor column by name.
    pub fn predictor(&self, name: &str) -> Option<&Predictor> {
        self.predictors.iter().find(|p| p.name == name)
    }

    pub fn n_volumes(&self) -> usize {
        self.info.n_volumes
    }

    pub fn n_predictors(&self) -> usize {
        self.predictors.len()
    }
}
