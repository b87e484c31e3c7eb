use serde::{Deserialize, Serialize};

use crate::constants::MOTION_PARAMETER_COUNT;
use crate::errors::{EvokeResult, MotionError};
use crate::models::SdmDocument;

/// Rigid-body realignment parameters for one run.
///
/// Rows 0..3 are translations in millimeters, rows 3..6 rotations in
/// degrees, one sample per volume. The trace is never mutated: every
/// derived confound is a fresh predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionTrace {
    names: [String; MOTION_PARAMETER_COUNT],
    colors: [[u8; 3]; MOTION_PARAMETER_COUNT],
    rows: [Vec<f64>; MOTION_PARAMETER_COUNT],
}

impl MotionTrace {
    /// Build a trace from named parameter rows, all of equal length and
    /// covering at least two volumes.
    pub fn new(
        names: [String; MOTION_PARAMETER_COUNT],
        colors: [[u8; 3]; MOTION_PARAMETER_COUNT],
        rows: [Vec<f64>; MOTION_PARAMETER_COUNT],
    ) -> EvokeResult<Self> {
        let n_volumes = rows[0].len();
        if n_volumes < 2 {
            return Err(MotionError::TraceTooShort { volumes: n_volumes }.into());
        }
        for (parameter, row) in rows.iter().enumerate() {
            if row.len() != n_volumes {
                return Err(MotionError::RaggedTrace {
                    parameter,
                    expected: n_volumes,
                    actual: row.len(),
                }
                .into());
            }
        }
        Ok(Self {
            names,
            colors,
            rows,
        })
    }

    /// Take the first six predictors of a realignment document as
    /// parameter rows.
    pub fn from_document(document: &SdmDocument) -> EvokeResult<Self> {
        if document.predictors.len() < MOTION_PARAMETER_COUNT {
            return Err(MotionError::NotAMotionDocument {
                predictors: document.predictors.len(),
            }
            .into());
        }
        let names = std::array::from_fn(|i| document.predictors[i].name.clone());
        let colors = std::array::from_fn(|i| document.predictors[i].color);
        let rows = std::array::from_fn(|i| document.predictors[i].values.clone());
        Self::new(names, colors, rows)
    }

    pub fn n_volumes(&self) -> usize {
        self.rows[0].len()
    }

    pub fn names(&self) -> &[String; MOTION_PARAMETER_COUNT] {
        &self.names
    }

    pub fn name(&self, parameter: usize) -> &str {
        &self.names[parameter]
    }

    pub fn color(&self, parameter: usize) -> [u8; 3] {
        self.colors[parameter]
    }

    pub fn rows(&self) -> &[Vec<f64>; MOTION_PARAMETER_COUNT] {
        &self.rows
    }

    pub fn row(&self, parameter: usize) -> &[f64] {
        &self.rows[parameter]
    }
}
