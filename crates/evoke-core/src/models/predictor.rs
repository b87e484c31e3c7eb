use serde::{Deserialize, Serialize};

/// Role of a predictor column within a design matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictorKind {
    /// HRF-convolved stimulus response.
    Task,
    /// Weight-modulated counterpart of a task predictor.
    Parametric,
    /// Nuisance regressor derived from realignment parameters.
    Confound,
    /// All-ones intercept column.
    Constant,
}

/// A single named column of a design matrix, one value per volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predictor {
    /// Display name.
    pub name: String,
    /// Display color (RGB).
    pub color: [u8; 3],
    /// Sample values, one per volume.
    pub values: Vec<f64>,
    /// Column role, consulted by the assembler and the document reader.
    pub kind: PredictorKind,
}

impl Predictor {
    pub fn new(
        name: impl Into<String>,
        color: [u8; 3],
        values: Vec<f64>,
        kind: PredictorKind,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            values,
            kind,
        }
    }

    /// Number of volumes covered by this predictor.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
