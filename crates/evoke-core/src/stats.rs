//! Descriptive statistics over plain slices.
//!
//! All moments use the population convention (n in the denominator),
//! matching the realignment tooling this workspace interoperates with.

use serde::{Deserialize, Serialize};

use crate::errors::{EvokeResult, StatsError};

/// Standardization applied to a weight vector, serialized as its numeric
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum WeightScaling {
    /// Use weights as given.
    #[default]
    Raw,
    /// Subtract the mean.
    Demeaned,
    /// Subtract the mean and divide by the standard deviation.
    ZScored,
}

impl From<WeightScaling> for u8 {
    fn from(scaling: WeightScaling) -> Self {
        match scaling {
            WeightScaling::Raw => 0,
            WeightScaling::Demeaned => 1,
            WeightScaling::ZScored => 2,
        }
    }
}

impl TryFrom<u8> for WeightScaling {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WeightScaling::Raw),
            1 => Ok(WeightScaling::Demeaned),
            2 => Ok(WeightScaling::ZScored),
            other => Err(format!("weight scaling must be 0, 1, or 2, got {other}")),
        }
    }
}

/// Apply the requested standardization to a weight vector.
pub fn standardize(values: &[f64], scaling: WeightScaling) -> EvokeResult<Vec<f64>> {
    match scaling {
        WeightScaling::Raw => Ok(values.to_vec()),
        WeightScaling::Demeaned => demean(values),
        WeightScaling::ZScored => zscore(values),
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> EvokeResult<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput.into());
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation.
pub fn std_pop(values: &[f64]) -> EvokeResult<f64> {
    let center = mean(values)?;
    let variance =
        values.iter().map(|v| (v - center).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// Subtract the mean.
pub fn demean(values: &[f64]) -> EvokeResult<Vec<f64>> {
    let center = mean(values)?;
    Ok(values.iter().map(|v| v - center).collect())
}

/// Subtract the mean and divide by the population standard deviation.
pub fn zscore(values: &[f64]) -> EvokeResult<Vec<f64>> {
    let center = mean(values)?;
    let spread = std_pop(values)?;
    if spread == 0.0 {
        return Err(StatsError::ZeroVariance.into());
    }
    Ok(values.iter().map(|v| (v - center) / spread).collect())
}

/// Element-wise square.
pub fn square(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v * v).collect()
}

/// First difference, left-padded with zero to keep the input length.
pub fn diff_padded(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(values.len());
    out.push(0.0);
    out.extend(values.windows(2).map(|pair| pair[1] - pair[0]));
    out
}

/// Remove the least-squares line fitted over sample indices.
pub fn detrend_linear(values: &[f64]) -> EvokeResult<Vec<f64>> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput.into());
    }
    if values.len() == 1 {
        return Ok(vec![0.0]);
    }
    let v_mean = mean(values)?;
    let t_mean = (values.len() as f64 - 1.0) / 2.0;
    let mut covariance = 0.0;
    let mut t_variance = 0.0;
    for (t, v) in values.iter().enumerate() {
        let dt = t as f64 - t_mean;
        covariance += dt * (v - v_mean);
        t_variance += dt * dt;
    }
    let slope = covariance / t_variance;
    let intercept = v_mean - slope * t_mean;
    Ok(values
        .iter()
        .enumerate()
        .map(|(t, v)| v - (intercept + slope * t as f64))
        .collect())
}
