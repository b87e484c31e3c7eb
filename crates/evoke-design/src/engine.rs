use tracing::{debug, info, warn};

use evoke_core::config::{DesignConfig, RestCondition};
use evoke_core::errors::{DesignError, EvokeError, EvokeResult};
use evoke_core::models::{
    Acquisition, Condition, HrfKernel, Predictor, PredictorKind, Protocol, SdmDocument,
};
use evoke_core::stats;

use crate::{assembler, boxcar, hrf, resample};

/// A condition the engine dropped, with the failure that caused it.
#[derive(Debug)]
pub struct SkippedCondition {
    pub condition: String,
    pub reason: EvokeError,
}

/// Result of a design run: the assembled document plus any conditions
/// dropped along the way.
#[derive(Debug)]
pub struct DesignOutcome {
    pub document: SdmDocument,
    pub skipped: Vec<SkippedCondition>,
}

/// Task design engine: stimulation protocol in, design matrix document
/// out.
pub struct DesignEngine {
    config: DesignConfig,
}

impl DesignEngine {
    pub fn new(config: DesignConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    /// Synthesize the task design matrix for one run.
    ///
    /// The HRF kernel is built once and shared by every condition.
    /// Conditions with malformed or out-of-range intervals are skipped
    /// and reported in the outcome; any other failure aborts the run.
    pub fn build_design(
        &self,
        protocol: &Protocol,
        acquisition: &Acquisition,
    ) -> EvokeResult<DesignOutcome> {
        acquisition.validate()?;
        let samples_per_volume = acquisition.samples_per_volume(self.config.sampling_rate_hz)?;

        let kernel = hrf::build_hrf(
            &self.config.hrf,
            self.config.sampling_rate_hz,
            self.config.scale_hrf_to_unit_peak,
            self.config.normalize_hrf_by_sum,
        );
        debug!(
            kernel_len = kernel.len(),
            samples_per_volume, "built HRF kernel"
        );

        let mut predictors = Vec::new();
        let mut skipped = Vec::new();
        for condition in self.active_conditions(protocol) {
            match self.condition_predictors(condition, protocol, &kernel, acquisition) {
                Ok(mut built) => predictors.append(&mut built),
                Err(reason) if is_condition_local(&reason) => {
                    warn!(condition = %condition.name, %reason, "skipping condition");
                    skipped.push(SkippedCondition {
                        condition: condition.name.clone(),
                        reason,
                    });
                }
                Err(other) => return Err(other),
            }
        }

        let document = assembler::assemble(
            predictors,
            acquisition.n_volumes,
            self.config.scale_unit_amplitude,
        )?;
        info!(
            n_predictors = document.info.n_predictors,
            n_volumes = document.info.n_volumes,
            skipped = skipped.len(),
            "assembled design matrix"
        );
        Ok(DesignOutcome { document, skipped })
    }

    /// The protocol's conditions minus a configured rest condition.
    fn active_conditions<'a>(&self, protocol: &'a Protocol) -> &'a [Condition] {
        let conditions = protocol.conditions.as_slice();
        match self.config.rest_condition {
            RestCondition::None => conditions,
            RestCondition::First => match conditions.split_first() {
                Some((rest, remaining)) => {
                    debug!(dropped = %rest.name, "dropping rest condition");
                    remaining
                }
                None => conditions,
            },
            RestCondition::Last => match conditions.split_last() {
                Some((rest, remaining)) => {
                    debug!(dropped = %rest.name, "dropping rest condition");
                    remaining
                }
                None => conditions,
            },
        }
    }

    /// Main predictor for a condition, plus a parametric sibling when
    /// the protocol carries varying weights and config enables them.
    fn condition_predictors(
        &self,
        condition: &Condition,
        protocol: &Protocol,
        kernel: &HrfKernel,
        acquisition: &Acquisition,
    ) -> EvokeResult<Vec<Predictor>> {
        let dense = boxcar::rasterize(
            &condition.intervals,
            None,
            protocol.resolution,
            self.config.sampling_rate_hz,
            acquisition,
        )?;
        let main = resample::convolve_and_resample(&dense, kernel, acquisition)?;

        match self.parametric_values(condition, protocol, kernel, acquisition)? {
            Some(parametric) => Ok(vec![
                Predictor::new(
                    format!("{} [Main]", condition.name),
                    condition.color,
                    main,
                    PredictorKind::Task,
                ),
                Predictor::new(
                    format!("{} [Parametric]", condition.name),
                    condition.color,
                    parametric,
                    PredictorKind::Parametric,
                ),
            ]),
            None => Ok(vec![Predictor::new(
                condition.name.clone(),
                condition.color,
                main,
                PredictorKind::Task,
            )]),
        }
    }

    fn parametric_values(
        &self,
        condition: &Condition,
        protocol: &Protocol,
        kernel: &HrfKernel,
        acquisition: &Acquisition,
    ) -> EvokeResult<Option<Vec<f64>>> {
        if !(protocol.parametric_weights
            && self.config.parametric_predictors
            && condition.has_varying_weights())
        {
            return Ok(None);
        }
        // has_varying_weights guarantees a full weight vector.
        let weights = condition.weights().unwrap_or_default();
        let scaled = stats::standardize(&weights, self.config.weight_scaling)?;
        let dense = boxcar::rasterize(
            &condition.intervals,
            Some(&scaled),
            protocol.resolution,
            self.config.sampling_rate_hz,
            acquisition,
        )?;
        let values = resample::convolve_and_resample(&dense, kernel, acquisition)?;
        Ok(Some(values))
    }
}

impl Default for DesignEngine {
    fn default() -> Self {
        Self::new(DesignConfig::default())
    }
}

/// Failures that spoil one condition without invalidating the run.
fn is_condition_local(error: &EvokeError) -> bool {
    matches!(
        error,
        EvokeError::Design(DesignError::OutOfRangeInterval { .. })
            | EvokeError::Design(DesignError::InvalidInterval { .. })
    )
}
