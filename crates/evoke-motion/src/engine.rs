//! Motion confound orchestration.

use tracing::{debug, info, warn};

use evoke_core::config::MotionConfig;
use evoke_core::errors::EvokeResult;
use evoke_core::models::{MotionTrace, SdmDocument};

use crate::displacement;
use crate::model;
use crate::spikes;
use crate::summary::{self, MotionSeverity, MotionSummary};
use crate::variants::{self, MotionVariants};

/// Everything derived from one realignment document.
#[derive(Debug, Clone)]
pub struct MotionOutcome {
    /// The four z-scored variant documents.
    pub variants: MotionVariants,
    /// Combined confound model of the configured size.
    pub model: SdmDocument,
    /// Single-column framewise displacement document.
    pub framewise_displacement: SdmDocument,
    /// Impulse regressors for spiking volumes, when any exist.
    pub spikes: Option<SdmDocument>,
    /// Run-level quality measures.
    pub summary: MotionSummary,
}

/// Derives the full set of confound products from a realignment
/// document.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    config: MotionConfig,
}

impl MotionEngine {
    pub fn new(config: MotionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Derive variants, the combined model, framewise displacement,
    /// spike regressors, and the quality summary for one run.
    ///
    /// The input document must lead with the six rigid-body parameter
    /// columns produced by motion correction, translations before
    /// rotations.
    pub fn process(&self, document: &SdmDocument) -> EvokeResult<MotionOutcome> {
        let trace = MotionTrace::from_document(document)?;
        debug!(
            n_volumes = trace.n_volumes(),
            model = self.config.model.n_predictors(),
            threshold_mm = self.config.fd_spike_threshold_mm,
            "deriving motion confounds"
        );

        let variants = variants::build(&trace)?;
        let model = model::combined_model(&variants, self.config.model);
        let fd = displacement::framewise_displacement(&trace, self.config.head_radius_mm);
        let spike_document = spikes::spike_document(&fd, self.config.fd_spike_threshold_mm);
        let summary = summary::summarize(&trace, &fd, &self.config)?;

        if summary.severity == MotionSeverity::High {
            warn!(
                rms_mm = summary.rms_mm,
                max_motion_mm = summary.max_motion_mm,
                "high motion run"
            );
        }
        info!(
            mean_fd_mm = summary.mean_fd_mm,
            max_motion_mm = summary.max_motion_mm,
            rms_mm = summary.rms_mm,
            spike_count = summary.spike_count,
            severity = %summary.severity,
            "motion summary"
        );

        Ok(MotionOutcome {
            variants,
            model,
            framewise_displacement: displacement::fd_document(fd),
            spikes: spike_document,
            summary,
        })
    }
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}
