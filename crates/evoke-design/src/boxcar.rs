//! Interval rasterization onto the high-resolution sample grid.

use evoke_core::errors::{DesignError, EvokeResult};
use evoke_core::models::{Acquisition, Interval, TimeResolution};

/// Rasterize stimulation intervals as a dense boxcar at the given
/// sampling rate.
///
/// Millisecond intervals are 0-based times. Volume intervals are 1-based
/// indices whose start edge is pulled back by one TR, so volume 1 begins
/// at second 0. Interval stops are inclusive; overlapping intervals
/// overwrite in order. Bounds are checked in the interval's native unit
/// before any conversion, and the final sample of a boundary-exact
/// interval is clamped onto the raster.
pub fn rasterize(
    intervals: &[Interval],
    weights: Option<&[f64]>,
    resolution: TimeResolution,
    sampling_rate_hz: f64,
    acquisition: &Acquisition,
) -> EvokeResult<Vec<f64>> {
    if let Some(weights) = weights {
        if weights.len() != intervals.len() {
            return Err(DesignError::WeightCountMismatch {
                intervals: intervals.len(),
                weights: weights.len(),
            }
            .into());
        }
    }

    let len = acquisition.raster_len(sampling_rate_hz);
    if len == 0 {
        return Err(DesignError::DegenerateSamplingRatio {
            sampling_rate_hz,
            tr_ms: acquisition.tr_ms,
        }
        .into());
    }
    let mut dense = vec![0.0; len];

    for (index, interval) in intervals.iter().enumerate() {
        if interval.stop < interval.start {
            return Err(DesignError::InvalidInterval {
                start: interval.start,
                stop: interval.stop,
            }
            .into());
        }
        check_extent(interval, resolution, acquisition)?;

        let (start_sec, stop_sec) = match resolution {
            TimeResolution::Milliseconds => (interval.start / 1000.0, interval.stop / 1000.0),
            TimeResolution::Volumes => {
                let tr_s = acquisition.tr_ms / 1000.0;
                (interval.start * tr_s - tr_s, interval.stop * tr_s)
            }
        };
        let start_idx = (start_sec * sampling_rate_hz).round() as usize;
        let stop_idx = ((stop_sec * sampling_rate_hz).round() as usize).min(len - 1);

        let value = weights.map_or(1.0, |w| w[index]);
        for sample in &mut dense[start_idx..=stop_idx] {
            *sample = value;
        }
    }
    Ok(dense)
}

fn check_extent(
    interval: &Interval,
    resolution: TimeResolution,
    acquisition: &Acquisition,
) -> EvokeResult<()> {
    let (lower, extent) = match resolution {
        TimeResolution::Milliseconds => (0.0, acquisition.duration_ms()),
        TimeResolution::Volumes => (1.0, acquisition.n_volumes as f64),
    };
    // Written so that non-finite edges fail too.
    if !(interval.start >= lower && interval.stop <= extent) {
        return Err(DesignError::OutOfRangeInterval {
            start: interval.start,
            stop: interval.stop,
            extent,
            resolution,
        }
        .into());
    }
    Ok(())
}
