//! Two-gamma hemodynamic response kernel.

use std::f64::consts::PI;

use evoke_core::models::{HrfKernel, HrfParams};

/// Kernel sums at or below this magnitude are left unnormalized.
pub const SUM_NORMALIZATION_FLOOR: f64 = 0.01;

/// Peak magnitudes below this floor are left unscaled.
pub const PEAK_SCALING_FLOOR: f64 = 1e-4;

/// Ratio below which the response gamma is dropped and the kernel
/// degenerates to the negated undershoot.
pub const DEGENERATE_RATIO: f64 = 1e-3;

/// Build a sampled two-gamma kernel.
///
/// ```text
/// h(t) = gamma_pdf(t; peak_delay / peak_disp, peak_disp)
///      - gamma_pdf(t; undershoot_delay / undershoot_disp, undershoot_disp) / ratio
/// ```
///
/// The grid has `round(length * fs)` samples, shifted right by the onset.
/// Sum-normalization takes precedence over unit-peak scaling when both
/// are requested and the sum is above `SUM_NORMALIZATION_FLOOR`.
pub fn build_hrf(
    params: &HrfParams,
    sampling_rate_hz: f64,
    scale_to_unit_peak: bool,
    normalize_by_sum: bool,
) -> HrfKernel {
    let n_samples = (params.length_s * sampling_rate_hz).round() as usize;
    let mut samples = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let t = i as f64 / sampling_rate_hz - params.onset_s;
        let peak = gamma_pdf(
            t,
            params.peak_delay_s / params.peak_dispersion,
            params.peak_dispersion,
        );
        let undershoot = gamma_pdf(
            t,
            params.undershoot_delay_s / params.undershoot_dispersion,
            params.undershoot_dispersion,
        );
        let value = if params.peak_undershoot_ratio < DEGENERATE_RATIO {
            -undershoot
        } else {
            peak - undershoot / params.peak_undershoot_ratio
        };
        samples.push(value);
    }

    if normalize_by_sum {
        let sum: f64 = samples.iter().sum();
        if sum > SUM_NORMALIZATION_FLOOR {
            for value in &mut samples {
                *value /= sum;
            }
            return HrfKernel::new(samples, sampling_rate_hz);
        }
    }
    if scale_to_unit_peak {
        let peak = samples.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        if peak >= PEAK_SCALING_FLOOR {
            for value in &mut samples {
                *value /= peak;
            }
        }
    }
    HrfKernel::new(samples, sampling_rate_hz)
}

/// Gamma density with the given shape, evaluated at `x / scale`.
/// Zero on the negative axis; the limit at zero is finite only for
/// shape 1.
fn gamma_pdf(x: f64, shape: f64, scale: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    let z = x / scale;
    if z == 0.0 {
        return if shape == 1.0 { 1.0 / scale } else { 0.0 };
    }
    ((shape - 1.0) * z.ln() - z - ln_gamma(shape)).exp() / scale
}

const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Natural log of the gamma function, Lanczos approximation (g = 7),
/// with reflection below 1/2.
fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x)
    } else {
        let x = x - 1.0;
        let mut series = LANCZOS_COEFFICIENTS[0];
        for (i, coefficient) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
            series += coefficient / (x + i as f64);
        }
        let t = x + LANCZOS_G + 0.5;
        0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + series.ln()
    }
}
