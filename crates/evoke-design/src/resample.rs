//! Convolution and polyphase downsampling to volume resolution.

use std::f64::consts::PI;

use evoke_core::errors::{DesignError, EvokeResult};
use evoke_core::models::{Acquisition, HrfKernel};

/// Kaiser window shape parameter of the anti-aliasing low-pass.
const KAISER_BETA: f64 = 5.0;

/// Filter half-length in input samples per unit of decimation.
const HALF_LEN_PER_FACTOR: usize = 10;

/// Convolve a high-resolution boxcar with the kernel and decimate the
/// result to one sample per volume.
///
/// The resampled length is `ceil(len / factor)`; anything beyond the
/// volume count is cut, anything short of it is an error.
pub fn convolve_and_resample(
    signal: &[f64],
    kernel: &HrfKernel,
    acquisition: &Acquisition,
) -> EvokeResult<Vec<f64>> {
    let factor = acquisition.samples_per_volume(kernel.sampling_rate_hz())?;
    let convolved = convolve_causal(signal, kernel.samples());
    let mut resampled = decimate(&convolved, factor);
    if resampled.len() < acquisition.n_volumes {
        return Err(DesignError::ResampleLengthMismatch {
            expected: acquisition.n_volumes,
            actual: resampled.len(),
        }
        .into());
    }
    resampled.truncate(acquisition.n_volumes);
    Ok(resampled)
}

/// Full linear convolution truncated to the signal length, so the
/// response at sample `t` depends only on samples up to `t`.
pub fn convolve_causal(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; signal.len()];
    for (t, out_sample) in out.iter_mut().enumerate() {
        let reach = kernel.len().min(t + 1);
        let mut acc = 0.0;
        for (k, tap) in kernel.iter().take(reach).enumerate() {
            acc += tap * signal[t - k];
        }
        *out_sample = acc;
    }
    out
}

/// Decimate by an integer factor behind a Kaiser-windowed sinc low-pass.
///
/// The filter spans `2 * 10 * factor + 1` taps with its cutoff at the
/// output Nyquist rate and unit DC gain; output sample `m` is centered
/// on input sample `m * factor`, with zeros assumed outside the signal.
pub fn decimate(signal: &[f64], factor: usize) -> Vec<f64> {
    if signal.is_empty() || factor <= 1 {
        return signal.to_vec();
    }
    let half_len = (HALF_LEN_PER_FACTOR * factor) as isize;
    let taps = lowpass_taps(factor);
    let n = signal.len();
    let n_out = n.div_ceil(factor);

    let mut out = Vec::with_capacity(n_out);
    for m in 0..n_out {
        let center = (m * factor) as isize;
        let mut acc = 0.0;
        for (j, tap) in taps.iter().enumerate() {
            let idx = center + half_len - j as isize;
            if idx >= 0 && (idx as usize) < n {
                acc += tap * signal[idx as usize];
            }
        }
        out.push(acc);
    }
    out
}

/// Kaiser-windowed sinc taps for decimation by `factor`, normalized to
/// unit DC gain. Built symmetric around the center tap.
fn lowpass_taps(factor: usize) -> Vec<f64> {
    let half_len = HALF_LEN_PER_FACTOR * factor;
    let i0_beta = bessel_i0(KAISER_BETA);
    let mut taps = vec![0.0; 2 * half_len + 1];
    for offset in 0..=half_len {
        let d = offset as f64;
        let fraction = d / half_len as f64;
        let window = bessel_i0(KAISER_BETA * (1.0 - fraction * fraction).sqrt()) / i0_beta;
        let ideal = sinc(d / factor as f64) / factor as f64;
        let tap = window * ideal;
        taps[half_len + offset] = tap;
        taps[half_len - offset] = tap;
    }
    let sum: f64 = taps.iter().sum();
    for tap in &mut taps {
        *tap /= sum;
    }
    taps
}

/// Normalized sinc, sin(pi x) / (pi x).
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let px = PI * x;
    px.sin() / px
}

/// Modified Bessel function of the first kind, order zero, by power
/// series. Converges quickly for the beta values used here.
fn bessel_i0(x: f64) -> f64 {
    let quarter_x2 = x * x / 4.0;
    let mut term = 1.0;
    let mut acc = 1.0;
    let mut k = 1.0;
    loop {
        term *= quarter_x2 / (k * k);
        acc += term;
        if term < acc * 1e-16 {
            return acc;
        }
        k += 1.0;
    }
}
