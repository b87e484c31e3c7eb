use evoke_core::models::{Acquisition, HrfParams, Interval, TimeResolution};
use evoke_design::boxcar::rasterize;
use evoke_design::hrf::build_hrf;
use evoke_design::resample::{convolve_causal, decimate};
use proptest::prelude::*;

const SAMPLING_RATE_HZ: f64 = 100.0;

fn acquisition() -> Acquisition {
    Acquisition::new(4, 2000.0)
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec((0.0..7000.0f64, 0.0..1000.0f64), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(start, len)| Interval::new(start, (start + len).min(8000.0)))
            .collect()
    })
}

fn arb_hrf_params() -> impl Strategy<Value = HrfParams> {
    (
        4.0..8.0f64,
        12.0..20.0f64,
        0.8..1.5f64,
        0.8..1.5f64,
        3.0..9.0f64,
        24.0..40.0f64,
    )
        .prop_map(
            |(peak, undershoot, pd, ud, ratio, length)| HrfParams {
                peak_delay_s: peak,
                undershoot_delay_s: undershoot,
                peak_dispersion: pd,
                undershoot_dispersion: ud,
                peak_undershoot_ratio: ratio,
                onset_s: 0.0,
                length_s: length,
            },
        )
}

// ── Rasterization ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn unweighted_boxcars_contain_only_zeros_and_ones(intervals in arb_intervals()) {
        let dense = rasterize(
            &intervals,
            None,
            TimeResolution::Milliseconds,
            SAMPLING_RATE_HZ,
            &acquisition(),
        )
        .unwrap();
        prop_assert_eq!(dense.len(), 800);
        prop_assert!(dense.iter().all(|&v| v == 0.0 || v == 1.0));
    }

    #[test]
    fn weighted_boxcars_draw_values_from_the_weight_set(intervals in arb_intervals()) {
        let weights: Vec<f64> = (0..intervals.len()).map(|i| (i + 2) as f64).collect();
        let dense = rasterize(
            &intervals,
            Some(&weights),
            TimeResolution::Milliseconds,
            SAMPLING_RATE_HZ,
            &acquisition(),
        )
        .unwrap();
        prop_assert!(dense
            .iter()
            .all(|&v| v == 0.0 || weights.contains(&v)));
    }
}

// ── Response kernel ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sum_normalized_kernels_sum_to_one(params in arb_hrf_params()) {
        let kernel = build_hrf(&params, SAMPLING_RATE_HZ, false, true);
        let sum: f64 = kernel.samples().iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-6, "kernel sum {sum}");
    }

    #[test]
    fn kernels_are_causal(params in arb_hrf_params()) {
        let kernel = build_hrf(&params, SAMPLING_RATE_HZ, false, true);
        // Nothing before the response onset.
        prop_assert_eq!(kernel.samples()[0], 0.0);
    }
}

// ── Convolution and decimation ───────────────────────────────────────────

proptest! {
    #[test]
    fn convolution_is_linear(intervals in arb_intervals()) {
        let a = rasterize(
            &intervals,
            None,
            TimeResolution::Milliseconds,
            SAMPLING_RATE_HZ,
            &acquisition(),
        )
        .unwrap();
        let b: Vec<f64> = a.iter().rev().copied().collect();
        let kernel: Vec<f64> = vec![0.5, 0.25, 0.125];

        let summed: Vec<f64> = a.iter().zip(&b).map(|(x, y)| x + y).collect();
        let conv_sum = convolve_causal(&summed, &kernel);
        let conv_a = convolve_causal(&a, &kernel);
        let conv_b = convolve_causal(&b, &kernel);
        for t in 0..conv_sum.len() {
            prop_assert!((conv_sum[t] - conv_a[t] - conv_b[t]).abs() < 1e-9);
        }
    }

    #[test]
    fn decimation_keeps_one_sample_per_volume(factor in 2usize..32) {
        let signal: Vec<f64> = (0..factor * 40).map(|i| (i as f64 * 0.01).sin()).collect();
        let out = decimate(&signal, factor);
        prop_assert_eq!(out.len(), 40);
    }
}
