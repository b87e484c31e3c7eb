use evoke_core::stats::{
    demean, detrend_linear, diff_padded, standardize, std_pop, zscore, WeightScaling,
};
use proptest::prelude::*;

fn arb_signal() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-1e3..1e3f64, 2..200)
}

// ── Centering and scaling ────────────────────────────────────────────────

proptest! {
    #[test]
    fn demeaned_vectors_sum_to_zero(values in arb_signal()) {
        let centered = demean(&values).unwrap();
        let sum: f64 = centered.iter().sum();
        prop_assert!(sum.abs() < 1e-6, "residual sum {sum}");
    }

    #[test]
    fn zscore_yields_zero_mean_and_unit_spread(values in arb_signal()) {
        prop_assume!(std_pop(&values).unwrap() > 1e-6);

        let scored = zscore(&values).unwrap();
        let mean: f64 = scored.iter().sum::<f64>() / scored.len() as f64;
        let spread = std_pop(&scored).unwrap();

        prop_assert!(mean.abs() < 1e-9, "mean {mean}");
        prop_assert!((spread - 1.0).abs() < 1e-9, "spread {spread}");
    }

    #[test]
    fn standardize_raw_returns_input_unchanged(values in arb_signal()) {
        prop_assert_eq!(standardize(&values, WeightScaling::Raw).unwrap(), values);
    }
}

// ── Differencing ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn padded_difference_integrates_back(values in arb_signal()) {
        let diffs = diff_padded(&values);
        prop_assert_eq!(diffs.len(), values.len());

        let mut running = values[0];
        for (t, d) in diffs.iter().enumerate().skip(1) {
            running += d;
            prop_assert!((running - values[t]).abs() < 1e-6);
        }
    }
}

// ── Detrending ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn detrended_output_is_orthogonal_to_a_line(values in arb_signal()) {
        let detrended = detrend_linear(&values).unwrap();

        let sum: f64 = detrended.iter().sum();
        prop_assert!(sum.abs() < 1e-5, "residual sum {sum}");

        // Zero covariance with the time index.
        let t_mean = (detrended.len() as f64 - 1.0) / 2.0;
        let covariance: f64 = detrended
            .iter()
            .enumerate()
            .map(|(t, v)| (t as f64 - t_mean) * v)
            .sum();
        prop_assert!(covariance.abs() < 1e-3, "covariance {covariance}");
    }
}
