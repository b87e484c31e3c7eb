use evoke_core::config::MotionModel;
use evoke_core::models::MotionTrace;
use evoke_core::stats;
use evoke_motion::displacement::framewise_displacement;
use evoke_motion::model::combined_model;
use evoke_motion::spikes::spike_document;
use evoke_motion::variants;
use proptest::prelude::*;

fn arb_rows() -> impl Strategy<Value = [Vec<f64>; 6]> {
    (8usize..32).prop_flat_map(|n| {
        let row = || prop::collection::vec(-2.0..2.0f64, n..=n);
        (row(), row(), row(), row(), row(), row())
            .prop_map(|(a, b, c, d, e, f)| [a, b, c, d, e, f])
    })
}

fn arb_model() -> impl Strategy<Value = MotionModel> {
    prop_oneof![
        Just(MotionModel::Params12),
        Just(MotionModel::Params18),
        Just(MotionModel::Params24),
    ]
}

fn trace(rows: [Vec<f64>; 6]) -> MotionTrace {
    MotionTrace::new(
        std::array::from_fn(|i| format!("param_{i}")),
        std::array::from_fn(|_| [128, 128, 128]),
        rows,
    )
    .unwrap()
}

/// Every family input must have usable spread before z-scoring is
/// well-conditioned.
fn families_are_well_conditioned(rows: &[Vec<f64>; 6]) -> bool {
    rows.iter().all(|row| {
        let diff = stats::diff_padded(row);
        [
            stats::std_pop(row),
            stats::std_pop(&diff),
            stats::std_pop(&stats::square(row)),
            stats::std_pop(&stats::square(&diff)),
        ]
        .iter()
        .all(|spread| matches!(spread, Ok(s) if *s > 1e-4))
    })
}

// ── Framewise displacement ───────────────────────────────────────────────

proptest! {
    #[test]
    fn displacement_is_nonnegative_and_starts_at_zero(rows in arb_rows()) {
        let fd = framewise_displacement(&trace(rows), 50.0);
        prop_assert_eq!(fd[0], 0.0);
        prop_assert!(fd.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn displacement_ignores_constant_offsets(
        rows in arb_rows(),
        offsets in prop::array::uniform6(-10.0..10.0f64),
    ) {
        let shifted: [Vec<f64>; 6] = std::array::from_fn(|p| {
            rows[p].iter().map(|v| v + offsets[p]).collect()
        });
        let baseline = framewise_displacement(&trace(rows), 50.0);
        let moved = framewise_displacement(&trace(shifted), 50.0);
        for (a, b) in baseline.iter().zip(&moved) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }
}

// ── Variants and models ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn zscored_variants_standardize_every_row(rows in arb_rows()) {
        prop_assume!(families_are_well_conditioned(&rows));
        let built = variants::build(&trace(rows)).unwrap();
        for doc in [
            &built.zscored,
            &built.derivative,
            &built.squared,
            &built.derivative_squared,
        ] {
            for predictor in &doc.predictors {
                let mean = stats::mean(&predictor.values).unwrap();
                let spread = stats::std_pop(&predictor.values).unwrap();
                prop_assert!(mean.abs() < 1e-8);
                prop_assert!((spread - 1.0).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn combined_models_have_their_declared_size(
        rows in arb_rows(),
        model in arb_model(),
    ) {
        prop_assume!(families_are_well_conditioned(&rows));
        let built = variants::build(&trace(rows)).unwrap();
        let doc = combined_model(&built, model);
        prop_assert_eq!(doc.predictors.len(), model.n_predictors());
        prop_assert!(doc.validate().is_ok());
    }
}

// ── Spikes ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn spike_documents_mirror_the_threshold_crossings(
        fd in prop::collection::vec(0.0..1.0f64, 4..64),
        threshold in 0.2..0.8f64,
    ) {
        let crossings = fd.iter().filter(|&&v| v > threshold).count();
        match spike_document(&fd, threshold) {
            None => prop_assert_eq!(crossings, 0),
            Some(doc) => {
                prop_assert_eq!(doc.predictors.len(), crossings);
                for predictor in &doc.predictors {
                    prop_assert_eq!(predictor.values.iter().sum::<f64>(), 1.0);
                    prop_assert_eq!(predictor.len(), fd.len());
                }
            }
        }
    }
}
