use proptest::prelude::*;

use evoke_core::models::{
    Condition, DocumentInfo, Interval, Predictor, PredictorKind, Protocol, SdmDocument,
    TimeResolution,
};
use evoke_io::{format_sdm, parse_sdm, protocol_events};

/// Any finite value, subnormals and signed zeros included.
fn arb_finite() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE
        | prop::num::f64::NEGATIVE
        | prop::num::f64::NORMAL
        | prop::num::f64::SUBNORMAL
        | prop::num::f64::ZERO
}

fn arb_predictor(n_volumes: usize) -> impl Strategy<Value = Predictor> {
    (
        "[a-zA-Z][a-zA-Z0-9 _-]{0,12}",
        prop::array::uniform3(any::<u8>()),
        prop::collection::vec(arb_finite(), n_volumes..=n_volumes),
    )
        .prop_map(|(name, color, values)| {
            Predictor::new(name, color, values, PredictorKind::Confound)
        })
}

fn arb_document() -> impl Strategy<Value = SdmDocument> {
    (1usize..6, 1usize..24).prop_flat_map(|(n_predictors, n_volumes)| {
        prop::collection::vec(arb_predictor(n_volumes), n_predictors..=n_predictors).prop_map(
            move |predictors| SdmDocument {
                info: DocumentInfo::confounds(predictors.len(), n_volumes),
                predictors,
            },
        )
    })
}

fn arb_conditions() -> impl Strategy<Value = Vec<Condition>> {
    prop::collection::vec(
        (
            "[a-zA-Z][a-zA-Z0-9]{0,8}",
            prop::collection::vec((0.0f64..100_000.0, 1.0f64..5000.0), 0..6),
        ),
        1..4,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(name, spans)| {
                let intervals = spans
                    .into_iter()
                    .map(|(start, length)| Interval::new(start, start + length))
                    .collect();
                Condition::new(name, [128, 128, 128], intervals)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn sdm_text_reproduces_any_document_exactly(document in arb_document()) {
        let text = format_sdm(&document).unwrap();
        let parsed = parse_sdm(&text).unwrap();
        prop_assert_eq!(parsed, document);
    }

    #[test]
    fn the_sdm_parser_never_panics(text in "\\PC*") {
        let _ = parse_sdm(&text);
    }

    #[test]
    fn events_cover_every_interval_in_condition_order(
        conditions in arb_conditions(),
        tr_ms in 500.0f64..4000.0,
    ) {
        let protocol = Protocol {
            experiment: String::new(),
            resolution: TimeResolution::Milliseconds,
            parametric_weights: false,
            conditions,
        };
        let events = protocol_events(&protocol, tr_ms);

        let expected: Vec<(&str, f64)> = protocol
            .conditions
            .iter()
            .flat_map(|condition| {
                condition
                    .intervals
                    .iter()
                    .map(|interval| (condition.name.as_str(), interval.start / 1000.0))
            })
            .collect();
        prop_assert_eq!(events.len(), expected.len());
        for (event, (trial_type, onset_s)) in events.iter().zip(expected) {
            prop_assert_eq!(event.trial_type.as_str(), trial_type);
            prop_assert_eq!(event.onset_s, onset_s);
            prop_assert!(event.duration_s > 0.0);
        }
    }
}
