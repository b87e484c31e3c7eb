//! File-level round trips for the text formats.

use evoke_core::errors::{EvokeError, FormatError};
use evoke_core::models::{DocumentInfo, Predictor, PredictorKind, SdmDocument, TimeResolution};
use evoke_io::{read_prt, read_sdm, write_events_tsv, write_sdm};

const BLOCKED_PRT: &str = "\
FileVersion:        2

ResolutionOfTime:   msec
Experiment:         BlockedLocalizer
ParametricWeights:  0

NrOfConditions:     2

Faces
2
0 2000
8000 10000
Color: 255 0 0

Houses
1
4000 6000
Color: 0 255 0
";

/// A two-column confound document with values that stress the float
/// formatter.
fn confound_document() -> SdmDocument {
    SdmDocument {
        info: DocumentInfo::confounds(2, 4),
        predictors: vec![
            Predictor::new(
                "tx zscored",
                [40, 40, 40],
                vec![0.1 + 0.2, -1.0 / 3.0, 1e-9, -0.0],
                PredictorKind::Confound,
            ),
            Predictor::new(
                "ty zscored",
                [80, 80, 80],
                vec![2.0f64.sqrt(), 0.0, -1.75, 123456.789],
                PredictorKind::Confound,
            ),
        ],
    }
}

// ── Design matrices ──────────────────────────────────────────────────────

#[test]
fn sdm_files_round_trip_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run1_confounds.sdm");
    let document = confound_document();

    write_sdm(&path, &document).unwrap();
    let read_back = read_sdm(&path).unwrap();

    assert_eq!(read_back, document);
    for (a, b) in read_back.predictors.iter().zip(&document.predictors) {
        for (x, y) in a.values.iter().zip(&b.values) {
            assert_eq!(x.to_bits(), y.to_bits(), "{y} must survive bit-exactly");
        }
    }
}

#[test]
fn a_missing_design_file_surfaces_the_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_sdm(dir.path().join("absent.sdm")).unwrap_err();
    assert!(matches!(err, EvokeError::Format(FormatError::Io(_))));
}

#[test]
fn rewriting_a_file_replaces_its_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run1_confounds.sdm");

    let mut document = confound_document();
    write_sdm(&path, &document).unwrap();
    document.predictors[0].values[2] = 42.0;
    write_sdm(&path, &document).unwrap();

    assert_eq!(read_sdm(&path).unwrap().predictors[0].values[2], 42.0);
}

// ── Protocols ────────────────────────────────────────────────────────────

#[test]
fn prt_files_parse_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("localizer.prt");
    std::fs::write(&path, BLOCKED_PRT).unwrap();

    let protocol = read_prt(&path).unwrap();
    assert_eq!(protocol.experiment, "BlockedLocalizer");
    assert_eq!(protocol.resolution, TimeResolution::Milliseconds);
    let names: Vec<&str> = protocol
        .conditions
        .iter()
        .map(|condition| condition.name.as_str())
        .collect();
    assert_eq!(names, ["Faces", "Houses"]);
}

#[test]
fn a_missing_protocol_surfaces_the_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_prt(dir.path().join("absent.prt")).unwrap_err();
    assert!(matches!(err, EvokeError::Format(FormatError::Io(_))));
}

// ── Event tables ─────────────────────────────────────────────────────────

#[test]
fn event_tables_land_on_disk_as_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let prt_path = dir.path().join("localizer.prt");
    let tsv_path = dir.path().join("localizer_events.tsv");
    std::fs::write(&prt_path, BLOCKED_PRT).unwrap();

    let protocol = read_prt(&prt_path).unwrap();
    write_events_tsv(&tsv_path, &protocol, 2000.0).unwrap();

    let text = std::fs::read_to_string(&tsv_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "onset\tduration\ttrial_type",
            "0\t2\tFaces",
            "8\t2\tFaces",
            "4\t2\tHouses",
        ]
    );
}
