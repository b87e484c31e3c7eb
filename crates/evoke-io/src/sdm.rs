//! The plain-text SDM design matrix format.
//!
//! An SDM file carries five header fields, one line of per-predictor
//! RGB triplets, one line of double-quoted predictor names, and one
//! whitespace-separated row of values per volume:
//!
//! ```text
//! FileVersion:            1
//!
//! NrOfPredictors:         3
//! NrOfDataPoints:         4
//! IncludesConstant:       1
//! FirstConfoundPredictor: 3
//!
//! 255 0 0   0 255 0   255 255 255
//! "Faces" "Houses" "Constant"
//! 0.021 0 1
//! 0.24 0.018 1
//! 0.41 0.22 1
//! 0.38 0.4 1
//! ```
//!
//! Values are written with the shortest decimal form that parses back
//! to the same bits, so a write/read cycle reproduces every value
//! exactly.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use evoke_core::constants::CONSTANT_PREDICTOR_NAME;
use evoke_core::errors::{EvokeResult, FormatError};
use evoke_core::models::{DocumentInfo, Predictor, PredictorKind, SdmDocument};

use crate::text::{numbered_lines, parse_flag, parse_header, parse_value, require};

const PARAMETRIC_SUFFIX: &str = " [Parametric]";

// ── Writing ──────────────────────────────────────────────────────────────

/// Render a document in the SDM text format.
///
/// The document is validated first; non-finite values and names
/// containing a quote character are refused.
pub fn format_sdm(document: &SdmDocument) -> EvokeResult<String> {
    document.validate()?;
    for predictor in &document.predictors {
        if predictor.name.contains('"') {
            return Err(FormatError::UnencodableName {
                name: predictor.name.clone(),
            }
            .into());
        }
        for (volume, value) in predictor.values.iter().enumerate() {
            if !value.is_finite() {
                return Err(FormatError::NonFiniteValue {
                    predictor: predictor.name.clone(),
                    volume,
                }
                .into());
            }
        }
    }

    let info = &document.info;
    let mut out = String::new();
    header_line(&mut out, "FileVersion:", info.file_version);
    out.push('\n');
    header_line(&mut out, "NrOfPredictors:", info.n_predictors);
    header_line(&mut out, "NrOfDataPoints:", info.n_volumes);
    header_line(&mut out, "IncludesConstant:", u8::from(info.includes_constant));
    header_line(&mut out, "FirstConfoundPredictor:", info.first_confound_predictor);
    out.push('\n');

    let colors: Vec<String> = document
        .predictors
        .iter()
        .map(|p| format!("{} {} {}", p.color[0], p.color[1], p.color[2]))
        .collect();
    out.push_str(&colors.join("   "));
    out.push('\n');

    let names: Vec<String> = document
        .predictors
        .iter()
        .map(|p| format!("\"{}\"", p.name))
        .collect();
    out.push_str(&names.join(" "));
    out.push('\n');

    for volume in 0..info.n_volumes {
        let row: Vec<String> = document
            .predictors
            .iter()
            .map(|p| p.values[volume].to_string())
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    Ok(out)
}

/// Write a document to disk in the SDM text format.
pub fn write_sdm(path: impl AsRef<Path>, document: &SdmDocument) -> EvokeResult<()> {
    let text = format_sdm(document)?;
    fs::write(&path, text).map_err(FormatError::Io)?;
    debug!(
        path = %path.as_ref().display(),
        n_predictors = document.n_predictors(),
        n_volumes = document.n_volumes(),
        "wrote design matrix"
    );
    Ok(())
}

fn header_line(out: &mut String, key: &str, value: impl std::fmt::Display) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{key:<24}{value}");
}

// ── Reading ──────────────────────────────────────────────────────────────

/// Parse a document from SDM text.
///
/// Predictor kinds are inferred from the header and the names: columns
/// at or past `FirstConfoundPredictor` are confounds (or the trailing
/// constant), a ` [Parametric]` name suffix marks a parametric column,
/// anything else is a task predictor.
pub fn parse_sdm(text: &str) -> EvokeResult<SdmDocument> {
    let mut lines = numbered_lines(text);

    let mut file_version = None;
    let mut n_predictors = None;
    let mut n_volumes = None;
    let mut includes_constant = None;
    let mut first_confound = None;

    while let Some((_, line)) = lines.peek() {
        let Some((key, value)) = line.split_once(':') else {
            break;
        };
        let (key, value) = (key.trim(), value.trim().to_string());
        match key {
            "FileVersion" => file_version = Some(parse_header("FileVersion", &value)?),
            "NrOfPredictors" => n_predictors = Some(parse_header("NrOfPredictors", &value)?),
            "NrOfDataPoints" => n_volumes = Some(parse_header("NrOfDataPoints", &value)?),
            "IncludesConstant" => {
                includes_constant = Some(parse_flag("IncludesConstant", &value)?)
            }
            "FirstConfoundPredictor" => {
                first_confound = Some(parse_header("FirstConfoundPredictor", &value)?)
            }
            _ => {}
        }
        lines.next();
    }

    let info = DocumentInfo {
        file_version: require("FileVersion", file_version)?,
        n_predictors: require("NrOfPredictors", n_predictors)?,
        n_volumes: require("NrOfDataPoints", n_volumes)?,
        includes_constant: require("IncludesConstant", includes_constant)?,
        first_confound_predictor: require("FirstConfoundPredictor", first_confound)?,
    };

    let (line_no, colors_line) = lines
        .next()
        .ok_or(FormatError::MissingHeaderField { field: "colors" })?;
    let colors = parse_colors(line_no, colors_line, info.n_predictors)?;

    let (line_no, names_line) = lines
        .next()
        .ok_or(FormatError::MissingHeaderField { field: "names" })?;
    let names = parse_quoted_names(line_no, names_line)?;
    if names.len() != info.n_predictors {
        return Err(FormatError::ColumnCountMismatch {
            line: line_no,
            expected: info.n_predictors,
            found: names.len(),
        }
        .into());
    }

    let mut columns: Vec<Vec<f64>> = (0..info.n_predictors)
        .map(|_| Vec::with_capacity(info.n_volumes))
        .collect();
    for row in 0..info.n_volumes {
        let (line_no, data_line) = lines.next().ok_or(FormatError::TruncatedData {
            expected: info.n_volumes,
            found: row,
        })?;
        let tokens: Vec<&str> = data_line.split_whitespace().collect();
        if tokens.len() != info.n_predictors {
            return Err(FormatError::ColumnCountMismatch {
                line: line_no,
                expected: info.n_predictors,
                found: tokens.len(),
            }
            .into());
        }
        for (column, token) in columns.iter_mut().zip(&tokens) {
            column.push(parse_value(line_no, token)?);
        }
    }

    let predictors: Vec<Predictor> = names
        .into_iter()
        .zip(colors)
        .zip(columns)
        .enumerate()
        .map(|(index, ((name, color), values))| {
            let kind = infer_kind(index + 1, &name, &info);
            Predictor::new(name, color, values, kind)
        })
        .collect();

    let document = SdmDocument { info, predictors };
    document.validate()?;
    Ok(document)
}

/// Read and parse an SDM file.
pub fn read_sdm(path: impl AsRef<Path>) -> EvokeResult<SdmDocument> {
    let text = fs::read_to_string(&path).map_err(FormatError::Io)?;
    let document = parse_sdm(&text)?;
    debug!(
        path = %path.as_ref().display(),
        n_predictors = document.n_predictors(),
        n_volumes = document.n_volumes(),
        "read design matrix"
    );
    Ok(document)
}

fn parse_colors(line_no: usize, line: &str, n_predictors: usize) -> EvokeResult<Vec<[u8; 3]>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 * n_predictors {
        return Err(FormatError::ColumnCountMismatch {
            line: line_no,
            expected: 3 * n_predictors,
            found: tokens.len(),
        }
        .into());
    }
    let mut channels = Vec::with_capacity(tokens.len());
    for token in tokens {
        let channel: u8 = token.parse().map_err(|_| FormatError::InvalidValue {
            line: line_no,
            value: token.to_string(),
        })?;
        channels.push(channel);
    }
    Ok(channels
        .chunks_exact(3)
        .map(|rgb| [rgb[0], rgb[1], rgb[2]])
        .collect())
}

fn parse_quoted_names(line_no: usize, line: &str) -> EvokeResult<Vec<String>> {
    let mut names = Vec::new();
    let mut rest = line.trim();
    while !rest.is_empty() {
        let malformed = || FormatError::InvalidValue {
            line: line_no,
            value: rest.to_string(),
        };
        let open = rest.find('"').ok_or_else(malformed)?;
        if !rest[..open].trim().is_empty() {
            return Err(malformed().into());
        }
        let after = &rest[open + 1..];
        let close = after.find('"').ok_or_else(malformed)?;
        names.push(after[..close].to_string());
        rest = after[close + 1..].trim_start();
    }
    Ok(names)
}

fn infer_kind(index_1based: usize, name: &str, info: &DocumentInfo) -> PredictorKind {
    if index_1based >= info.first_confound_predictor {
        if info.includes_constant && name == CONSTANT_PREDICTOR_NAME {
            PredictorKind::Constant
        } else {
            PredictorKind::Confound
        }
    } else if name.ends_with(PARAMETRIC_SUFFIX) {
        PredictorKind::Parametric
    } else {
        PredictorKind::Task
    }
}
