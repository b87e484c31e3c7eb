//! The plain-text PRT stimulation protocol format.
//!
//! A PRT file opens with `key: value` header lines. After
//! `NrOfConditions` each condition follows as a name line, an interval
//! count line, one `start stop` row per interval (with a third weight
//! column when the header declares `ParametricWeights: 1`), and an
//! optional `Color: R G B` line:
//!
//! ```text
//! FileVersion:        2
//!
//! ResolutionOfTime:   msec
//! Experiment:         FacesHouses
//! ParametricWeights:  0
//!
//! NrOfConditions:     2
//!
//! Faces
//! 2
//! 0 2000
//! 8000 10000
//! Color: 255 0 0
//!
//! Houses
//! 1
//! 4000 6000
//! ```
//!
//! Conditions without a color line draw one from a fixed palette, so
//! repeated reads of the same file color identically.

use std::fs;
use std::path::Path;

use tracing::debug;

use evoke_core::errors::{EvokeResult, FormatError};
use evoke_core::models::{Condition, Interval, Protocol, TimeResolution};

use crate::text::{numbered_lines, parse_flag, parse_header, parse_value, require};

/// Fallback condition colors, cycled by condition position.
const PALETTE: [[u8; 3]; 8] = [
    [230, 26, 28],
    [55, 126, 184],
    [77, 175, 74],
    [152, 78, 163],
    [255, 127, 0],
    [255, 255, 51],
    [166, 86, 40],
    [247, 129, 191],
];

/// Parse a protocol from PRT text.
///
/// Header fields other than `Experiment`, `ResolutionOfTime`,
/// `ParametricWeights` and `NrOfConditions` are display settings and
/// are ignored.
pub fn parse_prt(text: &str) -> EvokeResult<Protocol> {
    let mut lines = numbered_lines(text);

    let mut experiment = String::new();
    let mut resolution = None;
    let mut parametric_weights = false;
    let mut n_conditions = None;

    while n_conditions.is_none() {
        let Some((_, line)) = lines.peek() else {
            break;
        };
        let Some((key, value)) = line.split_once(':') else {
            break;
        };
        let (key, value) = (key.trim(), value.trim().to_string());
        match key {
            "Experiment" => experiment = value,
            "ResolutionOfTime" => resolution = Some(parse_resolution(&value)?),
            "ParametricWeights" => {
                parametric_weights = parse_flag("ParametricWeights", &value)?
            }
            "NrOfConditions" => n_conditions = Some(parse_header("NrOfConditions", &value)?),
            _ => {}
        }
        lines.next();
    }

    let resolution = require("ResolutionOfTime", resolution)?;
    let n_conditions: usize = require("NrOfConditions", n_conditions)?;
    let columns = if parametric_weights { 3 } else { 2 };

    let mut conditions = Vec::with_capacity(n_conditions);
    for index in 0..n_conditions {
        let truncated = || FormatError::TruncatedData {
            expected: n_conditions,
            found: index,
        };

        let (_, name) = lines.next().ok_or_else(truncated)?;
        let name = name.to_string();

        let (line_no, count_line) = lines.next().ok_or_else(truncated)?;
        let n_intervals: usize = parse_count(line_no, count_line)?;

        let mut intervals = Vec::with_capacity(n_intervals);
        for _ in 0..n_intervals {
            let (line_no, row) = lines.next().ok_or_else(truncated)?;
            let tokens: Vec<&str> = row.split_whitespace().collect();
            if tokens.len() != columns {
                return Err(FormatError::ColumnCountMismatch {
                    line: line_no,
                    expected: columns,
                    found: tokens.len(),
                }
                .into());
            }
            let start = parse_value(line_no, tokens[0])?;
            let stop = parse_value(line_no, tokens[1])?;
            intervals.push(if parametric_weights {
                Interval::weighted(start, stop, parse_value(line_no, tokens[2])?)
            } else {
                Interval::new(start, stop)
            });
        }

        let color = match lines.next_if(|(_, line)| line.starts_with("Color:")) {
            Some((line_no, line)) => parse_color(line_no, &line["Color:".len()..])?,
            None => PALETTE[index % PALETTE.len()],
        };

        conditions.push(Condition::new(name, color, intervals));
    }

    Ok(Protocol {
        experiment,
        resolution,
        parametric_weights,
        conditions,
    })
}

/// Read and parse a PRT file.
pub fn read_prt(path: impl AsRef<Path>) -> EvokeResult<Protocol> {
    let text = fs::read_to_string(&path).map_err(FormatError::Io)?;
    let protocol = parse_prt(&text)?;
    debug!(
        path = %path.as_ref().display(),
        experiment = %protocol.experiment,
        n_conditions = protocol.conditions.len(),
        resolution = %protocol.resolution,
        "read protocol"
    );
    Ok(protocol)
}

fn parse_resolution(value: &str) -> EvokeResult<TimeResolution> {
    match value.to_ascii_lowercase().as_str() {
        "msec" => Ok(TimeResolution::Milliseconds),
        "volumes" => Ok(TimeResolution::Volumes),
        _ => Err(FormatError::UnsupportedResolution {
            value: value.to_string(),
        }
        .into()),
    }
}

fn parse_count(line_no: usize, token: &str) -> EvokeResult<usize> {
    token.parse().map_err(|_| {
        FormatError::InvalidValue {
            line: line_no,
            value: token.to_string(),
        }
        .into()
    })
}

fn parse_color(line_no: usize, rest: &str) -> EvokeResult<[u8; 3]> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(FormatError::ColumnCountMismatch {
            line: line_no,
            expected: 3,
            found: tokens.len(),
        }
        .into());
    }
    let mut rgb = [0u8; 3];
    for (channel, token) in rgb.iter_mut().zip(&tokens) {
        *channel = token.parse().map_err(|_| FormatError::InvalidValue {
            line: line_no,
            value: token.to_string(),
        })?;
    }
    Ok(rgb)
}
