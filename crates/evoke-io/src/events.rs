//! Tab-separated event tables derived from stimulation protocols.

use std::fs;
use std::io;
use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use evoke_core::errors::{EvokeError, EvokeResult, FormatError};
use evoke_core::models::{Protocol, TimeResolution};

/// One stimulus occurrence, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub onset_s: f64,
    pub duration_s: f64,
    /// Name of the condition the occurrence belongs to.
    pub trial_type: String,
}

/// Flatten a protocol into per-occurrence events.
///
/// Millisecond intervals divide by 1000. Volume intervals treat
/// `start` as a 1-based index, so the first volume begins at zero and
/// the interval runs through the end of the `stop` volume. Durations
/// are rounded to four decimals; onsets are left exact. Events keep
/// the protocol's condition order.
pub fn protocol_events(protocol: &Protocol, tr_ms: f64) -> Vec<Event> {
    let mut events = Vec::new();
    for condition in &protocol.conditions {
        for interval in &condition.intervals {
            let (onset_s, stop_s) = match protocol.resolution {
                TimeResolution::Milliseconds => {
                    (interval.start / 1000.0, interval.stop / 1000.0)
                }
                TimeResolution::Volumes => (
                    (interval.start - 1.0) * tr_ms / 1000.0,
                    interval.stop * tr_ms / 1000.0,
                ),
            };
            events.push(Event {
                onset_s,
                duration_s: round4(stop_s - onset_s),
                trial_type: condition.name.clone(),
            });
        }
    }
    events
}

/// Render events as a tab-separated table with an
/// `onset duration trial_type` header row.
pub fn format_events_tsv(events: &[Event]) -> EvokeResult<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());
    writer
        .write_record(["onset", "duration", "trial_type"])
        .map_err(csv_error)?;
    for event in events {
        writer
            .write_record([
                event.onset_s.to_string(),
                event.duration_s.to_string(),
                event.trial_type.clone(),
            ])
            .map_err(csv_error)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| FormatError::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a protocol's event table to disk.
pub fn write_events_tsv(
    path: impl AsRef<Path>,
    protocol: &Protocol,
    tr_ms: f64,
) -> EvokeResult<()> {
    let events = protocol_events(protocol, tr_ms);
    let text = format_events_tsv(&events)?;
    fs::write(&path, text).map_err(FormatError::Io)?;
    debug!(
        path = %path.as_ref().display(),
        n_events = events.len(),
        "wrote events table"
    );
    Ok(())
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn csv_error(err: csv::Error) -> EvokeError {
    FormatError::Io(io::Error::new(io::ErrorKind::Other, err)).into()
}
