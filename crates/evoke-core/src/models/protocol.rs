use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit in which a protocol expresses its intervals. Fixed per protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeResolution {
    /// 0-based times in milliseconds.
    Milliseconds,
    /// 1-based volume indices.
    Volumes,
}

impl fmt::Display for TimeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeResolution::Milliseconds => write!(f, "msec"),
            TimeResolution::Volumes => write!(f, "volumes"),
        }
    }
}

/// A stimulation interval. `stop` is inclusive and never precedes `start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub stop: f64,
    /// Parametric modulation weight, present when the protocol declares
    /// weights.
    pub weight: Option<f64>,
}

impl Interval {
    pub fn new(start: f64, stop: f64) -> Self {
        Self {
            start,
            stop,
            weight: None,
        }
    }

    pub fn weighted(start: f64, stop: f64, weight: f64) -> Self {
        Self {
            start,
            stop,
            weight: Some(weight),
        }
    }
}

/// A named stimulus condition and its occurrence intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub color: [u8; 3],
    pub intervals: Vec<Interval>,
}

impl Condition {
    pub fn new(name: impl Into<String>, color: [u8; 3], intervals: Vec<Interval>) -> Self {
        Self {
            name: name.into(),
            color,
            intervals,
        }
    }

    /// Per-interval weights, present only when every interval carries one.
    pub fn weights(&self) -> Option<Vec<f64>> {
        self.intervals.iter().map(|interval| interval.weight).collect()
    }

    /// True when the weight vector exists and takes more than one distinct
    /// value. A constant weight column carries no information, so no
    /// parametric predictor is built for it.
    pub fn has_varying_weights(&self) -> bool {
        match self.weights() {
            Some(weights) => weights
                .first()
                .is_some_and(|&first| weights.iter().any(|&w| w != first)),
            None => false,
        }
    }
}

/// A stimulation protocol: experiment metadata plus ordered conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protocol {
    /// Experiment name from the protocol header.
    pub experiment: String,
    /// Unit of all interval values.
    pub resolution: TimeResolution,
    /// Whether intervals carry parametric weights.
    pub parametric_weights: bool,
    pub conditions: Vec<Condition>,
}
