//! Zone classification on the abstractness/instability plane.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance at or below which a module counts as on the main sequence.
const MAIN_SEQUENCE_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Balanced abstractness for its stability
    MainSequence,
    /// Concrete and depended upon: rigid, painful to change
    ZoneOfPain,
    /// Abstract and unused: abstractions nobody relies on
    ZoneOfUselessness,
}

impl Zone {
    /// - Zone of Pain: low instability + low abstractness
    /// - Zone of Uselessness: high instability + high abstractness
    /// - Main Sequence: |A + I - 1| <= threshold, and anything in between
    pub fn classify(abstractness: f64, instability: f64) -> Self {
        let distance = (abstractness + instability - 1.0).abs();

        if distance <= MAIN_SEQUENCE_THRESHOLD {
            Zone::MainSequence
        } else if instability < 0.5 && abstractness < 0.5 {
            Zone::ZoneOfPain
        } else if instability > 0.5 && abstractness > 0.5 {
            Zone::ZoneOfUselessness
        } else {
            Zone::MainSequence
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::MainSequence => write!(f, "main sequence"),
            Zone::ZoneOfPain => write!(f, "zone of pain"),
            Zone::ZoneOfUselessness => write!(f, "zone of uselessness"),
        }
    }
}
