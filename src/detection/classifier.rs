//! Two-way voice pitch classification

use serde::{Deserialize, Serialize};

use crate::core::analysis::{estimate_autocorrelation, estimate_spectral};
use crate::core::signal::Signal;
use crate::error::PitchResult;

/// Autocorrelation and spectral estimates above this are a high voice
pub const HIGH_PITCH_THRESHOLD_HZ: f64 = 180.0;

/// A spectral estimate below this is treated as an unreliable read
pub const SPECTRAL_COLLAPSE_THRESHOLD_HZ: f64 = 10.0;

/// Coarse voice pitch category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Low,
    High,
}

impl Label {
    pub fn name(&self) -> &'static str {
        match self {
            Label::Low => "LOW",
            Label::High => "HIGH",
        }
    }

    /// Single-letter code: `M` (male) for low, `K` (kobieta) for high
    pub fn letter(&self) -> &'static str {
        match self {
            Label::Low => "M",
            Label::High => "K",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Combine the two estimates into a label.
///
/// Autocorrelation decides; the spectral estimate only vetoes a high call
/// when it collapses towards zero.
pub fn classify(autocorrelation_hz: f64, spectral_hz: f64) -> Label {
    if autocorrelation_hz > HIGH_PITCH_THRESHOLD_HZ {
        if spectral_hz > HIGH_PITCH_THRESHOLD_HZ {
            Label::High
        } else if spectral_hz < SPECTRAL_COLLAPSE_THRESHOLD_HZ {
            Label::Low
        } else {
            Label::High
        }
    } else {
        Label::Low
    }
}

/// Estimates feeding a classification, kept for reporting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Label,
    pub autocorrelation_hz: f64,
    pub spectral_hz: f64,
}

/// Run both required estimators and classify.
///
/// Fails if either estimator fails; no fallback frequency is used.
pub fn classify_signal(signal: &Signal) -> PitchResult<Classification> {
    let autocorrelation_hz = estimate_autocorrelation(signal)?;
    let spectral_hz = estimate_spectral(signal)?;
    Ok(Classification {
        label: classify(autocorrelation_hz, spectral_hz),
        autocorrelation_hz,
        spectral_hz,
    })
}
