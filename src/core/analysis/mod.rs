//! Fundamental frequency estimators
//!
//! Three independent methods, each taking a normalized [`Signal`] and
//! returning a frequency in Hz or a typed failure:
//! - Autocorrelation (robust to a weak or missing fundamental)
//! - Spectral peak (Blackman-Harris window, log-parabolic refinement)
//! - Zero crossing (needs a DC-free, single-crossing-per-cycle waveform)

mod autocorrelation;
mod spectral;
mod zero_crossing;

use serde::Serialize;

use crate::core::signal::Signal;
use crate::error::PitchResult;

pub use autocorrelation::estimate_autocorrelation;
pub use spectral::estimate_spectral;
pub use zero_crossing::{estimate_zero_crossing, rising_crossings};

/// Available frequency estimators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    Autocorrelation,
    Spectral,
    ZeroCrossing,
}

impl EstimatorKind {
    pub fn all() -> [Self; 3] {
        [Self::Autocorrelation, Self::Spectral, Self::ZeroCrossing]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Autocorrelation => "autocorrelation",
            Self::Spectral => "spectral",
            Self::ZeroCrossing => "zero_crossing",
        }
    }

    /// Run this estimator on `signal`
    pub fn estimate(&self, signal: &Signal) -> PitchResult<f64> {
        match self {
            Self::Autocorrelation => estimate_autocorrelation(signal),
            Self::Spectral => estimate_spectral(signal),
            Self::ZeroCrossing => estimate_zero_crossing(signal),
        }
    }
}

impl std::fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
