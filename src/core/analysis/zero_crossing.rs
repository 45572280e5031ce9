// src/core/analysis/zero_crossing.rs
//
// Frequency from the spacing of rising zero crossings.
// Only meaningful when the waveform crosses zero once per cycle; harmonics
// or noise add extra crossings and bias the result upward.

use log::debug;

use crate::core::signal::Signal;
use crate::error::{PitchError, PitchResult};

/// Fractional positions of every negative -> non-negative transition.
///
/// Each position is linearly interpolated between the two samples that
/// straddle zero.
pub fn rising_crossings(samples: &[f64]) -> Vec<f64> {
    samples
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[0] < 0.0 && w[1] >= 0.0)
        .map(|(i, w)| i as f64 - w[0] / (w[1] - w[0]))
        .collect()
}

/// Estimate frequency from the mean interval between rising zero crossings.
///
/// The signal is used as given; remove any DC offset first.
pub fn estimate_zero_crossing(signal: &Signal) -> PitchResult<f64> {
    let crossings = rising_crossings(signal.samples());
    if crossings.len() < 2 {
        return Err(PitchError::NoCrossings {
            found: crossings.len(),
        });
    }

    let intervals = crossings.len() - 1;
    let mean_interval = crossings
        .windows(2)
        .map(|w| w[1] - w[0])
        .sum::<f64>()
        / intervals as f64;

    if mean_interval == 0.0 {
        return Err(PitchError::DivideByZero("zero-crossing interval"));
    }

    let frequency = signal.sample_rate() / mean_interval;
    debug!(
        "zero-crossing: {} crossings, mean interval {:.3} -> {:.2} Hz",
        crossings.len(),
        mean_interval,
        frequency
    );
    Ok(frequency)
}
