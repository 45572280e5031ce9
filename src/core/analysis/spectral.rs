// src/core/analysis/spectral.rs
//
// Fundamental frequency from the dominant bin of a windowed spectrum.
// Simple and accurate for a clean tone, but it follows whichever partial
// carries the most energy, which may be a harmonic.

use log::{debug, trace};

use crate::core::dsp::{apply_blackman_harris, argmax, magnitude_spectrum, parabolic};
use crate::core::signal::Signal;
use crate::error::{PitchError, PitchResult};

/// Estimate the fundamental frequency of `signal` from its spectral peak
pub fn estimate_spectral(signal: &Signal) -> PitchResult<f64> {
    let windowed = apply_blackman_harris(signal.samples());
    let spectrum = magnitude_spectrum(&windowed);

    // DC and the last bin lack a neighbour on one side
    if spectrum.len() < 3 {
        return Err(PitchError::DomainError {
            index: 0,
            reason: "spectrum too short for an interior peak",
        });
    }
    let interior = &spectrum[1..spectrum.len() - 1];
    let peak = 1 + argmax(interior).ok_or(PitchError::DomainError {
        index: 0,
        reason: "spectrum has no finite peak",
    })?;
    trace!("spectral: peak bin {} of {}", peak, spectrum.len());

    let log_spectrum: Vec<f64> = spectrum.iter().map(|m| m.ln()).collect();
    let refined = parabolic(&log_spectrum, peak)?;

    let frequency = signal.sample_rate() * refined.position / windowed.len() as f64;
    debug!(
        "spectral: bin {:.3} -> {:.2} Hz",
        refined.position, frequency
    );
    Ok(frequency)
}
