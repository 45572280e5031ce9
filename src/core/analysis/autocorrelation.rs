// src/core/analysis/autocorrelation.rs
//
// Fundamental frequency from the strongest self-similarity lag.
// The pitch period produces the largest secondary correlation peak even
// when the fundamental itself is weak in the spectrum.

use log::{debug, trace};

use crate::core::dsp::{argmax, autocorrelation, parabolic};
use crate::core::signal::Signal;
use crate::error::{PitchError, PitchResult};

/// Estimate the fundamental frequency of `signal` by autocorrelation
pub fn estimate_autocorrelation(signal: &Signal) -> PitchResult<f64> {
    let correlation = autocorrelation(signal.samples());

    let start = first_rising_lag(&correlation).ok_or(PitchError::NoRisingEdge)?;
    let peak = start + argmax(&correlation[start..]).ok_or(PitchError::NoRisingEdge)?;
    trace!("autocorrelation: rising edge at lag {}, peak at lag {}", start, peak);

    let refined = parabolic(&correlation, peak)?;
    if refined.position == 0.0 {
        return Err(PitchError::DivideByZero("autocorrelation period"));
    }

    let frequency = signal.sample_rate() / refined.position;
    debug!(
        "autocorrelation: period {:.3} samples -> {:.2} Hz",
        refined.position, frequency
    );
    Ok(frequency)
}

/// First lag at which the correlation starts increasing again
fn first_rising_lag(correlation: &[f64]) -> Option<usize> {
    correlation.windows(2).position(|w| w[1] - w[0] > 0.0)
}
