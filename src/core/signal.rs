// src/core/signal.rs
//
// Canonical mono signal and the normalizer that produces it from a
// decoded buffer.

use super::decoder::AudioBuffer;
use crate::error::{PitchError, PitchResult};

/// Divisor applied to every decoded sample.
///
/// Fixed at 2^16 whatever the source bit depth. The classification
/// thresholds were tuned against this scaling, so it is not derived from
/// `AudioBuffer::bits_per_sample`.
pub const FULL_SCALE: f64 = 65536.0;

/// Fewest samples a parabolic peak fit can work with
pub const MIN_SIGNAL_LEN: usize = 3;

/// Mono, normalized samples with their sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl Signal {
    /// Build a signal, enforcing `sample_rate > 0` and `len >= 3`
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> PitchResult<Self> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(PitchError::UnreadableInput(format!(
                "invalid sample rate {}",
                sample_rate
            )));
        }
        if samples.len() < MIN_SIGNAL_LEN {
            return Err(PitchError::UnreadableInput(format!(
                "{} sample(s), need at least {}",
                samples.len(),
                MIN_SIGNAL_LEN
            )));
        }
        Ok(Self { samples, sample_rate })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Copy of this signal with its mean removed
    pub fn centered(&self) -> Self {
        let mean = self.mean();
        Self {
            samples: self.samples.iter().map(|s| s - mean).collect(),
            sample_rate: self.sample_rate,
        }
    }
}

/// Turn a decoded buffer into a normalized mono [`Signal`].
///
/// Only the first channel of a multi-channel buffer is kept.
pub fn normalize(audio: &AudioBuffer) -> PitchResult<Signal> {
    if audio.channels == 0 {
        return Err(PitchError::UnreadableInput("buffer has no channels".into()));
    }
    if audio.sample_rate == 0 {
        return Err(PitchError::UnreadableInput("sample rate is zero".into()));
    }
    if audio.samples.len() % audio.channels != 0 {
        return Err(PitchError::UnreadableInput(format!(
            "{} samples do not divide into {} channels",
            audio.samples.len(),
            audio.channels
        )));
    }

    let samples: Vec<f64> = (0..audio.frames())
        .filter_map(|frame| audio.samples.get(frame * audio.channels))
        .map(|s| s / FULL_SCALE)
        .collect();

    Signal::new(samples, audio.sample_rate as f64)
}
