//! FFT-backed spectrum and correlation helpers

use num_complex::Complex;
use realfft::RealFftPlanner;
use rustfft::FftPlanner;

/// Magnitude of the real-input FFT of `samples`.
///
/// Returns `len / 2 + 1` bins, DC first.
pub fn magnitude_spectrum(samples: &[f64]) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut planner = RealFftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(samples.len());

    let mut input = fft.make_input_vec();
    input.copy_from_slice(samples);
    let mut spectrum = fft.make_output_vec();

    fft.process(&mut input, &mut spectrum)
        .expect("buffers are sized by the planner");

    spectrum.iter().map(|c| c.norm()).collect()
}

/// Linear (non-circular) autocorrelation for lags `0..samples.len()`.
///
/// Equivalent to convolving the signal with its time-reversed copy and
/// keeping the non-negative half. The signal is zero-padded to at least
/// `2 * len - 1` so the circular wrap never overlaps.
pub fn autocorrelation(samples: &[f64]) -> Vec<f64> {
    let len = samples.len();
    if len == 0 {
        return Vec::new();
    }

    let fft_size = (2 * len - 1).next_power_of_two();
    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(fft_size);
    let inverse = planner.plan_fft_inverse(fft_size);

    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .map(|&s| Complex::new(s, 0.0))
        .collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    forward.process(&mut buffer);
    for c in buffer.iter_mut() {
        *c = Complex::new(c.norm_sqr(), 0.0);
    }
    inverse.process(&mut buffer);

    let scale = 1.0 / fft_size as f64;
    buffer[..len].iter().map(|c| c.re * scale).collect()
}
