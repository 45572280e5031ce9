//! Digital Signal Processing utilities

pub mod fft;
pub mod peak;
pub mod windows;

pub use fft::{autocorrelation, magnitude_spectrum};
pub use peak::{argmax, parabolic, PeakEstimate};
pub use windows::{apply_blackman_harris, blackman_harris};
