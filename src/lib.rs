//! VoicePitch - Classify speaking voices as low or high pitched
//!
//! Estimates the fundamental frequency of a recorded clip and sorts the
//! speaker into one of two coarse categories.
//!
//! ## Pipeline
//!
//! 1. **Decode** a file into a raw interleaved buffer (`hound` for WAV,
//!    Symphonia for everything else)
//! 2. **Normalize**: first channel only, every sample divided by 2^16
//! 3. **Estimate** the fundamental with independent methods:
//!    - Autocorrelation (robust to a missing fundamental)
//!    - Spectral peak (Blackman-Harris window, log-parabolic refinement)
//!    - Zero crossing (diagnostic only)
//! 4. **Classify** with fixed thresholds into `LOW` or `HIGH`
//!
//! ## Module Structure
//!
//! - `core` - Decoding, normalization, DSP helpers and estimators
//! - `detection` - Classification policy and result types
//! - `config` - Analysis options
//! - `cli` - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use voicepitch::core::VoiceAnalyzer;
//!
//! let analyzer = VoiceAnalyzer::new();
//! let report = analyzer.analyze_file(Path::new("speaker.wav"))?;
//! println!("{} ({:.1} Hz)", report.label, report.autocorrelation_hz);
//! ```
//!
//! ## Classification
//!
//! | Autocorrelation | Spectral      | Label |
//! |-----------------|---------------|-------|
//! | <= 180 Hz       | any           | LOW   |
//! | > 180 Hz        | > 180 Hz      | HIGH  |
//! | > 180 Hz        | < 10 Hz       | LOW   |
//! | > 180 Hz        | 10 to 180 Hz  | HIGH  |
//!
//! Any estimator failure fails the whole clip; no label is guessed.

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Analysis options
pub mod config;

// Classification and result types
pub mod detection;

// Typed failures
pub mod error;

pub use config::AnalysisConfig;
pub use crate::core::{
    decode_audio, normalize, AnalyzerBuilder, AudioBuffer, EstimatorKind, SampleData, Signal,
    VoiceAnalyzer,
};
pub use detection::{
    classify, classify_signal, AnalysisResult, Classification, DiagnosticEstimate, Label,
    VoiceReport,
};
pub use error::{PitchError, PitchResult};
