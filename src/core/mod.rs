//! Core pitch estimation: decoding, normalization, estimators, analyzer

pub mod analysis;
pub mod analyzer;
pub mod decoder;
pub mod dsp;
pub mod signal;

pub use analysis::EstimatorKind;
pub use analyzer::{AnalyzerBuilder, VoiceAnalyzer};
pub use decoder::{decode_audio, AudioBuffer, SampleData};
pub use signal::{normalize, Signal, FULL_SCALE};
