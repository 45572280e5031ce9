//! Classification and result types

mod classifier;
mod result;

pub use classifier::{
    classify, classify_signal, Classification, Label, HIGH_PITCH_THRESHOLD_HZ,
    SPECTRAL_COLLAPSE_THRESHOLD_HZ,
};
pub use result::{AnalysisResult, DiagnosticEstimate, VoiceReport};
