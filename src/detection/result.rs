//! Per-clip analysis results

use serde::Serialize;

use super::classifier::{Classification, Label};
use crate::core::analysis::EstimatorKind;
use crate::error::{PitchError, PitchResult};

/// Outcome of an estimator that does not take part in classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticEstimate {
    pub estimator: EstimatorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiagnosticEstimate {
    pub fn from_result(estimator: EstimatorKind, result: PitchResult<f64>) -> Self {
        match result {
            Ok(hz) => Self {
                estimator,
                frequency_hz: Some(hz),
                error: None,
            },
            Err(e) => Self {
                estimator,
                frequency_hz: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Everything learned about one successfully classified clip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceReport {
    pub sample_rate: u32,
    pub channels: usize,
    pub duration_secs: f64,
    pub label: Label,
    pub autocorrelation_hz: f64,
    pub spectral_hz: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<DiagnosticEstimate>,
}

impl VoiceReport {
    pub fn new(
        sample_rate: u32,
        channels: usize,
        duration_secs: f64,
        classification: Classification,
        diagnostics: Vec<DiagnosticEstimate>,
    ) -> Self {
        Self {
            sample_rate,
            channels,
            duration_secs,
            label: classification.label,
            autocorrelation_hz: classification.autocorrelation_hz,
            spectral_hz: classification.spectral_hz,
            diagnostics,
        }
    }
}

/// Result for one input of a batch, success or typed failure
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub file_path: String,
    pub outcome: PitchResult<VoiceReport>,
}

impl AnalysisResult {
    pub fn new(file_path: impl Into<String>, outcome: PitchResult<VoiceReport>) -> Self {
        Self {
            file_path: file_path.into(),
            outcome,
        }
    }

    pub fn label(&self) -> Option<Label> {
        self.outcome.as_ref().ok().map(|r| r.label)
    }

    pub fn error(&self) -> Option<&PitchError> {
        self.outcome.as_ref().err()
    }
}
