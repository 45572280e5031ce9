// src/core/analyzer.rs
//
// High-level voice pitch API with builder pattern.

use log::{debug, info};
use std::path::Path;

use super::analysis::{estimate_zero_crossing, EstimatorKind};
use super::decoder::{decode_audio, AudioBuffer};
use super::signal::{normalize, Signal};
use crate::config::AnalysisConfig;
use crate::detection::{classify_signal, Classification, DiagnosticEstimate, Label, VoiceReport};
use crate::error::{PitchError, PitchResult};

/// Builder for VoiceAnalyzer configuration
pub struct AnalyzerBuilder {
    config: AnalysisConfig,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    pub fn remove_dc(mut self, remove: bool) -> Self {
        self.config.remove_dc = remove;
        self
    }

    pub fn zero_crossing(mut self, report: bool) -> Self {
        self.config.zero_crossing = report;
        self
    }

    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> VoiceAnalyzer {
        VoiceAnalyzer {
            config: self.config,
        }
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs normalization, estimation and classification for single clips.
///
/// Holds no per-clip state, so one analyzer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct VoiceAnalyzer {
    config: AnalysisConfig,
}

impl VoiceAnalyzer {
    /// Create analyzer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Classify a normalized signal and collect diagnostic estimates
    pub fn analyze_signal(
        &self,
        signal: &Signal,
    ) -> PitchResult<(Classification, Vec<DiagnosticEstimate>)> {
        let centered = signal.centered();
        let primary = if self.config.remove_dc { &centered } else { signal };

        let classification = classify_signal(primary)?;

        let mut diagnostics = Vec::new();
        if self.config.zero_crossing {
            diagnostics.push(DiagnosticEstimate::from_result(
                EstimatorKind::ZeroCrossing,
                estimate_zero_crossing(&centered),
            ));
        }

        Ok((classification, diagnostics))
    }

    /// Analyze an already decoded buffer
    pub fn analyze_buffer(&self, audio: &AudioBuffer) -> PitchResult<VoiceReport> {
        let signal = normalize(audio)?;
        let (classification, diagnostics) = self.analyze_signal(&signal)?;
        Ok(VoiceReport::new(
            audio.sample_rate,
            audio.channels,
            audio.duration_secs(),
            classification,
            diagnostics,
        ))
    }

    /// Decode and analyze a file.
    ///
    /// Decoding problems surface as [`PitchError::UnreadableInput`].
    pub fn analyze_file(&self, path: &Path) -> PitchResult<VoiceReport> {
        let audio = decode_audio(path)
            .map_err(|e| PitchError::UnreadableInput(format!("{:#}", e)))?;
        debug!(
            "{}: {} frames at {} Hz",
            path.display(),
            audio.frames(),
            audio.sample_rate
        );

        let report = self.analyze_buffer(&audio);
        match &report {
            Ok(r) => info!(
                "{}: {} (autocorrelation {:.1} Hz, spectral {:.1} Hz)",
                path.display(),
                r.label,
                r.autocorrelation_hz,
                r.spectral_hz
            ),
            Err(e) => info!("{}: skipped: {}", path.display(), e),
        }
        report
    }

    /// Decode a file and return only its label
    pub fn classify_file(&self, path: &Path) -> PitchResult<Label> {
        self.analyze_file(path).map(|r| r.label)
    }
}
