//! Output formatting for CLI results

use colorful::Colorful;
use serde_json::{json, Value};

use super::args::OutputFormat;
use crate::detection::{AnalysisResult, Label, VoiceReport};

/// Render a batch of results in the requested format.
///
/// `Label` and `Letter` emit one line per classified clip and leave failed
/// clips out entirely. `color` only affects the verbose format.
pub fn render(results: &[AnalysisResult], format: OutputFormat, color: bool) -> String {
    match format {
        OutputFormat::Label => format_labels(results, Label::name),
        OutputFormat::Letter => format_labels(results, Label::letter),
        OutputFormat::Verbose => results.iter().map(|r| format_verbose(r, color)).collect(),
        OutputFormat::Json => format_json(results),
    }
}

fn format_labels(results: &[AnalysisResult], text: fn(&Label) -> &'static str) -> String {
    results
        .iter()
        .filter_map(|r| r.label())
        .map(|l| format!("{}\n", text(&l)))
        .collect()
}

fn format_verbose(result: &AnalysisResult, color: bool) -> String {
    let file = if color {
        result.file_path.as_str().cyan().to_string()
    } else {
        result.file_path.clone()
    };

    match &result.outcome {
        Ok(report) => {
            let name = report.label.name();
            let label = match (color, report.label) {
                (false, _) => name.to_string(),
                (true, Label::High) => name.magenta().to_string(),
                (true, Label::Low) => name.blue().to_string(),
            };
            let mut line = format!(
                "{} {}  autocorrelation {:.1} Hz | spectral {:.1} Hz",
                file,
                label,
                report.autocorrelation_hz,
                report.spectral_hz
            );
            for diag in &report.diagnostics {
                match (diag.frequency_hz, &diag.error) {
                    (Some(hz), _) => line.push_str(&format!(" | {} {:.1} Hz", diag.estimator, hz)),
                    (None, Some(e)) => line.push_str(&format!(" | {} n/a ({})", diag.estimator, e)),
                    (None, None) => {}
                }
            }
            line.push_str(&format!(
                "\n    {} Hz, {} ch, {:.2}s\n",
                report.sample_rate, report.channels, report.duration_secs
            ));
            line
        }
        Err(e) => {
            let skipped = if color {
                "SKIPPED".yellow().to_string()
            } else {
                "SKIPPED".to_string()
            };
            format!("{} {}  {}\n", file, skipped, e)
        }
    }
}

fn report_json(file_path: &str, report: &VoiceReport) -> Value {
    let mut value = serde_json::to_value(report).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        map.insert("file".to_string(), Value::String(file_path.to_string()));
    }
    value
}

/// Format all results as a JSON array
pub fn format_json(results: &[AnalysisResult]) -> String {
    let entries: Vec<Value> = results
        .iter()
        .map(|r| match &r.outcome {
            Ok(report) => report_json(&r.file_path, report),
            Err(e) => json!({ "file": r.file_path, "error": e.to_string() }),
        })
        .collect();
    serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string()) + "\n"
}

/// One-line tally for stderr
pub fn format_summary(results: &[AnalysisResult]) -> String {
    let count = |label| results.iter().filter(|r| r.label() == Some(label)).count();
    let failed = results.iter().filter(|r| r.outcome.is_err()).count();
    format!(
        "{} clip(s): {} low, {} high, {} skipped",
        results.len(),
        count(Label::Low),
        count(Label::High),
        failed
    )
}
