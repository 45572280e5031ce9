// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::{Args, OutputFormat};
pub use output::{format_json, format_summary, render};

use anyhow::{bail, Context, Result};
use colorful::Colorful;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::VoiceAnalyzer;
use crate::detection::AnalysisResult;

const AUDIO_EXTENSIONS: [&str; 9] = ["wav", "wave", "flac", "mp3", "ogg", "m4a", "aac", "aiff", "aif"];

/// Expand inputs into a list of files.
///
/// Explicit file arguments are kept as given, even when they do not exist,
/// so they show up as failed clips. Directories are walked recursively for
/// known audio extensions.
pub fn collect_audio_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && has_audio_extension(e.path()))
                .map(|e| e.into_path())
                .collect();
            found.sort();
            info!("{}: {} audio file(s)", input.display(), found.len());
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }

    files
}

fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| AUDIO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Analyze every file, in parallel, keeping input order
pub fn analyze_files(
    analyzer: &VoiceAnalyzer,
    files: &[PathBuf],
    progress: &ProgressBar,
) -> Vec<AnalysisResult> {
    files
        .par_iter()
        .progress_with(progress.clone())
        .map(|path| {
            AnalysisResult::new(path.display().to_string(), analyzer.analyze_file(path))
        })
        .collect()
}

fn progress_bar(enabled: bool, len: usize) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} clips ({eta})") {
        bar.set_style(style);
    }
    bar
}

/// Run the CLI with parsed arguments
pub fn run(args: &Args) -> Result<()> {
    let files = collect_audio_files(&args.inputs);
    if files.is_empty() {
        eprintln!("{}", "No audio files found!".red());
        bail!("no audio files found in the given inputs");
    }

    let analyzer = VoiceAnalyzer::builder()
        .config(args.analysis_config())
        .build();

    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = args.jobs {
        pool = pool.num_threads(jobs);
    }
    let pool = pool.build().context("Failed to start worker threads")?;

    let progress = progress_bar(args.progress, files.len());
    let results = pool.install(|| analyze_files(&analyzer, &files, &progress));
    progress.finish_and_clear();

    info!("{}", format_summary(&results));

    let mut stdout = std::io::stdout().lock();
    let color = stdout.is_terminal();
    stdout
        .write_all(render(&results, args.format, color).as_bytes())
        .context("Failed to write results")?;
    stdout.flush()?;

    Ok(())
}
