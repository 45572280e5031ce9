//! Command-line arguments

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::AnalysisConfig;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One LOW/HIGH line per classified clip
    Label,
    /// One M/K line per classified clip
    Letter,
    /// Every clip with its estimates, failures included
    Verbose,
    /// JSON array with one object per clip
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "voicepitch")]
#[command(about = "Classify speaking voices as low or high pitched")]
#[command(version)]
pub struct Args {
    /// Audio files or directories to scan
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Label)]
    pub format: OutputFormat,

    /// Subtract the mean before estimating pitch
    #[arg(long)]
    pub remove_dc: bool,

    /// Skip the diagnostic zero-crossing estimate
    #[arg(long)]
    pub no_zero_crossing: bool,

    /// Number of worker threads (defaults to all cores)
    #[arg(short, long, env = "VOICEPITCH_JOBS")]
    pub jobs: Option<usize>,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            remove_dc: self.remove_dc,
            zero_crossing: !self.no_zero_crossing,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["voicepitch", "a.wav", "b.wav"]).unwrap();
        assert_eq!(args.inputs.len(), 2);
        assert_eq!(args.format, OutputFormat::Label);
        assert_eq!(args.analysis_config(), AnalysisConfig::default());
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "voicepitch",
            "--format",
            "json",
            "--remove-dc",
            "--no-zero-crossing",
            "-j",
            "2",
            "-vv",
            "clips/",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.analysis_config().remove_dc);
        assert!(!args.analysis_config().zero_crossing);
        assert_eq!(args.jobs, Some(2));
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_requires_input() {
        assert!(Args::try_parse_from(["voicepitch"]).is_err());
        assert!(Args::try_parse_from(["voicepitch", "--format", "xml", "a.wav"]).is_err());
    }
}
