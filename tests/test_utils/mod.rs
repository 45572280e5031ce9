// tests/test_utils/mod.rs
//
// Shared helpers: synthetic voice-like signals and WAV fixtures.

#![allow(dead_code)]

use hound::{SampleFormat, WavSpec, WavWriter};
use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

pub const SAMPLE_RATE: u32 = 16000;

pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_voicepitch"))
}

pub fn run_voicepitch<I, S>(args: I) -> std::process::Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(get_binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute voicepitch")
}

/// Fresh directory under the system temp dir, removed on drop
pub struct Scratch {
    pub dir: PathBuf,
}

impl Scratch {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("voicepitch-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("Failed to create scratch dir");
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

/// Harmonic tone with decaying partials, roughly like a sustained vowel
pub fn voiced(f0: f64, secs: f64, amplitude: f64) -> Vec<f64> {
    let n = (SAMPLE_RATE as f64 * secs) as usize;
    let weights = [1.0, 0.5, 0.25, 0.125];
    (0..n)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE as f64;
            amplitude
                * weights
                    .iter()
                    .enumerate()
                    .map(|(h, w)| w * (2.0 * PI * f0 * (h + 1) as f64 * t).sin())
                    .sum::<f64>()
                / 1.875
        })
        .collect()
}

pub fn sine(freq: f64, secs: f64, amplitude: f64) -> Vec<f64> {
    let n = (SAMPLE_RATE as f64 * secs) as usize;
    (0..n)
        .map(|i| amplitude * (2.0 * PI * freq * i as f64 / SAMPLE_RATE as f64).sin())
        .collect()
}

pub fn to_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|s| (s * i16::MAX as f64).round().clamp(i16::MIN as f64, i16::MAX as f64) as i16)
        .collect()
}

/// Interleave per-channel sample vectors of equal length
pub fn interleave(channels: &[Vec<i16>]) -> Vec<i16> {
    let frames = channels.iter().map(|c| c.len()).min().unwrap_or(0);
    (0..frames)
        .flat_map(|i| channels.iter().map(move |c| c[i]))
        .collect()
}

pub fn write_wav_i16(path: &Path, channels: u16, interleaved: &[i16]) {
    let spec = WavSpec {
        channels,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).expect("Failed to create wav");
    for &s in interleaved {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize wav");
}

pub fn write_mono_wav(path: &Path, samples: &[f64]) {
    write_wav_i16(path, 1, &to_i16(samples));
}
