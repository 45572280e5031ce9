// src/core/decoder.rs
//
// Audio decoding into raw interleaved buffers.
// WAV goes through hound so integer samples keep their native values;
// every other container is decoded with Symphonia.

use anyhow::{bail, Context, Result};
use hound::{SampleFormat, WavReader};
use log::debug;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use std::fs::File;
use std::path::Path;

/// Raw sample storage as it came out of the decoder
#[derive(Debug, Clone, PartialEq)]
pub enum SampleData {
    /// Integer PCM at its native scale (e.g. +/-32768 for 16-bit)
    Int(Vec<i32>),
    /// Floating-point PCM as stored in the file
    Float(Vec<f32>),
}

impl SampleData {
    pub fn len(&self) -> usize {
        match self {
            SampleData::Int(v) => v.len(),
            SampleData::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at `index` widened to f64, without rescaling
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            SampleData::Int(v) => v.get(index).map(|&s| s as f64),
            SampleData::Float(v) => v.get(index).map(|&s| s as f64),
        }
    }
}

/// Decoded audio handed to the pitch core
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Interleaved samples
    pub samples: SampleData,
    /// Number of interleaved channels
    pub channels: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bit depth declared by the container (informational only)
    pub bits_per_sample: u16,
}

impl AudioBuffer {
    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels
        }
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frames() as f64 / self.sample_rate as f64
        }
    }
}

/// Decode an audio file into a raw buffer
pub fn decode_audio(path: &Path) -> Result<AudioBuffer> {
    let is_wav = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("wav") || e.eq_ignore_ascii_case("wave"))
        .unwrap_or(false);

    if is_wav {
        decode_wav(path)
    } else {
        decode_with_symphonia(path)
    }
}

/// Read a WAV file keeping integer samples unscaled
pub fn decode_wav(path: &Path) -> Result<AudioBuffer> {
    let reader = WavReader::open(path)
        .with_context(|| format!("Failed to open WAV file: {}", path.display()))?;
    let spec = reader.spec();
    debug!(
        "{}: wav {} ch, {} Hz, {}-bit {:?}",
        path.display(),
        spec.channels,
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format
    );

    let samples = read_wav_samples(reader)
        .with_context(|| format!("Failed to read WAV samples: {}", path.display()))?;

    if samples.is_empty() {
        bail!("No audio samples in file: {}", path.display());
    }

    Ok(AudioBuffer {
        samples,
        channels: spec.channels as usize,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
    })
}

fn read_wav_samples<R: std::io::Read>(mut reader: WavReader<R>) -> Result<SampleData> {
    let data = match reader.spec().sample_format {
        SampleFormat::Int => SampleData::Int(
            reader
                .samples::<i32>()
                .collect::<std::result::Result<Vec<_>, _>>()?,
        ),
        SampleFormat::Float => SampleData::Float(
            reader
                .samples::<f32>()
                .collect::<std::result::Result<Vec<_>, _>>()?,
        ),
    };
    Ok(data)
}

/// Decode any container Symphonia understands, producing 16-bit integers
pub fn decode_with_symphonia(path: &Path) -> Result<AudioBuffer> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(ext.to_str().unwrap_or(""));
    }

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .context("Failed to probe file format - may be corrupted or unsupported")?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("No supported audio track found in file")?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .context("File does not specify sample rate")?;
    let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1);
    if channels == 0 {
        bail!("File reports 0 audio channels");
    }

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("Failed to create decoder for audio codec")?;

    let mut samples: Vec<i32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<i16>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break
            }
            Err(symphonia::core::errors::Error::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                debug!("{}: skipping undecodable packet: {}", path.display(), e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let buf = sample_buf.get_or_insert_with(|| {
            SampleBuffer::new(decoded.capacity() as u64, *decoded.spec())
        });
        buf.copy_interleaved_ref(decoded);
        samples.extend(buf.samples().iter().map(|&s| s as i32));
    }

    if samples.is_empty() {
        bail!("No audio samples decoded from file");
    }

    debug!(
        "{}: decoded {} samples, {} ch, {} Hz",
        path.display(),
        samples.len(),
        channels,
        sample_rate
    );

    Ok(AudioBuffer {
        samples: SampleData::Int(samples),
        channels,
        sample_rate,
        bits_per_sample: 16,
    })
}
